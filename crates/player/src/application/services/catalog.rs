//! Activity catalog and arithmetic question generation
//!
//! The catalog is static: each planet (age group) hosts a fixed set of
//! activities. Question content is generated on the fly from the platform RNG.

use mucit_domain::{ActivityId, ActivityKind, AgeGroup, Difficulty};

use crate::ports::outbound::PlatformPort;

/// Arithmetic an activity drills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ActivityKind,
    pub age_group: AgeGroup,
    pub operation: Operation,
}

impl ActivityDescriptor {
    pub fn activity_id(&self) -> ActivityId {
        ActivityId::from_static(self.id)
    }
}

const fn entry(
    id: &'static str,
    title: &'static str,
    kind: ActivityKind,
    age_group: AgeGroup,
    operation: Operation,
) -> ActivityDescriptor {
    ActivityDescriptor {
        id,
        title,
        kind,
        age_group,
        operation,
    }
}

static CATALOG: [ActivityDescriptor; 12] = [
    entry("renk-sayma", "Renkli Balonlar", ActivityKind::Game, AgeGroup::Preschool, Operation::Add),
    entry("sekil-avi", "Şekil Avı", ActivityKind::Game, AgeGroup::Preschool, Operation::Add),
    entry("parmak-hesabi", "Parmak Hesabı", ActivityKind::Quiz, AgeGroup::Preschool, Operation::Add),
    entry("elma-toplama", "Elma Toplama", ActivityKind::Game, AgeGroup::Preschool, Operation::Subtract),
    entry("toplama-yarisi", "Toplama Yarışı", ActivityKind::Quiz, AgeGroup::Early, Operation::Add),
    entry("cikarma-kopru", "Çıkarma Köprüsü", ActivityKind::Game, AgeGroup::Early, Operation::Subtract),
    entry("ikiser-sayma", "İkişer Sayma", ActivityKind::Quiz, AgeGroup::Early, Operation::Multiply),
    entry("pazar-alisveris", "Pazar Alışverişi", ActivityKind::Game, AgeGroup::Early, Operation::Subtract),
    entry("carpim-tablosu", "Çarpım Tablosu", ActivityKind::Quiz, AgeGroup::Middle, Operation::Multiply),
    entry("bolme-makinesi", "Bölme Makinesi", ActivityKind::Game, AgeGroup::Middle, Operation::Divide),
    entry("roket-yakiti", "Roket Yakıtı", ActivityKind::Game, AgeGroup::Middle, Operation::Multiply),
    entry("mucit-sinavi", "Mucit Sınavı", ActivityKind::Quiz, AgeGroup::Middle, Operation::Divide),
];

/// Activities hosted by one planet
pub fn activities_for(age_group: AgeGroup) -> Vec<ActivityDescriptor> {
    CATALOG
        .iter()
        .filter(|a| a.age_group == age_group)
        .copied()
        .collect()
}

pub fn find_activity(id: &str) -> Option<ActivityDescriptor> {
    CATALOG.iter().find(|a| a.id == id).copied()
}

/// Total number of activities across every age group
pub fn catalog_size() -> usize {
    CATALOG.len()
}

/// Number of questions in one activity round
pub const ROUND_LENGTH: u32 = 5;

const CHOICE_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub left: i32,
    pub right: i32,
    pub operation: Operation,
    pub answer: i32,
    /// Multiple-choice options, exactly one equals `answer`
    pub choices: Vec<i32>,
}

impl Question {
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.left, self.operation.symbol(), self.right)
    }

    pub fn is_correct(&self, choice: i32) -> bool {
        choice == self.answer
    }
}

/// Builds arithmetic questions scaled to age group and difficulty
pub struct QuestionGenerator<'a> {
    platform: &'a dyn PlatformPort,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(platform: &'a dyn PlatformPort) -> Self {
        Self { platform }
    }

    /// Largest operand for an age group at a difficulty
    pub fn operand_limit(age_group: AgeGroup, difficulty: Difficulty) -> i32 {
        let base = match age_group {
            AgeGroup::Preschool => 5,
            AgeGroup::Early => 10,
            AgeGroup::Middle => 12,
        };
        base * difficulty.multiplier() as i32
    }

    pub fn question(
        &self,
        operation: Operation,
        age_group: AgeGroup,
        difficulty: Difficulty,
    ) -> Question {
        let limit = Self::operand_limit(age_group, difficulty);
        let (left, right, answer) = match operation {
            Operation::Add => {
                let a = self.platform.random_range(1, limit);
                let b = self.platform.random_range(1, limit);
                (a, b, a + b)
            }
            Operation::Subtract => {
                let a = self.platform.random_range(1, limit);
                let b = self.platform.random_range(1, limit);
                let (high, low) = if a >= b { (a, b) } else { (b, a) };
                (high, low, high - low)
            }
            Operation::Multiply => {
                let a = self.platform.random_range(1, limit.min(12));
                let b = self.platform.random_range(1, limit);
                (a, b, a * b)
            }
            Operation::Divide => {
                let divisor = self.platform.random_range(1, limit.min(12));
                let quotient = self.platform.random_range(1, limit);
                (divisor * quotient, divisor, quotient)
            }
        };

        Question {
            left,
            right,
            operation,
            answer,
            choices: self.choices(answer),
        }
    }

    /// One round of questions for an activity
    pub fn round(&self, activity: &ActivityDescriptor, difficulty: Difficulty) -> Vec<Question> {
        (0..ROUND_LENGTH)
            .map(|_| self.question(activity.operation, activity.age_group, difficulty))
            .collect()
    }

    /// Mixed questions drawn from every operation the planet uses
    pub fn exam(&self, age_group: AgeGroup, count: u32) -> Vec<Question> {
        let mut operations: Vec<Operation> = Vec::new();
        for activity in activities_for(age_group) {
            if !operations.contains(&activity.operation) {
                operations.push(activity.operation);
            }
        }
        if operations.is_empty() {
            operations.push(Operation::Add);
        }

        (0..count)
            .map(|_| {
                let index = self
                    .platform
                    .random_range(0, operations.len() as i32 - 1)
                    .clamp(0, operations.len() as i32 - 1) as usize;
                self.question(operations[index], age_group, Difficulty::Medium)
            })
            .collect()
    }

    fn choices(&self, answer: i32) -> Vec<i32> {
        let mut choices = vec![answer];
        let mut step = 0;
        while choices.len() < CHOICE_COUNT {
            step += 1;
            let offset = self.platform.random_range(1, 5);
            let candidate = if self.platform.random_f64() < 0.5 {
                answer - offset
            } else {
                answer + offset
            };
            // Past a few collisions, fall back to a deterministic neighbour.
            let candidate = if step > 12 { answer + step } else { candidate };
            if candidate >= 0 && !choices.contains(&candidate) {
                choices.push(candidate);
            }
        }

        let slot = self
            .platform
            .random_range(0, CHOICE_COUNT as i32 - 1)
            .clamp(0, CHOICE_COUNT as i32 - 1) as usize;
        choices.swap(0, slot);
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    #[test]
    fn every_planet_hosts_activities() {
        for group in AgeGroup::ALL {
            assert_eq!(activities_for(group).len(), 4);
        }
        assert_eq!(catalog_size(), 12);
    }

    #[test]
    fn catalog_ids_are_unique_slugs() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(ActivityId::new(a.id).is_ok());
            assert!(CATALOG[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn find_activity_by_id() {
        let found = find_activity("carpim-tablosu").unwrap();
        assert_eq!(found.age_group, AgeGroup::Middle);
        assert_eq!(found.activity_id().as_str(), "carpim-tablosu");
        assert!(find_activity("yok").is_none());
    }

    #[test]
    fn operand_limit_scales_with_difficulty() {
        assert_eq!(QuestionGenerator::operand_limit(AgeGroup::Preschool, Difficulty::Easy), 5);
        assert_eq!(QuestionGenerator::operand_limit(AgeGroup::Early, Difficulty::Hard), 30);
    }

    #[test]
    fn questions_are_well_formed() {
        let platform = MockPlatform::new().with_seed(3).build();
        let generator = QuestionGenerator::new(&platform);
        for operation in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            for _ in 0..25 {
                let q = generator.question(operation, AgeGroup::Early, Difficulty::Medium);
                let expected = match operation {
                    Operation::Add => q.left + q.right,
                    Operation::Subtract => q.left - q.right,
                    Operation::Multiply => q.left * q.right,
                    Operation::Divide => q.left / q.right,
                };
                assert_eq!(q.answer, expected);
                assert!(q.answer >= 0);
                assert_eq!(q.choices.len(), 4);
                assert_eq!(q.choices.iter().filter(|c| **c == q.answer).count(), 1);
                assert!(q.is_correct(q.answer));
            }
        }
    }

    #[test]
    fn division_has_no_remainder() {
        let platform = MockPlatform::new().with_seed(11).build();
        let generator = QuestionGenerator::new(&platform);
        for _ in 0..25 {
            let q = generator.question(Operation::Divide, AgeGroup::Middle, Difficulty::Hard);
            assert_eq!(q.left % q.right, 0);
        }
    }

    #[test]
    fn exam_uses_planet_operations() {
        let platform = MockPlatform::new().build();
        let generator = QuestionGenerator::new(&platform);
        let exam = generator.exam(AgeGroup::Preschool, 10);
        assert_eq!(exam.len(), 10);
        assert!(exam
            .iter()
            .all(|q| matches!(q.operation, Operation::Add | Operation::Subtract)));
    }

    #[test]
    fn round_has_fixed_length() {
        let platform = MockPlatform::new().build();
        let generator = QuestionGenerator::new(&platform);
        let activity = find_activity("toplama-yarisi").unwrap();
        assert_eq!(generator.round(&activity, Difficulty::Easy).len(), ROUND_LENGTH as usize);
    }
}
