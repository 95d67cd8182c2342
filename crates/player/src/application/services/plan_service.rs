//! Plan Service - one checklist per student per day

use std::sync::Arc;

use mucit_domain::{DailyPlan, RecordId, StudentNumber};

use crate::application::services::{local_cache, log_remote_failure, write_behind};
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RemoteDataPort};

#[derive(Clone)]
pub struct PlanService {
    remote: Arc<dyn RemoteDataPort>,
    platform: Arc<dyn PlatformPort>,
}

fn latest_day_first(plans: &mut [DailyPlan]) {
    plans.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Split plans so each day keeps one: the one with the most items, then the
/// one created first. Returns the kept plans and the surplus.
fn one_per_day(plans: Vec<DailyPlan>) -> (Vec<DailyPlan>, Vec<DailyPlan>) {
    let mut kept: Vec<DailyPlan> = Vec::with_capacity(plans.len());
    let mut surplus = Vec::new();
    for plan in plans {
        match kept.iter_mut().find(|k| k.date == plan.date) {
            None => kept.push(plan),
            Some(existing) => {
                let better = plan.items.len() > existing.items.len()
                    || (plan.items.len() == existing.items.len()
                        && plan.created_at < existing.created_at);
                if better {
                    surplus.push(std::mem::replace(existing, plan));
                } else {
                    surplus.push(plan);
                }
            }
        }
    }
    (kept, surplus)
}

impl PlanService {
    pub fn new(remote: Arc<dyn RemoteDataPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { remote, platform }
    }

    /// Cached plans, most recent day first
    pub fn list(&self, student: &StudentNumber) -> Vec<DailyPlan> {
        let mut plans: Vec<DailyPlan> =
            local_cache::load(self.platform.as_ref(), &storage_keys::plans(student.as_str()));
        latest_day_first(&mut plans);
        plans
    }

    /// Merge the remote plans into the cache and return the result.
    ///
    /// A day may come back with two plans when it was started on two devices
    /// before they synced; the emptier one is dropped everywhere.
    pub async fn refresh(&self, student: &StudentNumber) -> Vec<DailyPlan> {
        let key = storage_keys::plans(student.as_str());
        let remote = match self.remote.list_plans(student).await {
            Ok(remote) => remote,
            Err(e) => {
                log_remote_failure("list_plans", student, &e);
                return self.list(student);
            }
        };

        let merged = local_cache::merge(self.platform.as_ref(), &key, remote);
        let (mut plans, surplus) = one_per_day(merged);
        if !surplus.is_empty() {
            local_cache::store(self.platform.as_ref(), &key, &plans);
            for plan in surplus {
                tracing::debug!(
                    student_number = %student,
                    date = %plan.date,
                    "Dropping duplicate daily plan"
                );
                self.delete_remote(student, &plan.id);
            }
        }
        latest_day_first(&mut plans);
        plans
    }

    /// Today's plan from the cache, created empty on first access.
    pub fn today(&self, student: &StudentNumber) -> DailyPlan {
        let today = self.platform.today();
        if let Some(plan) = self.list(student).into_iter().find(|plan| plan.date == today) {
            return plan;
        }

        let platform = &self.platform;
        let id = RecordId::generate(platform.now_millis(), || {
            platform.random_range(0, 0xffff) as u32
        });
        let plan = DailyPlan::new(id, student.clone(), today, platform.now_utc());

        local_cache::upsert(self.platform.as_ref(), &storage_keys::plans(student.as_str()), &plan);
        let remote = Arc::clone(&self.remote);
        let sent = plan.clone();
        write_behind(self.platform.as_ref(), "add_plan", student.clone(), async move {
            remote.add_plan(&sent).await
        });
        tracing::debug!(student_number = %student, date = %today, "Started daily plan");
        plan
    }

    pub fn add_item(&self, plan: &DailyPlan, text: &str) -> Result<DailyPlan, ServiceError> {
        let mut plan = plan.clone();
        plan.add_item(text, self.platform.now_utc())?;
        self.save(&plan);
        Ok(plan)
    }

    pub fn toggle_item(&self, plan: &DailyPlan, index: usize) -> Result<DailyPlan, ServiceError> {
        let mut plan = plan.clone();
        plan.toggle_item(index, self.platform.now_utc())?;
        self.save(&plan);
        Ok(plan)
    }

    pub fn remove_item(&self, plan: &DailyPlan, index: usize) -> Result<DailyPlan, ServiceError> {
        let mut plan = plan.clone();
        plan.remove_item(index, self.platform.now_utc())?;
        self.save(&plan);
        Ok(plan)
    }

    pub fn save(&self, plan: &DailyPlan) {
        let key = storage_keys::plans(plan.student_number.as_str());
        local_cache::upsert(self.platform.as_ref(), &key, plan);
        let remote = Arc::clone(&self.remote);
        let sent = plan.clone();
        write_behind(
            self.platform.as_ref(),
            "update_plan",
            plan.student_number.clone(),
            async move { remote.update_plan(&sent).await },
        );
    }

    pub fn delete(&self, student: &StudentNumber, id: &RecordId) {
        local_cache::remove::<DailyPlan>(
            self.platform.as_ref(),
            &storage_keys::plans(student.as_str()),
            id,
        );
        self.delete_remote(student, id);
    }

    fn delete_remote(&self, student: &StudentNumber, id: &RecordId) {
        let remote = Arc::clone(&self.remote);
        let (owner, id) = (student.clone(), id.clone());
        write_behind(self.platform.as_ref(), "delete_plan", student.clone(), async move {
            remote.delete_plan(&owner, &id).await
        });
    }
}
