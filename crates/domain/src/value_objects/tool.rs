//! Tool identifiers
//!
//! Tools are stateless widgets; the domain only knows which one is open.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    Calculator,
    Ruler,
    UnitConverter,
    Stopwatch,
    DrawingBoard,
    Dictionary,
}

impl ToolId {
    pub const ALL: [ToolId; 6] = [
        ToolId::Calculator,
        ToolId::Ruler,
        ToolId::UnitConverter,
        ToolId::Stopwatch,
        ToolId::DrawingBoard,
        ToolId::Dictionary,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ToolId::Calculator => "calculator",
            ToolId::Ruler => "ruler",
            ToolId::UnitConverter => "unit-converter",
            ToolId::Stopwatch => "stopwatch",
            ToolId::DrawingBoard => "drawing-board",
            ToolId::Dictionary => "dictionary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolId::Calculator => "Hesap Makinesi",
            ToolId::Ruler => "Cetvel",
            ToolId::UnitConverter => "Birim Çevirici",
            ToolId::Stopwatch => "Kronometre",
            ToolId::DrawingBoard => "Çizim Tahtası",
            ToolId::Dictionary => "Sözlük",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ToolId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.slug() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown tool: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_parse_back() {
        for tool in ToolId::ALL {
            assert_eq!(tool.slug().parse::<ToolId>().unwrap(), tool);
        }
        assert!("protractor".parse::<ToolId>().is_err());
    }
}
