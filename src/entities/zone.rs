//! Zone entity - a physical or logical partition of the vehicle

use serde::{Deserialize, Serialize};

/// 2-D position in the cabin plane, in meters
///
/// Used as a rough positional hint to estimate harness length between
/// zones; not a real installation coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A physical or logical zone with its own power and latency budgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name, unique within a requirement set
    pub name: String,

    /// Maximum power budget in kW (non-negative)
    pub max_power_kw: f64,

    /// Safety level tag (e.g. "ASIL-B")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_level: Option<String>,

    /// End-to-end latency budget in ms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_budget_ms: Option<f64>,

    /// Approximate position in the cabin plane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Zone {
    /// Distance between this zone and another, when both have positions
    pub fn distance_to(&self, other: &Zone) -> Option<f64> {
        match (&self.position, &other.position) {
            (Some(a), Some(b)) => Some(a.distance_to(b)),
            _ => None,
        }
    }
}
