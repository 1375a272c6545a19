//! Feature entity - a vehicle-level capability requirement

use serde::{Deserialize, Serialize};

/// A vehicle-level feature to be satisfied by one or more modules
/// (e.g. "front camera", "ABS", "ADAS ECU")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Unique identifier within a requirement set
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Preferred zone name; always wins over other placement preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_hint: Option<String>,

    /// Acceptable zone names, in priority order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_candidates: Vec<String>,

    /// Safety level tag (e.g. "ASIL-B")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_level: Option<String>,

    /// Latency budget in ms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_budget_ms: Option<f64>,

    /// Desired instance count (>= 1)
    #[serde(default = "default_redundancy")]
    pub redundancy: u32,
}

pub(crate) fn default_redundancy() -> u32 {
    1
}

impl Feature {
    /// Create a feature with the given id, using the id as display name
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: None,
            zone_hint: None,
            zone_candidates: Vec::new(),
            safety_level: None,
            latency_budget_ms: None,
            redundancy: 1,
        }
    }

    /// Set the preferred zone
    pub fn with_zone_hint(mut self, zone: impl Into<String>) -> Self {
        self.zone_hint = Some(zone.into());
        self
    }
}
