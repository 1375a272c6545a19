//! Module entity - hardware catalog entries and the module library

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::feature::default_redundancy;
use crate::entities::ValidationError;

/// Latency class of a module; governs the link medium chosen for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyClass {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for LatencyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatencyClass::Low => write!(f, "low"),
            LatencyClass::Medium => write!(f, "medium"),
            LatencyClass::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for LatencyClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(LatencyClass::Low),
            "medium" => Ok(LatencyClass::Medium),
            "high" => Ok(LatencyClass::High),
            _ => Err(format!("Unknown latency class: {}", s)),
        }
    }
}

/// A hardware module type from the catalog (capabilities, cost, limits)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier within a library
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit hardware cost (non-negative)
    pub cost: f64,

    /// Maximum power draw in kW (non-negative)
    pub max_power_kw: f64,

    /// Ids of the features this module can satisfy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_features: Vec<String>,

    /// Latency class; a low-latency module gets Ethernet links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_class: Option<LatencyClass>,

    /// Zones this module may be placed in, in priority order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_candidates: Vec<String>,

    /// Desired instance count (>= 1)
    #[serde(default = "default_redundancy")]
    pub redundancy: u32,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Module {
    /// Whether this module can satisfy the given feature id
    pub fn supports(&self, feature_id: &str) -> bool {
        self.supported_features.iter().any(|f| f == feature_id)
    }
}

/// All module types available to the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleLibrary {
    pub modules: Vec<Module>,
}

impl ModuleLibrary {
    /// All modules that can satisfy the given feature id, in library order
    ///
    /// Library order is the tie-break for "first supporting module", so
    /// this must never reorder.
    pub fn supporting_modules(&self, feature_id: &str) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|m| m.supports(feature_id))
            .collect()
    }

    /// Look up a module by id
    pub fn module_by_id(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Check the structural invariants of the library
    ///
    /// Enforces: non-empty unique module ids, non-negative cost and
    /// power draw, redundancy >= 1.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut ids = HashSet::new();
        for module in &self.modules {
            if module.id.is_empty() {
                return Err(ValidationError::EmptyModuleId);
            }
            if !ids.insert(module.id.as_str()) {
                return Err(ValidationError::DuplicateModule {
                    id: module.id.clone(),
                });
            }
            if module.cost < 0.0 {
                return Err(ValidationError::NegativeCost {
                    id: module.id.clone(),
                });
            }
            if module.max_power_kw < 0.0 {
                return Err(ValidationError::NegativePower {
                    entity: format!("module '{}'", module.id),
                });
            }
            if module.redundancy < 1 {
                return Err(ValidationError::ZeroRedundancy {
                    entity: format!("module '{}'", module.id),
                });
            }
        }
        Ok(())
    }
}
