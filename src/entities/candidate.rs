//! ArchitectureCandidate entity - one complete proposed architecture

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::placement::{Link, PlacedModule};
use crate::entities::zone::Zone;

/// One candidate zonal architecture
///
/// Created by the generator, then annotated by the scorer: `score`,
/// `penalties` and `metrics` are written once per scoring pass. The
/// cost/power/harness aggregates are always recomputed from the
/// placements and links, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureCandidate {
    /// Zones under consideration
    pub zones: Vec<Zone>,

    /// Placed module instances, in placement order
    pub placements: Vec<PlacedModule>,

    /// Links between placements, in synthesis order
    pub links: Vec<Link>,

    /// Feature ids dropped because no module supports them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_features: Vec<String>,

    /// Aggregate score; higher is better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Penalty value per category name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub penalties: BTreeMap<String, f64>,

    /// Metric value per metric name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, f64>,
}

impl ArchitectureCandidate {
    /// Assemble an unscored candidate
    pub fn new(zones: Vec<Zone>, placements: Vec<PlacedModule>, links: Vec<Link>) -> Self {
        Self {
            zones,
            placements,
            links,
            dropped_features: Vec::new(),
            score: None,
            penalties: BTreeMap::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Total hardware cost of all placed modules
    pub fn total_cost(&self) -> f64 {
        self.placements.iter().map(|pm| pm.module.cost).sum()
    }

    /// Total maximum power draw of all placed modules in kW
    pub fn total_power_kw(&self) -> f64 {
        self.placements.iter().map(|pm| pm.module.max_power_kw).sum()
    }

    /// Estimated harness length: the sum of all defined link lengths
    pub fn harness_length_m(&self) -> f64 {
        self.links.iter().filter_map(|l| l.length_m).sum()
    }

    /// Sum of placed-module power draw per zone name
    pub fn power_by_zone(&self) -> BTreeMap<String, f64> {
        let mut by_zone = BTreeMap::new();
        for pm in &self.placements {
            *by_zone.entry(pm.zone.name.clone()).or_insert(0.0) += pm.module.max_power_kw;
        }
        by_zone
    }
}
