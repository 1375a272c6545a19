//! RequirementSet entity - all zones and features of one vehicle

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::feature::Feature;
use crate::entities::zone::Zone;
use crate::entities::ValidationError;

/// Container for the zones and feature requirements of a vehicle
///
/// Immutable for the duration of one compile run; the generator and
/// scorer only read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Vehicle display name
    pub vehicle_name: String,

    /// Zones under consideration (unique names)
    pub zones: Vec<Zone>,

    /// Feature requirements, in declaration order
    pub features: Vec<Feature>,
}

impl RequirementSet {
    /// Look up a zone by name
    pub fn zone_by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Check the structural invariants of the set
    ///
    /// Enforces: at least one zone and one feature, unique zone names,
    /// non-negative zone power budgets, non-empty unique feature ids,
    /// and redundancy >= 1.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.zones.is_empty() {
            return Err(ValidationError::NoZones {
                vehicle: self.vehicle_name.clone(),
            });
        }

        let mut zone_names = HashSet::new();
        for zone in &self.zones {
            if zone.name.is_empty() {
                return Err(ValidationError::EmptyZoneName);
            }
            if !zone_names.insert(zone.name.as_str()) {
                return Err(ValidationError::DuplicateZone {
                    name: zone.name.clone(),
                });
            }
            if zone.max_power_kw < 0.0 {
                return Err(ValidationError::NegativePower {
                    entity: format!("zone '{}'", zone.name),
                });
            }
        }

        if self.features.is_empty() {
            return Err(ValidationError::NoFeatures {
                vehicle: self.vehicle_name.clone(),
            });
        }

        let mut feature_ids = HashSet::new();
        for feature in &self.features {
            if feature.id.is_empty() {
                return Err(ValidationError::EmptyFeatureId);
            }
            if !feature_ids.insert(feature.id.as_str()) {
                return Err(ValidationError::DuplicateFeature {
                    id: feature.id.clone(),
                });
            }
            if feature.redundancy < 1 {
                return Err(ValidationError::ZeroRedundancy {
                    entity: format!("feature '{}'", feature.id),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str, max_power_kw: f64) -> Zone {
        Zone {
            name: name.to_string(),
            max_power_kw,
            safety_level: None,
            latency_budget_ms: None,
            position: None,
        }
    }

    fn set(zones: Vec<Zone>, features: Vec<Feature>) -> RequirementSet {
        RequirementSet {
            vehicle_name: "Test Car".to_string(),
            zones,
            features,
        }
    }

    #[test]
    fn test_zone_by_name() {
        let s = set(
            vec![zone("Front", 1.0), zone("Rear", 2.0)],
            vec![Feature::new("F1")],
        );
        assert_eq!(s.zone_by_name("Rear").unwrap().max_power_kw, 2.0);
        assert!(s.zone_by_name("Roof").is_none());
    }

    #[test]
    fn test_validate_ok() {
        let s = set(vec![zone("Front", 1.0)], vec![Feature::new("F1")]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_zones() {
        let s = set(vec![], vec![Feature::new("F1")]);
        assert!(matches!(s.validate(), Err(ValidationError::NoZones { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicate_zone_names() {
        let s = set(
            vec![zone("Front", 1.0), zone("Front", 2.0)],
            vec![Feature::new("F1")],
        );
        assert!(matches!(
            s.validate(),
            Err(ValidationError::DuplicateZone { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_power_budget() {
        let s = set(vec![zone("Front", -0.5)], vec![Feature::new("F1")]);
        assert!(matches!(
            s.validate(),
            Err(ValidationError::NegativePower { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_feature_ids() {
        let s = set(
            vec![zone("Front", 1.0)],
            vec![Feature::new("F1"), Feature::new("F1")],
        );
        assert!(matches!(
            s.validate(),
            Err(ValidationError::DuplicateFeature { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_redundancy() {
        let mut f = Feature::new("F1");
        f.redundancy = 0;
        let s = set(vec![zone("Front", 1.0)], vec![f]);
        assert!(matches!(
            s.validate(),
            Err(ValidationError::ZeroRedundancy { .. })
        ));
    }
}
