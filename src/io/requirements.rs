//! Requirements document loading
//!
//! Parses a `requirements.json` document into a [`RequirementSet`].
//! Required fields (zone `name`/`max_power_kw`, feature `id`) abort the
//! run when missing; the only silent defaults are the ones the format
//! allows: redundancy 1, empty zone candidate lists, and a feature
//! display name falling back to its id.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entities::feature::default_redundancy;
use crate::entities::{Feature, Position, RequirementSet, Zone};
use crate::io::LoadError;
use crate::json::JsonParseError;

/// Wire shape of a requirements document
#[derive(Debug, Deserialize)]
struct RequirementsDoc {
    #[serde(default)]
    vehicle: VehicleDoc,

    // The original wire format called these "requirements".
    #[serde(default, alias = "requirements")]
    features: Vec<FeatureDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct VehicleDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    zones: Vec<ZoneDoc>,
}

#[derive(Debug, Deserialize)]
struct ZoneDoc {
    name: String,
    max_power_kw: f64,
    #[serde(default)]
    safety_level: Option<String>,
    #[serde(default)]
    latency_budget_ms: Option<f64>,
    #[serde(default)]
    position: Option<Position>,
}

#[derive(Debug, Deserialize)]
struct FeatureDoc {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    zone_hint: Option<String>,
    #[serde(default)]
    zone_candidates: Vec<String>,
    #[serde(default)]
    safety_level: Option<String>,
    #[serde(default)]
    latency_budget_ms: Option<f64>,
    #[serde(default = "default_redundancy")]
    redundancy: u32,
}

impl RequirementsDoc {
    fn into_requirement_set(self) -> RequirementSet {
        let zones = self
            .vehicle
            .zones
            .into_iter()
            .map(|z| Zone {
                name: z.name,
                max_power_kw: z.max_power_kw,
                safety_level: z.safety_level,
                latency_budget_ms: z.latency_budget_ms,
                position: z.position,
            })
            .collect();

        let features = self
            .features
            .into_iter()
            .map(|f| Feature {
                name: f.name.unwrap_or_else(|| f.id.clone()),
                id: f.id,
                description: f.description,
                zone_hint: f.zone_hint,
                zone_candidates: f.zone_candidates,
                safety_level: f.safety_level,
                latency_budget_ms: f.latency_budget_ms,
                redundancy: f.redundancy,
            })
            .collect();

        RequirementSet {
            vehicle_name: self
                .vehicle
                .name
                .unwrap_or_else(|| "Unnamed vehicle".to_string()),
            zones,
            features,
        }
    }
}

/// Parse and validate a requirements document from a string
///
/// `origin` names the source in diagnostics (usually the file path).
pub fn requirements_from_str(content: &str, origin: &str) -> Result<RequirementSet, LoadError> {
    let doc: RequirementsDoc = serde_json::from_str(content)
        .map_err(|e| JsonParseError::from_serde_error(&e, content, origin))?;

    let set = doc.into_requirement_set();
    set.validate()?;
    Ok(set)
}

/// Load a requirement set from a JSON file
pub fn load_requirements(path: &Path) -> Result<RequirementSet, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    requirements_from_str(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "vehicle": {
            "name": "Demo Car",
            "zones": [
                {"name": "Front-Left", "max_power_kw": 2.5,
                 "safety_level": "ASIL-B", "latency_budget_ms": 10.0,
                 "position": {"x": 0.8, "y": 1.6}},
                {"name": "Rear", "max_power_kw": 2.0}
            ]
        },
        "features": [
            {"id": "F_CAM_F", "name": "Front camera", "zone_hint": "Front-Left",
             "zone_candidates": ["Front-Left", "Front-Right"], "redundancy": 2},
            {"id": "F_ABS"}
        ]
    }"#;

    #[test]
    fn test_parse_valid_document() {
        let set = requirements_from_str(VALID, "test.json").unwrap();

        assert_eq!(set.vehicle_name, "Demo Car");
        assert_eq!(set.zones.len(), 2);
        assert_eq!(set.zones[0].safety_level.as_deref(), Some("ASIL-B"));
        assert_eq!(set.zones[0].position.unwrap().x, 0.8);
        assert_eq!(set.zones[1].latency_budget_ms, None);

        assert_eq!(set.features.len(), 2);
        assert_eq!(set.features[0].name, "Front camera");
        assert_eq!(set.features[0].redundancy, 2);
        // Display name falls back to the id.
        assert_eq!(set.features[1].name, "F_ABS");
        assert_eq!(set.features[1].redundancy, 1);
    }

    #[test]
    fn test_legacy_requirements_key_accepted() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
            "requirements": [{"id": "F1"}]
        }"#;
        let set = requirements_from_str(content, "test.json").unwrap();
        assert_eq!(set.vehicle_name, "Unnamed vehicle");
        assert_eq!(set.features[0].id, "F1");
    }

    #[test]
    fn test_missing_zone_power_is_a_hard_error() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z"}]},
            "features": [{"id": "F1"}]
        }"#;
        let err = requirements_from_str(content, "test.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("max_power_kw"));
    }

    #[test]
    fn test_missing_feature_id_is_a_hard_error() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
            "features": [{"name": "anonymous"}]
        }"#;
        let err = requirements_from_str(content, "test.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_non_list_zone_candidates_is_a_hard_error() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
            "features": [{"id": "F1", "zone_candidates": "Front"}]
        }"#;
        assert!(requirements_from_str(content, "test.json").is_err());
    }

    #[test]
    fn test_non_integer_redundancy_is_a_hard_error() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z", "max_power_kw": 1.0}]},
            "features": [{"id": "F1", "redundancy": "two"}]
        }"#;
        assert!(requirements_from_str(content, "test.json").is_err());
    }

    #[test]
    fn test_invalid_json_syntax_is_a_hard_error() {
        let err = requirements_from_str("{not json", "test.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let content = r#"{
            "vehicle": {"zones": [{"name": "Z", "max_power_kw": -1.0}]},
            "features": [{"id": "F1"}]
        }"#;
        let err = requirements_from_str(content, "test.json").unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.json");
        fs::write(&path, VALID).unwrap();

        let set = load_requirements(&path).unwrap();
        assert_eq!(set.vehicle_name, "Demo Car");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_requirements(Path::new("/nonexistent/requirements.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
