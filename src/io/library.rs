//! Module library document loading
//!
//! Parses a `modules.json` document into a [`ModuleLibrary`] with the
//! same strictness stance as the requirements loader: `id`, `cost` and
//! `max_power_kw` are required on every module.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entities::feature::default_redundancy;
use crate::entities::{LatencyClass, Module, ModuleLibrary};
use crate::io::LoadError;
use crate::json::JsonParseError;

/// Wire shape of a module library document
#[derive(Debug, Deserialize)]
struct LibraryDoc {
    #[serde(default)]
    modules: Vec<ModuleDoc>,
}

#[derive(Debug, Deserialize)]
struct ModuleDoc {
    id: String,
    #[serde(default)]
    name: Option<String>,
    cost: f64,
    max_power_kw: f64,

    // The original wire format called these "supported_requirements".
    #[serde(default, alias = "supported_requirements")]
    supported_features: Vec<String>,

    #[serde(default)]
    latency_class: Option<LatencyClass>,
    #[serde(default)]
    zone_candidates: Vec<String>,
    #[serde(default = "default_redundancy")]
    redundancy: u32,
    #[serde(default)]
    notes: Option<String>,
}

impl LibraryDoc {
    fn into_library(self) -> ModuleLibrary {
        let modules = self
            .modules
            .into_iter()
            .map(|m| Module {
                name: m.name.unwrap_or_else(|| m.id.clone()),
                id: m.id,
                cost: m.cost,
                max_power_kw: m.max_power_kw,
                supported_features: m.supported_features,
                latency_class: m.latency_class,
                zone_candidates: m.zone_candidates,
                redundancy: m.redundancy,
                notes: m.notes,
            })
            .collect();

        ModuleLibrary { modules }
    }
}

/// Parse and validate a module library from a string
pub fn library_from_str(content: &str, origin: &str) -> Result<ModuleLibrary, LoadError> {
    let doc: LibraryDoc = serde_json::from_str(content)
        .map_err(|e| JsonParseError::from_serde_error(&e, content, origin))?;

    let library = doc.into_library();
    library.validate()?;
    Ok(library)
}

/// Load a module library from a JSON file
pub fn load_module_library(path: &Path) -> Result<ModuleLibrary, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    library_from_str(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "modules": [
            {"id": "MOD_CAM_ECU", "name": "Camera ECU", "cost": 50.0,
             "max_power_kw": 0.2, "supported_features": ["F_CAM_F"],
             "latency_class": "low", "zone_candidates": ["Front-Left"]},
            {"id": "MOD_BODY", "cost": 30.0, "max_power_kw": 0.1,
             "supported_requirements": ["F_ABS"], "redundancy": 2,
             "notes": "shared body controller"}
        ]
    }"#;

    #[test]
    fn test_parse_valid_library() {
        let library = library_from_str(VALID, "modules.json").unwrap();

        assert_eq!(library.modules.len(), 2);
        assert_eq!(library.modules[0].name, "Camera ECU");
        assert_eq!(library.modules[0].latency_class, Some(LatencyClass::Low));
        // Name falls back to id, and the legacy supported_requirements
        // key maps onto supported_features.
        assert_eq!(library.modules[1].name, "MOD_BODY");
        assert_eq!(library.modules[1].supported_features, vec!["F_ABS"]);
        assert_eq!(library.modules[1].redundancy, 2);
    }

    #[test]
    fn test_missing_cost_is_a_hard_error() {
        let content = r#"{"modules": [{"id": "M1", "max_power_kw": 0.1}]}"#;
        let err = library_from_str(content, "modules.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("cost"));
    }

    #[test]
    fn test_missing_id_is_a_hard_error() {
        let content = r#"{"modules": [{"cost": 1.0, "max_power_kw": 0.1}]}"#;
        assert!(library_from_str(content, "modules.json").is_err());
    }

    #[test]
    fn test_unknown_latency_class_is_a_hard_error() {
        let content = r#"{"modules": [{"id": "M1", "cost": 1.0,
            "max_power_kw": 0.1, "latency_class": "hyperspeed"}]}"#;
        assert!(library_from_str(content, "modules.json").is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let content = r#"{"modules": [
            {"id": "M1", "cost": 1.0, "max_power_kw": 0.1},
            {"id": "M1", "cost": 2.0, "max_power_kw": 0.2}
        ]}"#;
        let err = library_from_str(content, "modules.json").unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_empty_library_is_valid() {
        let library = library_from_str("{}", "modules.json").unwrap();
        assert!(library.modules.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modules.json");
        fs::write(&path, VALID).unwrap();

        let library = load_module_library(&path).unwrap();
        assert_eq!(library.modules.len(), 2);
    }
}
