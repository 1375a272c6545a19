//! Architecture document output
//!
//! Serializes a selected [`ArchitectureCandidate`] to the output JSON
//! document and re-parses such documents for reporting. Every field the
//! scorer populates appears in the output; nullable fields are written
//! as `null` rather than omitted so the document schema is stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{ArchitectureCandidate, Medium, Position};
use crate::io::LoadError;
use crate::json::JsonParseError;

/// Wire shape of a compiled architecture document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureDoc {
    /// Vehicle display name
    pub vehicle: String,

    /// Zones under consideration
    pub zones: Vec<ZoneDoc>,

    /// Placed module instances
    pub modules: Vec<PlacedModuleDoc>,

    /// Links between placements
    pub links: Vec<LinkDoc>,

    /// Feature ids with no supporting module
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_features: Vec<String>,

    /// Aggregate score; higher is better
    pub score: Option<f64>,

    /// Penalty breakdown by category
    pub penalties: BTreeMap<String, f64>,

    /// Metric summary
    pub metrics: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDoc {
    pub name: String,
    pub max_power_kw: f64,
    pub safety_level: Option<String>,
    pub latency_budget_ms: Option<f64>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedModuleDoc {
    pub module_id: String,
    pub module_name: String,
    pub zone: String,
    pub cost: f64,
    pub max_power_kw: f64,
    pub supported_features: Vec<String>,
    pub provided_features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDoc {
    /// Module id of the source placement
    pub src: String,
    /// Module id of the destination placement
    pub dst: String,
    pub medium: Medium,
    pub bandwidth_mbps: Option<f64>,
    pub latency_ms: Option<f64>,
    pub length_m: Option<f64>,
    pub redundant: bool,
}

impl ArchitectureDoc {
    /// Build the output document for a candidate
    pub fn from_candidate(candidate: &ArchitectureCandidate, vehicle: &str) -> Self {
        let zones = candidate
            .zones
            .iter()
            .map(|z| ZoneDoc {
                name: z.name.clone(),
                max_power_kw: z.max_power_kw,
                safety_level: z.safety_level.clone(),
                latency_budget_ms: z.latency_budget_ms,
                position: z.position,
            })
            .collect();

        let modules = candidate
            .placements
            .iter()
            .map(|pm| PlacedModuleDoc {
                module_id: pm.module.id.clone(),
                module_name: pm.module.name.clone(),
                zone: pm.zone.name.clone(),
                cost: pm.module.cost,
                max_power_kw: pm.module.max_power_kw,
                supported_features: pm.module.supported_features.clone(),
                provided_features: pm.provided_features.clone(),
            })
            .collect();

        let links = candidate
            .links
            .iter()
            .map(|l| LinkDoc {
                src: candidate.placements[l.src].module.id.clone(),
                dst: candidate.placements[l.dst].module.id.clone(),
                medium: l.medium,
                bandwidth_mbps: l.bandwidth_mbps,
                latency_ms: l.latency_ms,
                length_m: l.length_m,
                redundant: l.redundant,
            })
            .collect();

        Self {
            vehicle: vehicle.to_string(),
            zones,
            modules,
            links,
            dropped_features: candidate.dropped_features.clone(),
            score: candidate.score,
            penalties: candidate.penalties.clone(),
            metrics: candidate.metrics.clone(),
        }
    }

    /// Render the document as pretty-printed JSON
    pub fn to_json_string(&self) -> String {
        // BTreeMap keys and struct field order keep the output stable.
        let mut json = serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}

/// Serialize the selected architecture to a JSON file
pub fn dump_architecture(
    candidate: &ArchitectureCandidate,
    vehicle: &str,
    path: &Path,
) -> Result<(), LoadError> {
    let doc = ArchitectureDoc::from_candidate(candidate, vehicle);
    fs::write(path, doc.to_json_string()).map_err(|source| LoadError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Re-parse a compiled architecture document
pub fn load_architecture(path: &Path) -> Result<ArchitectureDoc, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content)
        .map_err(|e| JsonParseError::from_serde_error(&e, &content, &path.display().to_string()))
        .map_err(LoadError::from)
}
