//! Placement types - modules bound to zones and the links between them

use serde::{Deserialize, Serialize};

use crate::entities::module::Module;
use crate::entities::zone::Zone;

/// Transmission medium of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medium {
    Ethernet,
    #[serde(rename = "CAN")]
    Can,
    #[serde(rename = "LIN")]
    Lin,
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medium::Ethernet => write!(f, "Ethernet"),
            Medium::Can => write!(f, "CAN"),
            Medium::Lin => write!(f, "LIN"),
        }
    }
}

impl std::str::FromStr for Medium {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethernet" => Ok(Medium::Ethernet),
            "can" => Ok(Medium::Can),
            "lin" => Ok(Medium::Lin),
            _ => Err(format!("Unknown medium: {}", s)),
        }
    }
}

/// A concrete module instance bound to one zone
///
/// A module satisfying N features across N placement events yields N
/// placements, each independently linkable. Owned exclusively by the
/// candidate that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedModule {
    /// The catalog module this placement instantiates
    pub module: Module,

    /// The zone the instance is assigned to
    pub zone: Zone,

    /// Feature ids this placement was created to satisfy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provided_features: Vec<String>,
}

/// A directed edge between two placed modules
///
/// `src` and `dst` index into the placement list of the owning
/// candidate. Latency starts unset; the scorer writes its estimate back
/// during the latency penalty pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Index of the source placement
    pub src: usize,

    /// Index of the destination placement
    pub dst: usize,

    /// Transmission medium
    pub medium: Medium,

    /// Bandwidth in Mbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_mbps: Option<f64>,

    /// Latency in ms; annotated by the scorer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,

    /// Estimated physical length in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,

    /// Whether this link carries a redundant path
    #[serde(default)]
    pub redundant: bool,
}
