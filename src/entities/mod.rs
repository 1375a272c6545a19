//! Entity type definitions
//!
//! ZAC models one compile run with the following entity types:
//!
//! **Inputs:**
//! - [`Zone`] - Physical/logical vehicle partitions with power and latency budgets
//! - [`Feature`] - Vehicle-level capability requirements
//! - [`RequirementSet`] - All zones and features of one vehicle
//! - [`Module`] / [`ModuleLibrary`] - The hardware catalog
//!
//! **Outputs:**
//! - [`PlacedModule`] - A module instance bound to a zone
//! - [`Link`] - A directed edge between two placements
//! - [`ArchitectureCandidate`] - One complete proposed architecture

use miette::Diagnostic;
use thiserror::Error;

pub mod candidate;
pub mod feature;
pub mod module;
pub mod placement;
pub mod requirement_set;
pub mod zone;

pub use candidate::ArchitectureCandidate;
pub use feature::Feature;
pub use module::{LatencyClass, Module, ModuleLibrary};
pub use placement::{Link, Medium, PlacedModule};
pub use requirement_set::RequirementSet;
pub use zone::{Position, Zone};

/// Structural invariant violations in an input document
///
/// Raised when a parsed requirement set or module library breaks the
/// model invariants. Always fatal; the run aborts rather than
/// substituting defaults.
#[derive(Debug, Error, Diagnostic)]
pub enum ValidationError {
    #[error("requirement set '{vehicle}' defines no zones")]
    #[diagnostic(
        code(zac::validate::no_zones),
        help("add at least one zone under vehicle.zones")
    )]
    NoZones { vehicle: String },

    #[error("requirement set '{vehicle}' defines no features")]
    #[diagnostic(code(zac::validate::no_features))]
    NoFeatures { vehicle: String },

    #[error("zone with empty name")]
    #[diagnostic(code(zac::validate::empty_zone_name))]
    EmptyZoneName,

    #[error("duplicate zone name '{name}'")]
    #[diagnostic(code(zac::validate::duplicate_zone))]
    DuplicateZone { name: String },

    #[error("feature with empty id")]
    #[diagnostic(code(zac::validate::empty_feature_id))]
    EmptyFeatureId,

    #[error("duplicate feature id '{id}'")]
    #[diagnostic(code(zac::validate::duplicate_feature))]
    DuplicateFeature { id: String },

    #[error("module with empty id")]
    #[diagnostic(code(zac::validate::empty_module_id))]
    EmptyModuleId,

    #[error("duplicate module id '{id}'")]
    #[diagnostic(code(zac::validate::duplicate_module))]
    DuplicateModule { id: String },

    #[error("module '{id}' has a negative cost")]
    #[diagnostic(code(zac::validate::negative_cost))]
    NegativeCost { id: String },

    #[error("{entity} has a negative max_power_kw")]
    #[diagnostic(code(zac::validate::negative_power))]
    NegativePower { entity: String },

    #[error("{entity} has redundancy 0; the minimum instance count is 1")]
    #[diagnostic(code(zac::validate::zero_redundancy))]
    ZeroRedundancy { entity: String },
}
