//! Candidate architecture generator
//!
//! Builds one deterministic architecture candidate per run: every
//! feature is assigned to the first supporting module in library order
//! and placed into a zone by a fixed priority, and consecutive
//! placements are chained with synthesized links. The plural
//! `max_candidates` contract leaves room for real search strategies to
//! slot in behind the same signature.

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::{
    ArchitectureCandidate, Feature, LatencyClass, Link, Medium, Module, ModuleLibrary,
    PlacedModule, RequirementSet, Zone,
};

/// Harness estimate for two placements inside the same zone, meters
pub const INTRA_ZONE_LENGTH_M: f64 = 0.5;

/// Harness estimate when zone positions are unknown, meters
pub const FALLBACK_LENGTH_M: f64 = 2.5;

const ETHERNET_BANDWIDTH_MBPS: f64 = 100.0;
const CAN_BANDWIDTH_MBPS: f64 = 10.0;

/// What to do with a feature no module supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Skip the feature; its id is recorded on the candidate but no
    /// error is raised and no penalty applied
    #[default]
    Drop,
    /// Abort generation
    Fail,
}

/// Generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub unsupported: UnsupportedPolicy,
}

/// Fatal generation errors
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("requirement set '{vehicle}' has no zones")]
    #[diagnostic(
        code(zac::generate::no_zones),
        help("a candidate needs at least one zone to place modules into")
    )]
    NoZones { vehicle: String },

    #[error("no module in the library supports feature '{feature}'")]
    #[diagnostic(
        code(zac::generate::unsupported_feature),
        help("add a module with '{feature}' in supported_features, or compile without --strict")
    )]
    UnsupportedFeature { feature: String },
}

/// Builds architecture candidates from a requirement set and a module
/// library
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate up to `max_candidates` candidates
    ///
    /// Currently a single deterministic construction, so the result
    /// holds at most one candidate. Features are processed in
    /// declaration order; a feature with no supporting module is
    /// handled per [`UnsupportedPolicy`].
    pub fn generate(
        &self,
        requirements: &RequirementSet,
        library: &ModuleLibrary,
        max_candidates: usize,
    ) -> Result<Vec<ArchitectureCandidate>, GenerateError> {
        if requirements.zones.is_empty() {
            return Err(GenerateError::NoZones {
                vehicle: requirements.vehicle_name.clone(),
            });
        }

        let mut placements: Vec<PlacedModule> = Vec::new();
        let mut links: Vec<Link> = Vec::new();
        let mut dropped: Vec<String> = Vec::new();

        for feature in &requirements.features {
            let supporting = library.supporting_modules(&feature.id);
            let module = match supporting.first() {
                // Naive choice: first supporting module in library order.
                Some(module) => *module,
                None => match self.options.unsupported {
                    UnsupportedPolicy::Drop => {
                        dropped.push(feature.id.clone());
                        continue;
                    }
                    UnsupportedPolicy::Fail => {
                        return Err(GenerateError::UnsupportedFeature {
                            feature: feature.id.clone(),
                        });
                    }
                },
            };

            let zone = choose_zone(requirements, feature, module);
            let placement = PlacedModule {
                module: module.clone(),
                zone: zone.clone(),
                provided_features: vec![feature.id.clone()],
            };

            // Chain each new placement to the previous one, forming a
            // simple path rather than a full topology.
            if let Some(prev_idx) = placements.len().checked_sub(1) {
                links.push(chain_link(
                    &placements[prev_idx],
                    &placement,
                    prev_idx,
                    placements.len(),
                    feature,
                ));
            }
            placements.push(placement);
        }

        let mut candidate =
            ArchitectureCandidate::new(requirements.zones.clone(), placements, links);
        candidate.dropped_features = dropped;

        let candidates = vec![candidate];
        Ok(candidates.into_iter().take(max_candidates).collect())
    }
}

/// Pick the zone for a placement
///
/// Priority is a hard contract: the feature's zone hint, then the first
/// of the feature's candidate zones that exists, then the first of the
/// module's candidate zones that exists, then the requirement set's
/// first zone.
fn choose_zone<'a>(
    requirements: &'a RequirementSet,
    feature: &Feature,
    module: &Module,
) -> &'a Zone {
    if let Some(hint) = &feature.zone_hint {
        if let Some(zone) = requirements.zone_by_name(hint) {
            return zone;
        }
    }

    for name in &feature.zone_candidates {
        if let Some(zone) = requirements.zone_by_name(name) {
            return zone;
        }
    }

    for name in &module.zone_candidates {
        if let Some(zone) = requirements.zone_by_name(name) {
            return zone;
        }
    }

    &requirements.zones[0]
}

fn chain_link(
    src: &PlacedModule,
    dst: &PlacedModule,
    src_idx: usize,
    dst_idx: usize,
    feature: &Feature,
) -> Link {
    let medium = match dst.module.latency_class {
        Some(LatencyClass::Low) => Medium::Ethernet,
        _ => Medium::Can,
    };
    let bandwidth = match medium {
        Medium::Ethernet => ETHERNET_BANDWIDTH_MBPS,
        _ => CAN_BANDWIDTH_MBPS,
    };

    Link {
        src: src_idx,
        dst: dst_idx,
        medium,
        bandwidth_mbps: Some(bandwidth),
        latency_ms: None,
        length_m: Some(estimate_length(&src.zone, &dst.zone)),
        redundant: feature.redundancy > 1,
    }
}

/// Estimate the harness length between two zones, meters
fn estimate_length(src: &Zone, dst: &Zone) -> f64 {
    if src.name == dst.name {
        return INTRA_ZONE_LENGTH_M;
    }
    match src.distance_to(dst) {
        Some(d) => (d * 100.0).round() / 100.0,
        None => FALLBACK_LENGTH_M,
    }
}
