//! Candidate scoring and selection
//!
//! Computes independent penalty terms per candidate, aggregates them
//! into a single score (higher is better) and selects the best
//! candidate. The weights live in one struct so a different strategy
//! can be substituted behind the same `score`/`select_best` contract.

use std::collections::BTreeMap;

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::{ArchitectureCandidate, Medium};

const ETHERNET_BASE_LATENCY_MS: f64 = 0.5;
const ETHERNET_LATENCY_PER_M: f64 = 0.02;
const DEFAULT_BASE_LATENCY_MS: f64 = 2.0;
const DEFAULT_LATENCY_PER_M: f64 = 0.05;

/// Penalty multipliers
///
/// Power violations are weighted harshly: zone power limits are
/// near-hard constraints expressed softly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Per kW of power excess in a zone
    pub power: f64,
    /// Per meter of total harness length
    pub harness: f64,
    /// Per ms of latency excess over the stricter zone budget
    pub latency: f64,
    /// Per missing redundant instance
    pub redundancy: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            power: 100.0,
            harness: 0.5,
            latency: 5.0,
            redundancy: 25.0,
        }
    }
}

/// Fatal selection errors
#[derive(Debug, Error, Diagnostic)]
pub enum SelectError {
    #[error("no candidates to select from")]
    #[diagnostic(code(zac::score::no_candidates))]
    NoCandidates,
}

/// Scores candidates and selects the best one
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: Weights,
}

impl Scorer {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Score every candidate in place
    ///
    /// Populates `penalties` ("power", "harness", "latency",
    /// "redundancy"), `metrics` ("total_cost", "total_power_kw",
    /// "harness_length_m") and `score` = -total_cost - sum of
    /// penalties. The latency pass also annotates each link with its
    /// estimated latency.
    pub fn score(&self, candidates: &mut [ArchitectureCandidate]) {
        for candidate in candidates {
            self.score_candidate(candidate);
        }
    }

    fn score_candidate(&self, candidate: &mut ArchitectureCandidate) {
        let power = self.power_penalty(candidate);
        let harness = self.harness_penalty(candidate);
        let latency = self.latency_penalty(candidate);
        let redundancy = self.redundancy_penalty(candidate);

        candidate.penalties = BTreeMap::from([
            ("power".to_string(), power),
            ("harness".to_string(), harness),
            ("latency".to_string(), latency),
            ("redundancy".to_string(), redundancy),
        ]);
        candidate.metrics = BTreeMap::from([
            ("total_cost".to_string(), candidate.total_cost()),
            ("total_power_kw".to_string(), candidate.total_power_kw()),
            ("harness_length_m".to_string(), candidate.harness_length_m()),
        ]);

        let total_penalty: f64 = candidate.penalties.values().sum();
        candidate.score = Some(-candidate.total_cost() - total_penalty);
    }

    /// Penalize zones whose placed modules together exceed the zone's
    /// power budget
    fn power_penalty(&self, candidate: &ArchitectureCandidate) -> f64 {
        let power_by_zone = candidate.power_by_zone();

        let mut penalty = 0.0;
        for zone in &candidate.zones {
            let drawn = power_by_zone.get(&zone.name).copied().unwrap_or(0.0);
            let excess = drawn - zone.max_power_kw;
            if excess > 0.0 {
                penalty += excess * self.weights.power;
            }
        }
        penalty
    }

    /// Penalize total harness length
    fn harness_penalty(&self, candidate: &ArchitectureCandidate) -> f64 {
        if candidate.links.is_empty() {
            return 0.0;
        }
        candidate.harness_length_m() * self.weights.harness
    }

    /// Penalize links whose estimated latency exceeds the stricter of
    /// the two zone budgets
    ///
    /// The estimate derives from the link's medium and length plus any
    /// explicit latency already set on the link, and is written back
    /// onto the link. Links with no budget on either end incur no
    /// penalty regardless of the estimate.
    fn latency_penalty(&self, candidate: &mut ArchitectureCandidate) -> f64 {
        let placements = &candidate.placements;

        let mut penalty = 0.0;
        for link in &mut candidate.links {
            let (base, per_meter) = match link.medium {
                Medium::Ethernet => (ETHERNET_BASE_LATENCY_MS, ETHERNET_LATENCY_PER_M),
                _ => (DEFAULT_BASE_LATENCY_MS, DEFAULT_LATENCY_PER_M),
            };

            let mut estimated = link.latency_ms.unwrap_or(0.0) + base;
            if let Some(length) = link.length_m {
                estimated += per_meter * length;
            }

            let src_budget = placements[link.src].zone.latency_budget_ms;
            let dst_budget = placements[link.dst].zone.latency_budget_ms;
            let budget = match (src_budget, dst_budget) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (Some(b), None) | (None, Some(b)) => Some(b),
                (None, None) => None,
            };

            if let Some(budget) = budget {
                if estimated > budget {
                    penalty += (estimated - budget) * self.weights.latency;
                }
            }

            link.latency_ms = Some(estimated);
        }
        penalty
    }

    /// Penalize requested redundancy the generator never instantiated
    ///
    /// Placeholder proxy: no extra physical instances exist for
    /// redundancy > 1, so each missing instance costs a flat amount.
    fn redundancy_penalty(&self, candidate: &ArchitectureCandidate) -> f64 {
        let mut penalty = 0.0;
        for pm in &candidate.placements {
            if pm.module.redundancy > 1 {
                let shortfall = (pm.module.redundancy - 1) as f64;
                penalty += shortfall * self.weights.redundancy;
            }
        }
        penalty
    }

    /// Select the maximum-scoring candidate
    ///
    /// A missing score compares as 0.0; the earliest candidate wins
    /// ties. Fails on an empty input.
    pub fn select_best(
        &self,
        candidates: Vec<ArchitectureCandidate>,
    ) -> Result<ArchitectureCandidate, SelectError> {
        let mut candidates = candidates.into_iter();
        let mut best = candidates.next().ok_or(SelectError::NoCandidates)?;

        for candidate in candidates {
            if candidate.score.unwrap_or(0.0) > best.score.unwrap_or(0.0) {
                best = candidate;
            }
        }
        Ok(best)
    }
}
