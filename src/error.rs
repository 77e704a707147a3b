use crate::HeroId;

/// failures surfaced by the analytics core. unknown ids and oversized
/// snapshots are client-input errors and are never retried internally;
/// infeasible or unbounded programs are reported upward so callers can
/// pick their own fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown hero {0}")]
    UnknownHero(HeroId),
    #[error("{what} size {len} exceeds cap {max}")]
    SizeExceeded {
        what: &'static str,
        len: usize,
        max: usize,
    },
    #[error("equilibrium infeasible: {0}")]
    Infeasible(&'static str),
    #[error("linear program unbounded")]
    Unbounded,
}
