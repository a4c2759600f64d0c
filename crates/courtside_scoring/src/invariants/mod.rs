//! First-class invariants for recorded score sheets.
//!
//! The scoring rules never reject input; they answer `None` when a match
//! is not decided. Invariants explain *why*, so an operator entering an old
//! result can see which part of the sheet is wrong. Checking them never
//! changes what the rules return.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    derive_more::Display,
)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to five invariants.
/// Every member is checked; all violations are reported, not just the first.
pub trait InvariantSet<S> {
    /// Returns Ok(()) if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod decided_sets;
pub mod sheet_shape;

pub use decided_sets::{EverySetDecided, NoSetsAfterDecision};
pub use sheet_shape::{AtMostThreeSets, MatchedLengths, NonNegativeGames};

/// All score-sheet invariants as a composable set.
pub type SheetInvariants = (
    NonNegativeGames,
    MatchedLengths,
    AtMostThreeSets,
    EverySetDecided,
    NoSetsAfterDecision,
);
