//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger for states produced by the command and tick
//! API. They exist to catch codec regressions and hand-edited save files:
//! the `run` driver can verify a freshly loaded state, and the property
//! tests assert that no command sequence produces a violation.

use crate::game::economy::TICKS_PER_STEP;
use crate::game::state::GameState;
use crate::game::types::{ClickKind, Sector};

/// Invariant violation found in a state.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all state invariants.
///
/// Returns the violations found, empty if the state is sound.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut report = |message: String| violations.push(InvariantViolation { message });

    if state.counting() >= TICKS_PER_STEP {
        report(format!(
            "sub-tick counter {} not below {TICKS_PER_STEP}",
            state.counting()
        ));
    }

    if state.ascension() == 0 {
        report("ascension level is 0; must be at least 1".to_string());
    }

    for sector in Sector::ALL {
        let line = state.production_line(sector);
        if line.multiplier == 0 {
            report(format!("{} multiplier is 0; must be at least 1", sector.name()));
        } else if !line.multiplier.is_power_of_two() {
            // Multipliers start at 1 and only ever double.
            report(format!(
                "{} multiplier {} is not a power of two",
                sector.name(),
                line.multiplier
            ));
        }
    }

    let battle = state.battle();
    if battle.timer() < -1 {
        report(format!("battle timer {} below -1", battle.timer()));
    }
    if battle.targets() == 0 {
        report("battle target count is 0; must be at least 1".to_string());
    }
    if battle.chance() < 0.0 || battle.chance().is_nan() {
        report(format!("battle chance {} is not a non-negative number", battle.chance()));
    }

    if state.housing_gain() == 0 {
        report("housing gain is 0; must be at least 1".to_string());
    }
    if state.work_cost_fiber() == 0 || state.work_cost_iron() == 0 {
        report("work cost is 0; must be at least 1".to_string());
    }
    for kind in ClickKind::ALL {
        if state.click_yield(kind) == 0 {
            report(format!("{} click yield is 0; must be at least 1", kind.name()));
        }
    }

    violations
}
