//! Cross-cutting mode and timeline policy rules.
//!
//! Two small rule sets used from several store mutations: which expenses an
//! active mode can see, and which mutations are significant enough to earn a
//! timeline entry. Only four mutation kinds ever append events - purchase
//! completion, checklist completion (on the done transition only), a notable
//! expense value change, and a target-date change. Everything else,
//! including a mode switch, is silent.

use crate::models::{Expense, Mode, Visibility};

impl Visibility {
    /// Whether an expense tagged with this visibility counts in `mode`.
    #[must_use]
    pub const fn applies_to(self, mode: Mode) -> bool {
        match self {
            Self::Both => true,
            Self::Preparation => matches!(mode, Mode::Preparation),
            Self::Living => matches!(mode, Mode::Living),
        }
    }
}

/// Whether `expense` counts toward `mode`'s totals.
#[must_use]
pub fn expense_visible_in(expense: &Expense, mode: Mode) -> bool {
    expense.visibility.applies_to(mode)
}

/// Tunable thresholds for timeline-worthiness.
#[derive(Debug, Clone, Copy)]
pub struct TimelinePolicy {
    /// Minimum relative change of an expense's value that earns a
    /// `budget_change` event. Relative, not absolute: small expenses log on
    /// smaller absolute deltas than large ones.
    pub budget_change_threshold: f64,
}

impl Default for TimelinePolicy {
    fn default() -> Self {
        Self {
            budget_change_threshold: 0.10,
        }
    }
}

impl TimelinePolicy {
    /// Whether a `current_value` change from `old` to `new` is notable.
    ///
    /// A change from zero to any nonzero value is always notable, since the
    /// relative change against a zero base is unbounded.
    #[must_use]
    pub fn budget_change_is_notable(&self, old: f64, new: f64) -> bool {
        let delta = (new - old).abs();
        if delta == 0.0 {
            return false;
        }
        if old == 0.0 {
            return true;
        }
        delta / old.abs() >= self.budget_change_threshold
    }
}
