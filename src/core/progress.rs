//! Shopping-list progress derivations.
//!
//! Computes per-phase purchase progress for the dashboard and the
//! per-item savings arithmetic behind the deposit flow.

use crate::models::{ItemStatus, Phase, ShoppingItem};

/// Progress of the shopping list within one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseProgress {
    /// Phase this progress describes
    pub phase: Phase,
    /// Number of items in the phase
    pub total: usize,
    /// Number already purchased
    pub purchased: usize,
    /// Sum of (min+max)/2 over items with both bounds researched
    pub estimated_total: f64,
    /// Sum of prices actually paid
    pub purchased_total: f64,
    /// Sum of deposits across all phase items, purchased or not
    pub saved_total: f64,
    /// Purchased count as a share of the total, 0-100
    pub percent_complete: f64,
}

/// Computes purchase progress for the items in `phase`.
///
/// The estimated total only counts items with both price bounds present -
/// an item missing either bound is skipped rather than estimated from the
/// one bound it has. An empty phase yields zero percent complete.
#[must_use]
pub fn purchase_progress(items: &[ShoppingItem], phase: Phase) -> PurchaseProgress {
    let phase_items: Vec<&ShoppingItem> = items.iter().filter(|i| i.phase == phase).collect();
    let purchased: Vec<&&ShoppingItem> = phase_items
        .iter()
        .filter(|i| i.status == ItemStatus::Purchased)
        .collect();

    let estimated_total: f64 = phase_items
        .iter()
        .filter_map(|i| match (i.min_price, i.max_price) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        })
        .sum();

    let purchased_total: f64 = purchased.iter().filter_map(|i| i.actual_price).sum();
    let saved_total: f64 = phase_items.iter().map(|i| i.amount_saved).sum();

    let percent_complete = if phase_items.is_empty() {
        0.0
    } else {
        purchased.len() as f64 / phase_items.len() as f64 * 100.0
    };

    PurchaseProgress {
        phase,
        total: phase_items.len(),
        purchased: purchased.len(),
        estimated_total,
        purchased_total,
        saved_total,
        percent_complete,
    }
}

/// How much is still missing to afford `item`.
///
/// Zero once purchased. Otherwise the gap between the savings target and
/// what has been deposited, floored at zero; the target is the upper bound
/// when present, the lower bound as a fallback, and zero when the item has
/// no researched price at all.
#[must_use]
pub fn amount_remaining_for_item(item: &ShoppingItem) -> f64 {
    if item.status == ItemStatus::Purchased {
        return 0.0;
    }
    let target = item.max_price.or(item.min_price).unwrap_or(0.0);
    (target - item.amount_saved).max(0.0)
}

/// Monthly amount to put aside to cover `remaining` before the deadline.
///
/// With the deadline already reached (or no time information), the whole
/// remainder is due now. Otherwise the remainder is spread over the full
/// months left, never fewer than one.
#[must_use]
pub fn monthly_savings_target(remaining: f64, days_remaining: i64) -> f64 {
    if days_remaining <= 0 {
        return remaining;
    }
    let months = (days_remaining / 30).max(1);
    remaining / months as f64
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::{ItemCategory, Priority};

    fn item(id: i64, phase: Phase, status: ItemStatus) -> ShoppingItem {
        ShoppingItem {
            id,
            name: format!("item-{id}"),
            category: ItemCategory::Kitchen,
            phase,
            priority: Priority::Medium,
            min_price: None,
            max_price: None,
            actual_price: None,
            amount_saved: 0.0,
            status,
            purchase_date: None,
            note: None,
            sort_order: id as i32,
        }
    }

    #[test]
    fn test_progress_counts_only_requested_phase() {
        let items = vec![
            item(1, Phase::PreMove, ItemStatus::Pending),
            item(2, Phase::PreMove, ItemStatus::Purchased),
            item(3, Phase::PostMove, ItemStatus::Pending),
        ];
        let progress = purchase_progress(&items, Phase::PreMove);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.purchased, 1);
        assert_eq!(progress.percent_complete, 50.0);
    }

    #[test]
    fn test_progress_estimate_requires_both_bounds() {
        let mut priced = item(1, Phase::PreMove, ItemStatus::Pending);
        priced.min_price = Some(500.0);
        priced.max_price = Some(800.0);
        let mut half_priced = item(2, Phase::PreMove, ItemStatus::Pending);
        half_priced.min_price = Some(300.0);
        let unpriced = item(3, Phase::PreMove, ItemStatus::Pending);

        let progress = purchase_progress(&[priced, half_priced, unpriced], Phase::PreMove);
        // only the fully-bounded item contributes: (500 + 800) / 2
        assert_eq!(progress.estimated_total, 650.0);
    }

    #[test]
    fn test_progress_purchased_and_saved_totals() {
        let mut bought = item(1, Phase::PostMove, ItemStatus::Purchased);
        bought.actual_price = Some(750.0);
        bought.amount_saved = 300.0;
        let mut saving = item(2, Phase::PostMove, ItemStatus::Saving);
        saving.amount_saved = 120.0;

        let progress = purchase_progress(&[bought, saving], Phase::PostMove);
        assert_eq!(progress.purchased_total, 750.0);
        // deposits count for purchased items too
        assert_eq!(progress.saved_total, 420.0);
    }

    #[test]
    fn test_progress_empty_phase_has_zero_percent() {
        let progress = purchase_progress(&[], Phase::PreMove);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent_complete, 0.0);
    }

    #[test]
    fn test_amount_remaining_prefers_max_bound() {
        let mut it = item(1, Phase::PreMove, ItemStatus::Saving);
        it.min_price = Some(500.0);
        it.max_price = Some(800.0);
        it.amount_saved = 300.0;
        assert_eq!(amount_remaining_for_item(&it), 500.0);
    }

    #[test]
    fn test_amount_remaining_falls_back_to_min_then_zero() {
        let mut it = item(1, Phase::PreMove, ItemStatus::Saving);
        it.min_price = Some(400.0);
        it.amount_saved = 100.0;
        assert_eq!(amount_remaining_for_item(&it), 300.0);

        let bare = item(2, Phase::PreMove, ItemStatus::Pending);
        assert_eq!(amount_remaining_for_item(&bare), 0.0);
    }

    #[test]
    fn test_amount_remaining_floors_at_zero() {
        let mut it = item(1, Phase::PreMove, ItemStatus::Saving);
        it.max_price = Some(200.0);
        it.amount_saved = 350.0;
        assert_eq!(amount_remaining_for_item(&it), 0.0);
    }

    #[test]
    fn test_amount_remaining_zero_once_purchased() {
        let mut it = item(1, Phase::PreMove, ItemStatus::Purchased);
        it.max_price = Some(800.0);
        it.amount_saved = 0.0;
        assert_eq!(amount_remaining_for_item(&it), 0.0);
    }

    #[test]
    fn test_monthly_savings_target_spreads_over_months() {
        // 90 days -> 3 months
        assert_eq!(monthly_savings_target(600.0, 90), 200.0);
        // 45 days -> floor to 1 month
        assert_eq!(monthly_savings_target(600.0, 45), 600.0);
    }

    #[test]
    fn test_monthly_savings_target_due_now_when_late() {
        assert_eq!(monthly_savings_target(600.0, 0), 600.0);
        assert_eq!(monthly_savings_target(600.0, -12), 600.0);
    }
}
