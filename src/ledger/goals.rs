//! Operations on savings goals.
//!
//! Money saved in a goal is subtracted from the balance (see
//! [compute_totals](crate::ledger::compute_totals)), so withdrawing from or
//! deleting a goal returns its savings to the balance without touching any
//! transactions.

use crate::{
    Error,
    ledger::{DEFAULT_GOAL_EMOJI, Goal, GoalId, LedgerState, round_currency},
};

/// The result of a successful contribution to a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// The amount the user asked to contribute, rounded to cents.
    pub requested: f64,
    /// The amount that was added to the goal.
    ///
    /// This is less than `requested` when the contribution would have taken
    /// the goal past its target.
    pub applied: f64,
}

/// Append a new goal with nothing saved and return a copy of it.
///
/// The name is trimmed, a blank emoji falls back to [DEFAULT_GOAL_EMOJI] and
/// the target is rounded to cents. The caller is expected to have checked that
/// the name is not empty and that the target is positive.
pub fn add_goal(state: &mut LedgerState, name: &str, target: f64, emoji: &str) -> Goal {
    let emoji = match emoji.trim() {
        "" => DEFAULT_GOAL_EMOJI,
        emoji => emoji,
    };

    let goal = Goal {
        id: GoalId::generate(),
        name: name.trim().to_owned(),
        emoji: emoji.to_owned(),
        target: round_currency(target),
        saved: 0.0,
    };

    state.goals.push(goal.clone());

    goal
}

/// Move `amount` from the available balance into the goal with `goal_id`.
///
/// If `amount` is more than the goal still needs, only the remainder is
/// applied so that the goal is filled exactly.
///
/// # Errors
///
/// The state is not modified if an error is returned. Returns:
/// - [Error::GoalNotFound] if there is no goal with `goal_id`,
/// - [Error::NonPositiveAmount] if `amount` rounds to zero or less,
/// - [Error::InsufficientBalanceForContribution] if `amount` is more than
///   `available_balance`.
pub fn contribute_to_goal(
    state: &mut LedgerState,
    goal_id: &GoalId,
    amount: f64,
    available_balance: f64,
) -> Result<Contribution, Error> {
    let goal = state.find_goal_mut(goal_id).ok_or(Error::GoalNotFound)?;

    let requested = round_currency(amount);
    if requested <= 0.0 {
        return Err(Error::NonPositiveAmount);
    }
    if requested > available_balance {
        return Err(Error::InsufficientBalanceForContribution);
    }

    let applied = requested.min(goal.remaining()).max(0.0);
    goal.saved = round_currency(goal.saved + applied);

    Ok(Contribution { requested, applied })
}

/// Empty the goal with `goal_id`, returning the amount that was saved.
///
/// # Errors
///
/// The state is not modified if an error is returned. Returns:
/// - [Error::GoalNotFound] if there is no goal with `goal_id`,
/// - [Error::NothingToWithdraw] if the goal has nothing saved.
pub fn withdraw_from_goal(state: &mut LedgerState, goal_id: &GoalId) -> Result<f64, Error> {
    let goal = state.find_goal_mut(goal_id).ok_or(Error::GoalNotFound)?;

    if goal.saved <= 0.0 {
        return Err(Error::NothingToWithdraw);
    }

    let withdrawn = goal.saved;
    goal.saved = 0.0;

    Ok(withdrawn)
}

/// Remove the goal with `goal_id`.
///
/// Returns the amount that was saved in the goal, or `None` if there is no
/// goal with `goal_id`.
pub fn delete_goal(state: &mut LedgerState, goal_id: &GoalId) -> Option<f64> {
    let index = state.goals.iter().position(|goal| &goal.id == goal_id)?;

    Some(state.goals.remove(index).saved)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        ledger::{
            Contribution, DEFAULT_GOAL_EMOJI, GoalId, LedgerState, TransactionType, add_goal,
            add_transaction, compute_totals, contribute_to_goal, delete_goal,
            withdraw_from_goal,
        },
    };

    fn state_with_income(amount: f64) -> LedgerState {
        let mut state = LedgerState::default();
        add_transaction(&mut state, TransactionType::Income, "Salary", amount, "");
        state
    }

    #[test]
    fn add_goal_starts_empty() {
        let mut state = LedgerState::default();

        let goal = add_goal(&mut state, " Trip ", 500.0, "✈️");

        assert_eq!(goal.name, "Trip");
        assert_eq!(goal.emoji, "✈️");
        assert_eq!(goal.target, 500.0);
        assert_eq!(goal.saved, 0.0);
        assert_eq!(state.goals, vec![goal]);
    }

    #[test]
    fn add_goal_uses_default_emoji_when_blank() {
        let mut state = LedgerState::default();

        let goal = add_goal(&mut state, "Trip", 500.0, "   ");

        assert_eq!(goal.emoji, DEFAULT_GOAL_EMOJI);
    }

    #[test]
    fn contribution_is_added_to_goal() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");

        let contribution = contribute_to_goal(&mut state, &goal.id, 120.556, 1000.0);

        assert_eq!(
            contribution,
            Ok(Contribution {
                requested: 120.56,
                applied: 120.56
            })
        );
        assert_eq!(state.goals[0].saved, 120.56);
        assert_eq!(compute_totals(&state).balance, 879.44);
    }

    #[test]
    fn over_contribution_is_truncated_to_target() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");
        contribute_to_goal(&mut state, &goal.id, 450.0, 1000.0).unwrap();

        let contribution = contribute_to_goal(&mut state, &goal.id, 200.0, 550.0).unwrap();

        assert_eq!(contribution.requested, 200.0);
        assert_eq!(contribution.applied, 50.0);
        assert_eq!(state.goals[0].saved, 500.0);
    }

    #[test]
    fn contribution_to_full_goal_applies_nothing() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 100.0, "");
        contribute_to_goal(&mut state, &goal.id, 100.0, 1000.0).unwrap();

        let contribution = contribute_to_goal(&mut state, &goal.id, 10.0, 900.0).unwrap();

        assert_eq!(contribution.applied, 0.0);
        assert_eq!(state.goals[0].saved, 100.0);
    }

    #[test]
    fn contribution_to_missing_goal_fails() {
        let mut state = state_with_income(1000.0);
        let want = state.clone();

        let result = contribute_to_goal(&mut state, &GoalId::new("goal_missing"), 10.0, 1000.0);

        assert_eq!(result, Err(Error::GoalNotFound));
        assert_eq!(state, want);
    }

    #[test]
    fn non_positive_contribution_fails() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");

        for amount in [0.0, -5.0, 0.001] {
            let result = contribute_to_goal(&mut state, &goal.id, amount, 1000.0);

            assert_eq!(result, Err(Error::NonPositiveAmount), "amount {amount}");
        }
        assert_eq!(state.goals[0].saved, 0.0);
    }

    #[test]
    fn contribution_over_balance_fails() {
        let mut state = state_with_income(100.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");

        let result = contribute_to_goal(&mut state, &goal.id, 100.01, 100.0);

        assert_eq!(result, Err(Error::InsufficientBalanceForContribution));
        assert_eq!(state.goals[0].saved, 0.0);
    }

    #[test]
    fn withdraw_empties_goal_and_returns_savings() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");
        contribute_to_goal(&mut state, &goal.id, 321.5, 1000.0).unwrap();

        let withdrawn = withdraw_from_goal(&mut state, &goal.id);

        assert_eq!(withdrawn, Ok(321.5));
        assert_eq!(state.goals[0].saved, 0.0);
        assert_eq!(compute_totals(&state).balance, 1000.0);
    }

    #[test]
    fn second_withdraw_fails() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");
        contribute_to_goal(&mut state, &goal.id, 100.0, 1000.0).unwrap();
        withdraw_from_goal(&mut state, &goal.id).unwrap();

        let result = withdraw_from_goal(&mut state, &goal.id);

        assert_eq!(result, Err(Error::NothingToWithdraw));
    }

    #[test]
    fn withdraw_from_missing_goal_fails() {
        let mut state = LedgerState::default();

        let result = withdraw_from_goal(&mut state, &GoalId::new("goal_missing"));

        assert_eq!(result, Err(Error::GoalNotFound));
    }

    #[test]
    fn deleting_goal_returns_savings_to_balance() {
        let mut state = state_with_income(1000.0);
        let goal = add_goal(&mut state, "Trip", 500.0, "");
        contribute_to_goal(&mut state, &goal.id, 150.0, 1000.0).unwrap();
        let balance_before = compute_totals(&state).balance;

        let saved = delete_goal(&mut state, &goal.id);

        assert_eq!(saved, Some(150.0));
        assert!(state.goals.is_empty());
        assert_eq!(compute_totals(&state).balance, balance_before + 150.0);
    }

    #[test]
    fn deleting_missing_goal_returns_none() {
        let mut state = state_with_income(1000.0);
        add_goal(&mut state, "Trip", 500.0, "");

        let saved = delete_goal(&mut state, &GoalId::new("goal_missing"));

        assert_eq!(saved, None);
        assert_eq!(state.goals.len(), 1);
    }
}
