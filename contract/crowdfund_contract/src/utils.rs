use soroban_sdk::Env;

use crate::storage_types::{CrowdfundError, BASIS_POINTS};

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if the deadline has been reached
pub fn is_deadline_passed(env: &Env, end_time: u64) -> bool {
    env.ledger().timestamp() >= end_time
}

/// Seconds left until `end_time`, zero once it has passed
pub fn seconds_remaining(env: &Env, end_time: u64) -> u64 {
    end_time.saturating_sub(env.ledger().timestamp())
}

/// Share of `goal` covered by `raised`, in basis points, capped at 100%
pub fn progress_bps(raised: i128, goal: i128) -> u32 {
    if goal <= 0 || raised <= 0 {
        return 0;
    }
    if raised >= goal {
        return BASIS_POINTS;
    }
    // raised < goal here, so the quotient is below BASIS_POINTS
    match raised.checked_mul(BASIS_POINTS as i128) {
        Some(scaled) => (scaled / goal) as u32,
        None => ((raised / (goal / BASIS_POINTS as i128)) as u32).min(BASIS_POINTS),
    }
}

pub fn validate_amount(amount: i128) -> Result<(), CrowdfundError> {
    if amount <= 0 {
        return Err(CrowdfundError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_goal(goal: i128) -> Result<(), CrowdfundError> {
    if goal <= 0 {
        return Err(CrowdfundError::InvalidGoal);
    }
    Ok(())
}

/// Validate the duration and compute the deadline it yields from `start`
pub fn compute_end_time(start: u64, duration: u64) -> Result<u64, CrowdfundError> {
    if duration == 0 {
        return Err(CrowdfundError::InvalidDuration);
    }
    start
        .checked_add(duration)
        .ok_or(CrowdfundError::InvalidDuration)
}
