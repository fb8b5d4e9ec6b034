use soroban_sdk::{log, token, Address, Env, Vec};

use crate::storage_types::*;
use crate::utils;

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn read_campaign(env: &Env) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

pub fn read_top_donors(env: &Env) -> Vec<DonorRank> {
    env.storage()
        .instance()
        .get(&DataKey::TopDonors)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_top_donors(env: &Env, ranking: &Vec<DonorRank>) {
    env.storage().instance().set(&DataKey::TopDonors, ranking);
    extend_instance(env);
}

/// Recorded contribution, zero when the address never contributed or has
/// already been refunded
pub fn read_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

/// True once the address has contributed, even if since refunded
pub fn has_contributed(env: &Env, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contribution(contributor.clone()))
}

pub fn write_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn ensure_owner(campaign: &Campaign, caller: &Address) -> Result<(), CrowdfundError> {
    if campaign.owner != *caller {
        return Err(CrowdfundError::NotOwner);
    }
    Ok(())
}

pub fn goal_reached(campaign: &Campaign) -> bool {
    campaign.raised_amount >= campaign.goal
}

/// Explicitly ended, or past the deadline
pub fn is_ended(env: &Env, campaign: &Campaign) -> bool {
    matches!(campaign.phase, Phase::EndedEarly | Phase::FundsClaimed)
        || utils::is_deadline_passed(env, campaign.end_time)
}

pub fn status(env: &Env, campaign: &Campaign) -> CampaignStatus {
    match campaign.phase {
        Phase::Cancelled => CampaignStatus::Cancelled,
        Phase::FundsClaimed => CampaignStatus::Claimed,
        Phase::EndedEarly => CampaignStatus::EndedSuccess,
        Phase::Open => {
            let reached = goal_reached(campaign);
            match (utils::is_deadline_passed(env, campaign.end_time), reached) {
                (true, true) => CampaignStatus::EndedSuccess,
                (true, false) => CampaignStatus::EndedFailure,
                (false, true) => CampaignStatus::GoalReachedOpen,
                (false, false) => CampaignStatus::Active,
            }
        }
    }
}

/// The recorded contribution while the campaign sits below its goal
/// (running, failed or cancelled), zero once the goal is reached
pub fn claimable_amount(env: &Env, campaign: &Campaign, contributor: &Address) -> i128 {
    match status(env, campaign) {
        CampaignStatus::Active | CampaignStatus::Cancelled | CampaignStatus::EndedFailure => {
            read_contribution(env, contributor)
        }
        CampaignStatus::GoalReachedOpen | CampaignStatus::EndedSuccess | CampaignStatus::Claimed => 0,
    }
}

pub fn details(env: &Env, campaign: &Campaign) -> CampaignDetails {
    CampaignDetails {
        owner: campaign.owner.clone(),
        token: campaign.token.clone(),
        title: campaign.title.clone(),
        description: campaign.description.clone(),
        goal: campaign.goal,
        raised_amount: campaign.raised_amount,
        start_time: campaign.start_time,
        end_time: campaign.end_time,
        contributors_count: campaign.contributors_count,
        goal_reached: goal_reached(campaign),
        funds_claimed: campaign.phase == Phase::FundsClaimed,
        cancelled: campaign.phase == Phase::Cancelled,
        ended: is_ended(env, campaign),
    }
}

/// Pull `amount` from `from` into the campaign's pool
pub fn collect(env: &Env, campaign: &Campaign, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &campaign.token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Balance currently pooled in the contract
pub fn pooled_balance(env: &Env, campaign: &Campaign) -> i128 {
    let token_client = token::TokenClient::new(env, &campaign.token);
    token_client.balance(&env.current_contract_address())
}

/// Pay `amount` out of the pool. A rejected transfer is rolled back by the
/// host and reported as `PayoutFailed`; callers commit state only after this
/// returns `Ok`.
pub fn payout(
    env: &Env,
    campaign: &Campaign,
    recipient: &Address,
    amount: i128,
) -> Result<(), CrowdfundError> {
    let token_client = token::TokenClient::new(env, &campaign.token);
    match token_client.try_transfer(&env.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payout rejected", recipient.clone(), amount);
            Err(CrowdfundError::PayoutFailed)
        }
    }
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
