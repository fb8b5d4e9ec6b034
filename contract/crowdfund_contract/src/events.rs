use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInitialized {
    #[topic]
    pub owner: Address,
    pub title: String,
    pub goal: i128,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    #[topic]
    pub contributor: Address,
    pub amount: i128,
    pub total_contribution: i128,
    pub raised_amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReached {
    pub raised_amount: i128,
    pub goal: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelled {
    #[topic]
    pub owner: Address,
    pub raised_amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignEndedEarly {
    #[topic]
    pub owner: Address,
    pub ended_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    #[topic]
    pub owner: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimed {
    #[topic]
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_initialized(env: &Env, owner: &Address, title: &String, goal: i128, end_time: u64) {
    CampaignInitialized {
        owner: owner.clone(),
        title: title.clone(),
        goal,
        end_time,
    }
    .publish(env);
}

pub fn emit_contribution_received(
    env: &Env,
    contributor: &Address,
    amount: i128,
    total_contribution: i128,
    raised_amount: i128,
) {
    ContributionReceived {
        contributor: contributor.clone(),
        amount,
        total_contribution,
        raised_amount,
    }
    .publish(env);
}

pub fn emit_goal_reached(env: &Env, raised_amount: i128, goal: i128) {
    GoalReached { raised_amount, goal }.publish(env);
}

pub fn emit_campaign_cancelled(env: &Env, owner: &Address, raised_amount: i128) {
    CampaignCancelled {
        owner: owner.clone(),
        raised_amount,
    }
    .publish(env);
}

pub fn emit_campaign_ended_early(env: &Env, owner: &Address, ended_at: u64) {
    CampaignEndedEarly {
        owner: owner.clone(),
        ended_at,
    }
    .publish(env);
}

pub fn emit_funds_claimed(env: &Env, owner: &Address, amount: i128) {
    FundsClaimed {
        owner: owner.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_refund_claimed(env: &Env, contributor: &Address, amount: i128) {
    RefundClaimed {
        contributor: contributor.clone(),
        amount,
    }
    .publish(env);
}
