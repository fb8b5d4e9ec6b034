#![no_std]

mod events;
mod ledger;
mod ranking;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use storage_types::*;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the campaign. `duration` is in seconds from now.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        title: String,
        description: String,
        goal: i128,
        duration: u64,
    ) -> Result<(), CrowdfundError> {
        if ledger::has_campaign(&env) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        owner.require_auth();

        utils::validate_goal(goal)?;
        let start_time = utils::get_current_timestamp(&env);
        let end_time = utils::compute_end_time(start_time, duration)?;

        let campaign = Campaign {
            owner: owner.clone(),
            token,
            title: title.clone(),
            description,
            goal,
            start_time,
            end_time,
            raised_amount: 0,
            contributors_count: 0,
            phase: Phase::Open,
        };
        ledger::write_campaign(&env, &campaign);
        ledger::write_top_donors(&env, &Vec::new(&env));

        events::emit_campaign_initialized(&env, &owner, &title, goal, end_time);
        Ok(())
    }

    /// Contribute `amount` tokens from `contributor` while the campaign is open
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        match campaign.phase {
            Phase::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            Phase::EndedEarly | Phase::FundsClaimed => return Err(CrowdfundError::CampaignEnded),
            Phase::Open => {}
        }
        if utils::is_deadline_passed(&env, campaign.end_time) {
            return Err(CrowdfundError::CampaignEnded);
        }
        utils::validate_amount(amount)?;

        let contributors_count = if ledger::has_contributed(&env, &contributor) {
            campaign.contributors_count
        } else {
            campaign
                .contributors_count
                .checked_add(1)
                .ok_or(CrowdfundError::ArithmeticError)?
        };
        let total = ledger::read_contribution(&env, &contributor)
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticError)?;
        let raised_amount = campaign
            .raised_amount
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticError)?;
        let was_reached = ledger::goal_reached(&campaign);

        ledger::collect(&env, &campaign, &contributor, amount);

        campaign.raised_amount = raised_amount;
        campaign.contributors_count = contributors_count;
        ledger::write_contribution(&env, &contributor, total);
        ledger::write_campaign(&env, &campaign);

        let mut top_donors = ledger::read_top_donors(&env);
        if ranking::rank_donor(&mut top_donors, &contributor, total) {
            ledger::write_top_donors(&env, &top_donors);
        }

        events::emit_contribution_received(&env, &contributor, amount, total, raised_amount);
        if !was_reached && ledger::goal_reached(&campaign) {
            log!(&env, "goal reached", raised_amount, campaign.goal);
            events::emit_goal_reached(&env, raised_amount, campaign.goal);
        }
        Ok(())
    }

    /// Cancel an unsuccessful campaign, opening refunds to every contributor
    pub fn cancel_campaign(env: Env, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::ensure_owner(&campaign, &caller)?;

        match campaign.phase {
            Phase::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            Phase::EndedEarly | Phase::FundsClaimed => {
                return Err(CrowdfundError::GoalAlreadyReached)
            }
            Phase::Open => {}
        }
        if ledger::goal_reached(&campaign) {
            return Err(CrowdfundError::GoalAlreadyReached);
        }

        campaign.phase = Phase::Cancelled;
        ledger::write_campaign(&env, &campaign);

        events::emit_campaign_cancelled(&env, &caller, campaign.raised_amount);
        Ok(())
    }

    /// End a successful campaign before its deadline so funds can be claimed
    pub fn end_campaign(env: Env, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::ensure_owner(&campaign, &caller)?;

        match campaign.phase {
            Phase::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            Phase::EndedEarly | Phase::FundsClaimed => return Err(CrowdfundError::CampaignEnded),
            Phase::Open => {}
        }
        if !ledger::goal_reached(&campaign) {
            return Err(CrowdfundError::GoalNotReached);
        }

        campaign.phase = Phase::EndedEarly;
        ledger::write_campaign(&env, &campaign);

        events::emit_campaign_ended_early(&env, &caller, utils::get_current_timestamp(&env));
        Ok(())
    }

    /// Withdraw the whole pool to the owner. Returns the amount paid.
    pub fn claim_funds(env: Env, caller: Address) -> Result<i128, CrowdfundError> {
        caller.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::ensure_owner(&campaign, &caller)?;

        match campaign.phase {
            Phase::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            Phase::FundsClaimed => return Err(CrowdfundError::GoalAlreadyReached),
            Phase::Open | Phase::EndedEarly => {}
        }
        if !ledger::goal_reached(&campaign) {
            return Err(CrowdfundError::GoalNotReached);
        }
        if !ledger::is_ended(&env, &campaign) {
            return Err(CrowdfundError::CampaignStillActive);
        }

        let amount = ledger::pooled_balance(&env, &campaign);
        ledger::payout(&env, &campaign, &caller, amount)?;

        campaign.phase = Phase::FundsClaimed;
        ledger::write_campaign(&env, &campaign);

        events::emit_funds_claimed(&env, &caller, amount);
        Ok(amount)
    }

    /// Return the caller's whole contribution from a cancelled or failed
    /// campaign. Returns the amount paid.
    pub fn claim_refund(env: Env, contributor: Address) -> Result<i128, CrowdfundError> {
        contributor.require_auth();

        let campaign = ledger::read_campaign(&env)?;
        match ledger::status(&env, &campaign) {
            CampaignStatus::Cancelled | CampaignStatus::EndedFailure => {}
            CampaignStatus::Active => return Err(CrowdfundError::CampaignStillActive),
            CampaignStatus::GoalReachedOpen
            | CampaignStatus::EndedSuccess
            | CampaignStatus::Claimed => return Err(CrowdfundError::GoalAlreadyReached),
        }

        let amount = ledger::read_contribution(&env, &contributor);
        if amount <= 0 {
            return Err(CrowdfundError::NoContribution);
        }

        ledger::payout(&env, &campaign, &contributor, amount)?;
        ledger::write_contribution(&env, &contributor, 0);
        ledger::extend_instance(&env);

        events::emit_refund_claimed(&env, &contributor, amount);
        Ok(amount)
    }

    /// View functions
    pub fn get_campaign_details(env: Env) -> Result<CampaignDetails, CrowdfundError> {
        let campaign = ledger::read_campaign(&env)?;
        Ok(ledger::details(&env, &campaign))
    }

    pub fn get_status(env: Env) -> Result<CampaignStatus, CrowdfundError> {
        let campaign = ledger::read_campaign(&env)?;
        Ok(ledger::status(&env, &campaign))
    }

    pub fn get_total_contribution(env: Env, contributor: Address) -> i128 {
        ledger::read_contribution(&env, &contributor)
    }

    pub fn get_claimable_amount(env: Env, contributor: Address) -> i128 {
        ledger::read_campaign(&env)
            .map(|campaign| ledger::claimable_amount(&env, &campaign, &contributor))
            .unwrap_or(0)
    }

    pub fn get_top_donors(env: Env) -> Vec<Address> {
        ranking::donors(&ledger::read_top_donors(&env))
    }

    /// Ranked donors with the totals recorded when they contributed. Refunds
    /// do not lower these amounts, so they are not live balances.
    pub fn get_top_donor_entries(env: Env) -> Vec<DonorRank> {
        ledger::read_top_donors(&env)
    }

    pub fn get_contributors_count(env: Env) -> u32 {
        ledger::read_campaign(&env)
            .map(|campaign| campaign.contributors_count)
            .unwrap_or(0)
    }

    pub fn get_progress_bps(env: Env) -> Result<u32, CrowdfundError> {
        let campaign = ledger::read_campaign(&env)?;
        Ok(utils::progress_bps(campaign.raised_amount, campaign.goal))
    }

    pub fn get_time_remaining(env: Env) -> Result<u64, CrowdfundError> {
        let campaign = ledger::read_campaign(&env)?;
        Ok(utils::seconds_remaining(&env, campaign.end_time))
    }
}
