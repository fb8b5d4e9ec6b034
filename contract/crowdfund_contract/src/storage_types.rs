use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys. `Campaign` and `TopDonors` live in instance storage,
// `Contribution` entries in persistent storage.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    TopDonors,
    Contribution(Address),
}

/// Stored resolution of the campaign. Each non-`Open` variant is terminal
/// except `EndedEarly`, which may still move to `FundsClaimed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum Phase {
    Open,
    EndedEarly,
    Cancelled,
    FundsClaimed,
}

/// State derived from the stored phase, the raised total and the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    GoalReachedOpen,
    EndedSuccess,
    EndedFailure,
    Cancelled,
    Claimed,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub raised_amount: i128,       // High-water mark, never reduced by payouts
    pub contributors_count: u32,   // Distinct identities that ever contributed
    pub phase: Phase,
}

/// Read-only snapshot returned by `get_campaign_details`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignDetails {
    pub owner: Address,
    pub token: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub raised_amount: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub contributors_count: u32,
    pub goal_reached: bool,
    pub funds_claimed: bool,
    pub cancelled: bool,
    pub ended: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct DonorRank {
    pub donor: Address,
    pub amount: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidAmount = 4,
    InvalidGoal = 5,
    InvalidDuration = 6,
    CampaignEnded = 7,
    CampaignCancelled = 8,
    GoalAlreadyReached = 9,
    GoalNotReached = 10,
    NoContribution = 11,
    CampaignStillActive = 12,
    PayoutFailed = 13,
    ArithmeticError = 14,
}

// Constants
pub const MAX_TOP_DONORS: u32 = 5;
pub const BASIS_POINTS: u32 = 10000; // 100% in basis points
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
