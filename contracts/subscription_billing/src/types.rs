use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys.
///
/// Instance keys (`Admin`, `Stopped`, `PlanCount`) hold small contract-wide
/// config. Persistent keys hold one ledger entry per plan, per subscription
/// and per merchant index.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Stopped,
    PlanCount,
    Plan(u32),
    Subscription(SubscriptionKey),
    /// Maps a merchant address to the ids of the plans it created.
    MerchantPlans(Address),
}

/// Composite key of a subscription record: one per (subscriber, plan).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionKey {
    pub subscriber: Address,
    pub plan_id: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    InvalidStatusTransition = 400,
    Unauthorized = 401,
    Overflow = 403,
    PlanNotFound = 404,
    /// The plan counter reached [`crate::MAX_PLAN_ID`].
    PlanLimitReached = 429,
    /// Emergency stop is active.
    ContractStopped = 503,
    /// Token or subscriber is the all-zero identity.
    InvalidAddress = 1001,
    /// Plan amount is zero or negative.
    InvalidAmount = 1002,
    /// Plan frequency is zero.
    InvalidFrequency = 1003,
    /// No subscription record exists for (subscriber, plan).
    NotSubscribed = 1004,
    /// The record exists but has been cancelled.
    SubscriptionNotActive = 1005,
    /// `pay` was called before `next_payment`.
    PaymentNotDue = 1006,
    /// The token contract rejected `transfer_from` (balance or allowance).
    TransferFailed = 1007,
    AlreadySubscribed = 1008,
    AlreadyInitialized = 1009,
}

impl Error {
    pub const fn to_code(self) -> u32 {
        match self {
            Error::InvalidStatusTransition => 400,
            Error::Unauthorized => 401,
            Error::Overflow => 403,
            Error::PlanNotFound => 404,
            Error::PlanLimitReached => 429,
            Error::ContractStopped => 503,
            Error::InvalidAddress => 1001,
            Error::InvalidAmount => 1002,
            Error::InvalidFrequency => 1003,
            Error::NotSubscribed => 1004,
            Error::SubscriptionNotActive => 1005,
            Error::PaymentNotDue => 1006,
            Error::TransferFailed => 1007,
            Error::AlreadySubscribed => 1008,
            Error::AlreadyInitialized => 1009,
        }
    }
}

/// A merchant-defined recurring charge. Immutable once stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plan {
    /// SEP-41 token contract the plan is billed in.
    pub token: Address,
    /// Charge per billing cycle, in token base units.
    pub amount: i128,
    /// Billing cycle length in seconds.
    pub frequency: u64,
    pub merchant: Address,
    pub created_at: u64,
}

/// Lifecycle of a subscription record.
///
/// A missing record is the "never subscribed" state; see
/// [`crate::state_machine`] for the allowed transitions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubscriptionStatus {
    Active = 0,
    Cancelled = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscription {
    pub subscriber: Address,
    pub plan_id: u32,
    /// Ledger timestamp of enrollment.
    pub start: u64,
    /// The next charge may be taken at or after this timestamp.
    pub next_payment: u64,
    /// Modified only through state machine transitions.
    pub status: SubscriptionStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BatchPayResult {
    pub success: bool,
    pub error_code: u32,
}

/// Result of computing next payment information for a subscription.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NextPaymentInfo {
    pub next_payment_timestamp: u64,
    /// Whether a `pay` call would pass the time gate right now.
    pub is_payment_due: bool,
    /// Number of elapsed, unpaid billing cycles. Each one needs its own `pay`.
    pub periods_due: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlanCreatedEvent {
    pub plan_id: u32,
    pub merchant: Address,
    pub token: Address,
    pub amount: i128,
    pub frequency: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubscribedEvent {
    pub plan_id: u32,
    pub subscriber: Address,
    pub start: u64,
    pub next_payment: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentSentEvent {
    pub plan_id: u32,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionCancelledEvent {
    pub plan_id: u32,
    pub subscriber: Address,
    pub timestamp: u64,
}
