#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────
mod admin;
mod charge_core;
mod ledger;
mod merchant;
mod plan;
mod queries;
mod state_machine;
mod storage;
mod subscription;
mod types;

// ── Re-exports (used by tests and external consumers) ────────────────────────
pub use plan::MAX_PLAN_ID;
pub use queries::compute_next_payment_info;
pub use state_machine::{can_transition, get_allowed_transitions, validate_status_transition};
pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Recurring billing engine.
///
/// Merchants register plans (token, amount, frequency). Subscribers approve
/// this contract on the plan's token and enroll; the first cycle is charged at
/// enrollment and each later cycle is collected by `pay` once it falls due.
#[contract]
pub struct SubscriptionBilling;

#[contractimpl]
impl SubscriptionBilling {
    // ── Admin / Config ───────────────────────────────────────────────────

    /// Set the admin allowed to use the emergency stop. Callable once.
    ///
    /// Optional: every billing entrypoint works on an uninitialized contract.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin::do_init(&env, admin)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        admin::do_get_admin(&env)
    }

    /// Rotate admin to a new address. Only callable by current admin.
    ///
    /// Emits an `admin rotated` event.
    pub fn rotate_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::do_rotate_admin(&env, current_admin, new_admin)
    }

    /// **ADMIN ONLY**: block plan creation, enrollment and payments.
    pub fn emergency_stop(env: Env, admin: Address) -> Result<(), Error> {
        admin::do_emergency_stop(&env, admin)
    }

    /// **ADMIN ONLY**: lift the emergency stop.
    pub fn resume_contract(env: Env, admin: Address) -> Result<(), Error> {
        admin::do_resume_contract(&env, admin)
    }

    pub fn is_stopped(env: Env) -> bool {
        admin::is_stopped(&env)
    }

    // ── Plans ────────────────────────────────────────────────────────────

    /// Register a plan billed in `token`, charging `amount` every `frequency`
    /// seconds. `merchant` must authorize and receives every payment.
    ///
    /// # Errors
    ///
    /// | Variant | Reason |
    /// |---------|--------|
    /// | `InvalidAddress` | `token` is the all-zero address. |
    /// | `InvalidAmount` | `amount` is zero or negative. |
    /// | `InvalidFrequency` | `frequency` is zero. |
    /// | `PlanLimitReached` | [`MAX_PLAN_ID`] plans already exist. |
    /// | `ContractStopped` | Emergency stop is active. |
    pub fn create_plan(
        env: Env,
        merchant: Address,
        token: Address,
        amount: i128,
        frequency: u64,
    ) -> Result<u32, Error> {
        plan::do_create_plan(&env, merchant, token, amount, frequency)
    }

    // ── Subscription lifecycle ───────────────────────────────────────────

    /// Enroll `subscriber` in `plan_id` and charge the first cycle.
    ///
    /// The subscriber must have approved this contract for at least the plan
    /// amount on the plan's token. On success `next_payment = now + frequency`.
    /// A cancelled subscription may be re-entered; an active one returns
    /// `AlreadySubscribed`.
    pub fn subscribe_to_plan(env: Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
        subscription::do_subscribe(&env, subscriber, plan_id)
    }

    /// Cancel the caller's active subscription to `plan_id`. No refund.
    pub fn cancel_plan(env: Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
        subscription::do_cancel(&env, subscriber, plan_id)
    }

    // ── Billing ──────────────────────────────────────────────────────────

    /// Collect one due cycle from `subscriber`. Callable by anyone.
    ///
    /// Fails with `PaymentNotDue` before `next_payment`. Each successful call
    /// moves `next_payment` forward by exactly one `frequency`.
    pub fn pay(env: Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
        admin::require_not_stopped(&env)?;
        charge_core::pay_one(&env, &subscriber, plan_id)
    }

    /// Collect one due cycle from each of `subscribers`. Callable by anyone.
    ///
    /// Returns a per-subscriber result vector so callers can tell which
    /// payments succeeded and which failed (with error codes).
    pub fn batch_pay(
        env: Env,
        plan_id: u32,
        subscribers: Vec<Address>,
    ) -> Result<Vec<BatchPayResult>, Error> {
        admin::require_not_stopped(&env)?;
        charge_core::do_batch_pay(&env, plan_id, &subscribers)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn get_plan(env: Env, plan_id: u32) -> Result<Plan, Error> {
        queries::get_plan(&env, plan_id)
    }

    /// Number of plans ever created, which is also the next id to be issued.
    pub fn get_plan_count(env: Env) -> u32 {
        plan::plan_count(&env)
    }

    /// Read the subscription record. `None` if the pair never subscribed.
    pub fn get_subscription(env: Env, subscriber: Address, plan_id: u32) -> Option<Subscription> {
        queries::get_subscription(&env, &subscriber, plan_id)
    }

    pub fn is_subscribed(env: Env, subscriber: Address, plan_id: u32) -> bool {
        queries::is_subscribed(&env, &subscriber, plan_id)
    }

    /// Return plans created by a merchant, paginated.
    pub fn get_plans_by_merchant(env: Env, merchant: Address, start: u32, limit: u32) -> Vec<Plan> {
        queries::get_plans_by_merchant(&env, &merchant, start, limit)
    }

    pub fn get_merchant_plan_count(env: Env, merchant: Address) -> u32 {
        queries::get_merchant_plan_count(&env, &merchant)
    }

    /// Next due timestamp, whether `pay` would pass the time gate now, and how
    /// many cycles are owed.
    pub fn get_next_payment_info(
        env: Env,
        subscriber: Address,
        plan_id: u32,
    ) -> Result<NextPaymentInfo, Error> {
        queries::get_next_payment_info(&env, &subscriber, plan_id)
    }

    /// Allowance needed on the plan's token to cover `num_periods` cycles.
    pub fn estimate_allowance_for_periods(
        env: Env,
        plan_id: u32,
        num_periods: u32,
    ) -> Result<i128, Error> {
        queries::estimate_allowance_for_periods(&env, plan_id, num_periods)
    }

    pub fn get_token_balance(env: Env, token: Address, id: Address) -> i128 {
        ledger::balance_of(&env, &token, &id)
    }
}
