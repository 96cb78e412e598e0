//! Read-only accessors. Nothing here writes storage.

use crate::merchant::plan_ids;
use crate::plan::load_plan;
use crate::subscription::load_subscription;
use crate::types::{Error, NextPaymentInfo, Plan, Subscription, SubscriptionStatus};
use soroban_sdk::{Address, Env, Vec};

pub fn get_plan(env: &Env, plan_id: u32) -> Result<Plan, Error> {
    load_plan(env, plan_id)
}

pub fn get_subscription(env: &Env, subscriber: &Address, plan_id: u32) -> Option<Subscription> {
    load_subscription(env, subscriber, plan_id)
}

pub fn is_subscribed(env: &Env, subscriber: &Address, plan_id: u32) -> bool {
    matches!(
        load_subscription(env, subscriber, plan_id),
        Some(Subscription {
            status: SubscriptionStatus::Active,
            ..
        })
    )
}

/// Plans created by `merchant`, oldest first, starting at index `start`.
pub fn get_plans_by_merchant(env: &Env, merchant: &Address, start: u32, limit: u32) -> Vec<Plan> {
    let ids = plan_ids(env, merchant);
    let end = start.saturating_add(limit).min(ids.len());

    let mut plans = Vec::new(env);
    for i in start..end {
        if let Some(id) = ids.get(i) {
            if let Ok(plan) = load_plan(env, id) {
                plans.push_back(plan);
            }
        }
    }
    plans
}

pub fn get_merchant_plan_count(env: &Env, merchant: &Address) -> u32 {
    plan_ids(env, merchant).len()
}

/// Computes the next payment timestamp and how many cycles are owed at `now`.
///
/// Cancelled subscriptions are never due.
pub fn compute_next_payment_info(sub: &Subscription, frequency: u64, now: u64) -> NextPaymentInfo {
    let due = sub.status == SubscriptionStatus::Active && now >= sub.next_payment;
    let periods_due = if due && frequency > 0 {
        let owed = (now - sub.next_payment) / frequency + 1;
        u32::try_from(owed).unwrap_or(u32::MAX)
    } else {
        0
    };

    NextPaymentInfo {
        next_payment_timestamp: sub.next_payment,
        is_payment_due: due,
        periods_due,
    }
}

pub fn get_next_payment_info(
    env: &Env,
    subscriber: &Address,
    plan_id: u32,
) -> Result<NextPaymentInfo, Error> {
    let plan = load_plan(env, plan_id)?;
    let sub = load_subscription(env, subscriber, plan_id).ok_or(Error::NotSubscribed)?;
    Ok(compute_next_payment_info(
        &sub,
        plan.frequency,
        env.ledger().timestamp(),
    ))
}

/// Allowance a subscriber needs to approve to cover `num_periods` cycles.
pub fn estimate_allowance_for_periods(
    env: &Env,
    plan_id: u32,
    num_periods: u32,
) -> Result<i128, Error> {
    let plan = load_plan(env, plan_id)?;
    plan.amount
        .checked_mul(num_periods as i128)
        .ok_or(Error::Overflow)
}
