//! Subscription lifecycle: enroll, cancel, record storage.
//!
//! **PRs that only change subscription lifecycle should edit this file only.**

use crate::admin::require_not_stopped;
use crate::ledger::{require_non_null, transfer_from};
use crate::plan::load_plan;
use crate::state_machine::validate_status_transition;
use crate::storage::bump_persistent;
use crate::types::{
    DataKey, Error, PaymentSentEvent, Subscription, SubscriptionCancelledEvent, SubscriptionKey,
    SubscriptionStatus, SubscribedEvent,
};
use soroban_sdk::{symbol_short, Address, Env};

fn subscription_key(subscriber: &Address, plan_id: u32) -> DataKey {
    DataKey::Subscription(SubscriptionKey {
        subscriber: subscriber.clone(),
        plan_id,
    })
}

pub fn load_subscription(env: &Env, subscriber: &Address, plan_id: u32) -> Option<Subscription> {
    env.storage()
        .persistent()
        .get(&subscription_key(subscriber, plan_id))
}

pub fn save_subscription(env: &Env, sub: &Subscription) {
    let key = subscription_key(&sub.subscriber, sub.plan_id);
    env.storage().persistent().set(&key, sub);
    bump_persistent(env, &key);
}

/// Loads the record and checks it is `Active`.
///
/// Missing record → [`Error::NotSubscribed`]; cancelled record →
/// [`Error::SubscriptionNotActive`].
pub fn require_active(env: &Env, subscriber: &Address, plan_id: u32) -> Result<Subscription, Error> {
    let sub = load_subscription(env, subscriber, plan_id).ok_or(Error::NotSubscribed)?;
    if sub.status != SubscriptionStatus::Active {
        return Err(Error::SubscriptionNotActive);
    }
    Ok(sub)
}

/// Enroll `subscriber` in `plan_id`, charging the first cycle immediately.
///
/// The record is written only after the token transfer succeeds. A
/// cancelled record is replaced by a fresh one.
pub fn do_subscribe(env: &Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
    require_not_stopped(env)?;
    subscriber.require_auth();
    require_non_null(env, &subscriber)?;

    let plan = load_plan(env, plan_id)?;

    if let Some(existing) = load_subscription(env, &subscriber, plan_id) {
        // Active -> Active is the only rejected transition here.
        validate_status_transition(&existing.status, &SubscriptionStatus::Active)
            .map_err(|_| Error::AlreadySubscribed)?;
    }

    let now = env.ledger().timestamp();
    let next_payment = now.checked_add(plan.frequency).ok_or(Error::Overflow)?;

    transfer_from(env, &plan.token, &subscriber, &plan.merchant, plan.amount)?;

    let sub = Subscription {
        subscriber: subscriber.clone(),
        plan_id,
        start: now,
        next_payment,
        status: SubscriptionStatus::Active,
    };
    save_subscription(env, &sub);

    env.events().publish(
        (symbol_short!("paid"), plan_id),
        PaymentSentEvent {
            plan_id,
            from: subscriber.clone(),
            to: plan.merchant,
            amount: plan.amount,
            timestamp: now,
        },
    );
    env.events().publish(
        (symbol_short!("subscribe"), plan_id),
        SubscribedEvent {
            plan_id,
            subscriber,
            start: now,
            next_payment,
        },
    );

    Ok(())
}

/// Cancel an active enrollment. No refund and no token movement.
pub fn do_cancel(env: &Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
    subscriber.require_auth();

    let mut sub = require_active(env, &subscriber, plan_id)?;
    validate_status_transition(&sub.status, &SubscriptionStatus::Cancelled)?;
    sub.status = SubscriptionStatus::Cancelled;
    save_subscription(env, &sub);

    env.events().publish(
        (symbol_short!("cancelled"), plan_id),
        SubscriptionCancelledEvent {
            plan_id,
            subscriber,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(())
}
