//! Single payment logic (no auth). Used by `pay` and `batch_pay`.
//!
//! **PRs that only change how one billing cycle is collected should edit this file only.**

use crate::ledger::{require_non_null, transfer_from};
use crate::plan::load_plan;
use crate::subscription::{require_active, save_subscription};
use crate::types::{BatchPayResult, Error, PaymentSentEvent};
use soroban_sdk::{symbol_short, Address, Env, Vec};

/// Collect one billing cycle from `subscriber` for `plan_id`.
///
/// Advances `next_payment` by exactly one `frequency` from the previous due
/// date, so N elapsed cycles take N calls. Nothing is written unless the
/// transfer succeeds.
pub fn pay_one(env: &Env, subscriber: &Address, plan_id: u32) -> Result<(), Error> {
    require_non_null(env, subscriber)?;
    let plan = load_plan(env, plan_id)?;
    let mut sub = require_active(env, subscriber, plan_id)?;

    let now = env.ledger().timestamp();
    if now < sub.next_payment {
        return Err(Error::PaymentNotDue);
    }
    let next_payment = sub
        .next_payment
        .checked_add(plan.frequency)
        .ok_or(Error::Overflow)?;

    transfer_from(env, &plan.token, subscriber, &plan.merchant, plan.amount)?;

    sub.next_payment = next_payment;
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

    Ok(())
}

/// Run [`pay_one`] for each subscriber of `plan_id`.
///
/// Each entry is attempted independently and reported in input order; a
/// failed entry leaves its subscription and balances unchanged.
pub fn do_batch_pay(
    env: &Env,
    plan_id: u32,
    subscribers: &Vec<Address>,
) -> Result<Vec<BatchPayResult>, Error> {
    let mut results = Vec::new(env);
    for subscriber in subscribers.iter() {
        let res = match pay_one(env, &subscriber, plan_id) {
            Ok(()) => BatchPayResult {
                success: true,
                error_code: 0,
            },
            Err(e) => BatchPayResult {
                success: false,
                error_code: e.to_code(),
            },
        };
        results.push_back(res);
    }
    Ok(results)
}
