//! Plan registry: creation, id allocation, lookup.
//!
//! **PRs that only change how plans are registered should edit this file only.**

use crate::admin::require_not_stopped;
use crate::ledger::require_non_null;
use crate::merchant::index_plan;
use crate::storage::{bump_instance, bump_persistent};
use crate::types::{DataKey, Error, Plan, PlanCreatedEvent};
use soroban_sdk::{symbol_short, Address, Env};

/// Maximum plan ID this contract will ever allocate.
///
/// When the counter reaches this value [`do_create_plan`] returns
/// [`Error::PlanLimitReached`] instead of wrapping.
pub const MAX_PLAN_ID: u32 = u32::MAX;

pub fn plan_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlanCount)
        .unwrap_or(0u32)
}

/// Allocate the next plan id.
///
/// Ids start at `0`, increase by exactly one per call and are never reused.
fn next_plan_id(env: &Env) -> Result<u32, Error> {
    let current = plan_count(env);
    if current == MAX_PLAN_ID {
        return Err(Error::PlanLimitReached);
    }
    env.storage()
        .instance()
        .set(&DataKey::PlanCount, &(current + 1));
    bump_instance(env);
    Ok(current)
}

pub fn load_plan(env: &Env, plan_id: u32) -> Result<Plan, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Plan(plan_id))
        .ok_or(Error::PlanNotFound)
}

pub fn do_create_plan(
    env: &Env,
    merchant: Address,
    token: Address,
    amount: i128,
    frequency: u64,
) -> Result<u32, Error> {
    require_not_stopped(env)?;
    merchant.require_auth();

    require_non_null(env, &token)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if frequency == 0 {
        return Err(Error::InvalidFrequency);
    }

    let id = next_plan_id(env)?;
    let plan = Plan {
        token: token.clone(),
        amount,
        frequency,
        merchant: merchant.clone(),
        created_at: env.ledger().timestamp(),
    };
    let key = DataKey::Plan(id);
    env.storage().persistent().set(&key, &plan);
    bump_persistent(env, &key);
    index_plan(env, &merchant, id);

    env.events().publish(
        (symbol_short!("plan"), symbol_short!("created")),
        PlanCreatedEvent {
            plan_id: id,
            merchant,
            token,
            amount,
            frequency,
        },
    );

    Ok(id)
}
