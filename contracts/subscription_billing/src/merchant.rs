//! Merchant → plan id index, maintained on plan creation.

use crate::storage::bump_persistent;
use crate::types::DataKey;
use soroban_sdk::{Address, Env, Vec};

pub fn plan_ids(env: &Env, merchant: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::MerchantPlans(merchant.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn index_plan(env: &Env, merchant: &Address, plan_id: u32) {
    let key = DataKey::MerchantPlans(merchant.clone());
    let mut ids = plan_ids(env, merchant);
    ids.push_back(plan_id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}
