//! Token ledger seam: every balance movement goes through here.
//!
//! The ledger is any SEP-41 token contract. The engine is the `spender` of a
//! `transfer_from`, so the payer must have approved this contract beforehand.

use crate::types::Error;
use soroban_sdk::{token::TokenClient, Address, Env, String};

/// All-zero ed25519 account strkey.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// All-zero contract strkey.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

pub fn require_non_null(env: &Env, address: &Address) -> Result<(), Error> {
    if is_null_address(env, address) {
        return Err(Error::InvalidAddress);
    }
    Ok(())
}

/// Move `amount` of `token` from `from` to `to` against `from`'s allowance.
///
/// Any rejection by the token contract (missing allowance, short balance,
/// not a token at all) surfaces as [`Error::TransferFailed`]; the nested
/// call's effects are discarded.
pub fn transfer_from(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = TokenClient::new(env, token);
    match client.try_transfer_from(&env.current_contract_address(), from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

pub fn balance_of(env: &Env, token: &Address, id: &Address) -> i128 {
    TokenClient::new(env, token).balance(id)
}
