//! Admin and config: init, admin rotation, emergency stop.
//!
//! The engine runs without an admin; `init` only enables the stop switch.

use crate::storage::bump_instance;
use crate::types::{DataKey, Error};
use soroban_sdk::{symbol_short, Address, Env};

pub fn do_init(env: &Env, admin: Address) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();
    env.storage().instance().set(&DataKey::Admin, &admin);
    bump_instance(env);
    Ok(())
}

pub fn do_get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Unauthorized)
}

/// Checks `admin` is the stored admin and has signed.
pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    let stored = do_get_admin(env)?;
    if *admin != stored {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn do_rotate_admin(env: &Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
    require_admin(env, &current_admin)?;
    env.storage().instance().set(&DataKey::Admin, &new_admin);
    bump_instance(env);
    env.events().publish(
        (symbol_short!("admin"), symbol_short!("rotated")),
        (current_admin, new_admin),
    );
    Ok(())
}

// =============================================================================
// Emergency Stop
// =============================================================================

pub fn is_stopped(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Stopped)
        .unwrap_or(false)
}

/// Call at the top of every guarded entrypoint.
pub fn require_not_stopped(env: &Env) -> Result<(), Error> {
    if is_stopped(env) {
        Err(Error::ContractStopped)
    } else {
        Ok(())
    }
}

/// Enables emergency stop. Plan creation, enrollment and payments return
/// [`Error::ContractStopped`] until [`do_resume_contract`] is called.
/// Cancellation and reads stay available.
pub fn do_emergency_stop(env: &Env, admin: Address) -> Result<(), Error> {
    require_admin(env, &admin)?;
    env.storage().instance().set(&DataKey::Stopped, &true);
    bump_instance(env);
    env.events()
        .publish((symbol_short!("e_stop"), symbol_short!("activated")), admin);
    Ok(())
}

pub fn do_resume_contract(env: &Env, admin: Address) -> Result<(), Error> {
    require_admin(env, &admin)?;
    env.storage().instance().set(&DataKey::Stopped, &false);
    bump_instance(env);
    env.events()
        .publish((symbol_short!("e_stop"), symbol_short!("resumed")), admin);
    Ok(())
}
