//! Guards applied to every balance-changing entry point.
//!
//! - `ensure_not_paused` - consults the pause authority
//! - `non_reentrant` - scoped acquisition of the reentrancy sentinel
//! - `ensure_bridge_vault` - caller must be the vault registered for this chain

use cosmwasm_std::{Addr, Deps, DepsMut, Response, Storage};

use crate::error::ContractError;
use crate::state::{LIFECYCLE, RECEIVE_HOOK_REPLY_ID, REENTRANCY_LOCK};
use common::{is_paused, resolve, BRIDGE_VAULT, PAUSE_AUTHORITY};

// ============================================================================
// Pause
// ============================================================================

/// Fail with `Paused` while the pause authority reports a halt.
pub fn ensure_not_paused(deps: Deps) -> Result<(), ContractError> {
    if query_paused(deps)? {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Current paused flag, as reported by the pause authority registered for
/// this chain.
pub fn query_paused(deps: Deps) -> Result<bool, ContractError> {
    let lifecycle = LIFECYCLE.load(deps.storage)?;
    let authority = resolve(
        &deps.querier,
        &lifecycle.address_manager,
        lifecycle.this_chain_id,
        PAUSE_AUTHORITY,
    )?
    .ok_or_else(|| ContractError::CollaboratorNotFound {
        name: PAUSE_AUTHORITY.to_string(),
    })?;

    Ok(is_paused(&deps.querier, &authority)?)
}

// ============================================================================
// Reentrancy
// ============================================================================

pub fn is_locked(storage: &dyn Storage) -> Result<bool, ContractError> {
    Ok(REENTRANCY_LOCK.may_load(storage)?.unwrap_or(false))
}

fn acquire(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if is_locked(storage)? {
        return Err(ContractError::ReentrancyDetected);
    }
    REENTRANCY_LOCK.save(storage, &true)?;
    Ok(())
}

pub fn release(storage: &mut dyn Storage) {
    REENTRANCY_LOCK.remove(storage);
}

/// Run `f` holding the reentrancy sentinel.
///
/// The sentinel is released on every exit path of `f`. The one exception is
/// a response carrying the receive hook submessage: the hook runs after this
/// call returns, so the sentinel stays held until the hook's reply.
pub fn non_reentrant<F>(mut deps: DepsMut, f: F) -> Result<Response, ContractError>
where
    F: FnOnce(DepsMut) -> Result<Response, ContractError>,
{
    acquire(deps.storage)?;

    match f(deps.branch()) {
        Ok(res) if awaits_receive_hook(&res) => Ok(res),
        Ok(res) => {
            release(deps.storage);
            Ok(res)
        }
        Err(err) => {
            release(deps.storage);
            Err(err)
        }
    }
}

fn awaits_receive_hook(res: &Response) -> bool {
    res.messages.iter().any(|m| m.id == RECEIVE_HOOK_REPLY_ID)
}

// ============================================================================
// Authorization
// ============================================================================

/// Fail with `Unauthorized` unless `sender` is the bridge vault.
pub fn ensure_bridge_vault(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let lifecycle = LIFECYCLE.load(deps.storage)?;
    let vault = resolve(
        &deps.querier,
        &lifecycle.address_manager,
        lifecycle.this_chain_id,
        BRIDGE_VAULT,
    )?;

    match vault {
        Some(vault) if vault == *sender => Ok(()),
        _ => Err(ContractError::Unauthorized),
    }
}
