//! Guarded transfer handlers.
//!
//! Every handler here checks, in order: recipient is not the token contract,
//! the token is not paused, no guarded call is already in flight, the
//! allowance (for the `From` variants) and the balance. Only then is the
//! balance arithmetic handed to `cw20-base`.

use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, Storage, SubMsg, Uint128,
};
use cw20::Expiration;
use cw20_base::state::{ALLOWANCES, BALANCES};

use crate::error::ContractError;
use crate::guard::{ensure_not_paused, non_reentrant};
use crate::state::RECEIVE_HOOK_REPLY_ID;

// ============================================================================
// Transfer / TransferFrom
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_self(deps.as_ref(), &env, &recipient)?;
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        ensure_balance(deps.storage, &info.sender, amount)?;
        Ok(cw20_base::contract::execute_transfer(
            deps, env, info, recipient, amount,
        )?)
    })
}

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_self(deps.as_ref(), &env, &recipient)?;
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        let owner_addr = deps.api.addr_validate(&owner)?;
        ensure_allowance(deps.storage, &env, &owner_addr, &info.sender, amount)?;
        ensure_balance(deps.storage, &owner_addr, amount)?;
        Ok(cw20_base::allowances::execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?)
    })
}

// ============================================================================
// Send / SendFrom
// ============================================================================

/// Transfer to `contract` and call its receive hook.
///
/// The reentrancy sentinel stays held until the hook's reply.
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_not_self(deps.as_ref(), &env, &contract)?;
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        ensure_balance(deps.storage, &info.sender, amount)?;
        let res = cw20_base::contract::execute_send(deps, env, info, contract, amount, msg)?;
        Ok(with_receive_hook_reply(res))
    })
}

pub fn execute_send_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_not_self(deps.as_ref(), &env, &contract)?;
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        let owner_addr = deps.api.addr_validate(&owner)?;
        ensure_allowance(deps.storage, &env, &owner_addr, &info.sender, amount)?;
        ensure_balance(deps.storage, &owner_addr, amount)?;
        let res = cw20_base::allowances::execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?;
        Ok(with_receive_hook_reply(res))
    })
}

/// Route the cw20 receive hook through `reply` so the sentinel is released
/// once the hook has run.
fn with_receive_hook_reply(mut res: Response) -> Response {
    res.messages = res
        .messages
        .into_iter()
        .map(|sub| SubMsg::reply_always(sub.msg, RECEIVE_HOOK_REPLY_ID))
        .collect();
    res
}

// ============================================================================
// Allowances
// ============================================================================

pub fn execute_increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    Ok(cw20_base::allowances::execute_increase_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    Ok(cw20_base::allowances::execute_decrease_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// The token contract never holds its own tokens.
pub(crate) fn ensure_not_self(
    deps: Deps,
    env: &Env,
    recipient: &str,
) -> Result<(), ContractError> {
    let recipient = deps.api.addr_validate(recipient)?;
    if recipient == env.contract.address {
        return Err(ContractError::CannotReceiveSelf);
    }
    Ok(())
}

pub(crate) fn ensure_balance(
    storage: &dyn Storage,
    owner: &Addr,
    required: Uint128,
) -> Result<(), ContractError> {
    let available = BALANCES.may_load(storage, owner)?.unwrap_or_default();
    if available < required {
        return Err(ContractError::InsufficientBalance {
            available,
            required,
        });
    }
    Ok(())
}

fn ensure_allowance(
    storage: &dyn Storage,
    env: &Env,
    owner: &Addr,
    spender: &Addr,
    required: Uint128,
) -> Result<(), ContractError> {
    let available = match ALLOWANCES.may_load(storage, (owner, spender))? {
        Some(allowance) if !allowance.expires.is_expired(&env.block) => allowance.allowance,
        _ => Uint128::zero(),
    };
    if available < required {
        return Err(ContractError::InsufficientAllowance {
            available,
            required,
        });
    }
    Ok(())
}
