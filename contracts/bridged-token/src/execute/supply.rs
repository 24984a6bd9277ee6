//! Mint and Burn, reachable only by the bridge vault.
//!
//! Both sit on the same guarded surface as transfers: pause first, then the
//! reentrancy sentinel, then the vault check. Mint also refuses the token
//! contract as recipient.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use super::transfer::{ensure_balance, ensure_not_self};
use crate::error::ContractError;
use crate::guard::{ensure_bridge_vault, ensure_not_paused, non_reentrant};
use crate::state::CANONICAL;

/// Mint on a lock observed on the source chain.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_self(deps.as_ref(), &env, &recipient)?;
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        ensure_bridge_vault(deps.as_ref(), &info.sender)?;
        let canonical = CANONICAL.load(deps.storage)?;

        // the token contract is its own cw20 minter
        let minter = MessageInfo {
            sender: env.contract.address.clone(),
            funds: vec![],
        };
        let res = cw20_base::contract::execute_mint(deps, env, minter, recipient, amount)?;

        Ok(res
            .add_attribute("vault", info.sender)
            .add_attribute("src_chain_id", canonical.chain_id.to_string()))
    })
}

/// Burn on a release back to the source chain.
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.as_ref())?;

    non_reentrant(deps, |deps| {
        ensure_bridge_vault(deps.as_ref(), &info.sender)?;
        let from_addr = deps.api.addr_validate(&from)?;
        ensure_balance(deps.storage, &from_addr, amount)?;
        let canonical = CANONICAL.load(deps.storage)?;

        let holder = MessageInfo {
            sender: from_addr,
            funds: vec![],
        };
        let res = cw20_base::contract::execute_burn(deps, env, holder, amount)?;

        Ok(res
            .add_attribute("vault", info.sender)
            .add_attribute("src_chain_id", canonical.chain_id.to_string()))
    })
}
