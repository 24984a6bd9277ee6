//! CL8Y Bridged Token - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - Pause, reentrancy and vault checks

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_decrease_allowance, execute_increase_allowance, execute_initialize,
    execute_mint, execute_send, execute_send_from, execute_transfer, execute_transfer_from,
};
use crate::guard::release;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_all_accounts, query_all_allowances, query_allowance, query_balance, query_canonical,
    query_config, query_decimals, query_is_paused, query_name, query_symbol, query_token_info,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, RECEIVE_HOOK_REPLY_ID};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    execute_initialize(deps, &env, &info, msg)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Guarded transfers
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, env, info, contract, amount, msg),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => execute_send_from(deps, env, info, owner, contract, amount, msg),

        // Bridge vault only
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, env, info, from, amount),

        // Allowances
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_decrease_allowance(deps, env, info, spender, amount, expires),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Settles the receive hook of Send / SendFrom and releases the sentinel.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        RECEIVE_HOOK_REPLY_ID => {
            release(deps.storage);
            match msg.result {
                SubMsgResult::Ok(_) => {
                    Ok(Response::new().add_attribute("method", "receive_hook_settled"))
                }
                SubMsgResult::Err(reason) => Err(ContractError::ReceiveHookFailed { reason }),
            }
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Identity
        QueryMsg::Name {} => to_json_binary(&query_name(deps)?),
        QueryMsg::Symbol {} => to_json_binary(&query_symbol(deps)?),
        QueryMsg::Decimals {} => to_json_binary(&query_decimals(deps)?),
        QueryMsg::Canonical {} => to_json_binary(&query_canonical(deps)?),

        // Configuration
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),

        // CW20
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_all_allowances(deps, owner, start_after, limit)?),
        QueryMsg::AllAccounts { start_after, limit } => {
            to_json_binary(&query_all_accounts(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Upgrades keep every stored field's meaning; the cw2 version is the schema
/// version and new fields must be initialized here.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            previous: previous.contract,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", previous.version)
        .add_attribute("version", CONTRACT_VERSION))
}
