//! Query handlers for the CL8Y bridged token contract.
//!
//! Identity queries derive the decorated name and symbol on every call.
//! Balance and allowance queries are answered by `cw20-base`.

use cosmwasm_std::{Deps, StdError, StdResult};
use cw20::{
    AllAccountsResponse, AllAllowancesResponse, AllowanceResponse, BalanceResponse,
    TokenInfoResponse,
};
use cw20_base::state::TOKEN_INFO;

use crate::error::ContractError;
use crate::guard::query_paused;
use crate::identity::{display_name, display_symbol};
use crate::msg::{
    CanonicalResponse, ConfigResponse, DecimalsResponse, IsPausedResponse, NameResponse,
    SymbolResponse,
};
use crate::state::{CANONICAL, LIFECYCLE};

// ============================================================================
// Identity Queries
// ============================================================================

pub fn query_name(deps: Deps) -> StdResult<NameResponse> {
    let base = TOKEN_INFO.load(deps.storage)?;
    let canonical = CANONICAL.load(deps.storage)?;
    Ok(NameResponse {
        name: display_name(&base.name, canonical.chain_id),
    })
}

pub fn query_symbol(deps: Deps) -> StdResult<SymbolResponse> {
    let base = TOKEN_INFO.load(deps.storage)?;
    let canonical = CANONICAL.load(deps.storage)?;
    Ok(SymbolResponse {
        symbol: display_symbol(&base.symbol, canonical.chain_id),
    })
}

pub fn query_decimals(deps: Deps) -> StdResult<DecimalsResponse> {
    let canonical = CANONICAL.load(deps.storage)?;
    Ok(DecimalsResponse {
        decimals: canonical.decimals,
    })
}

pub fn query_canonical(deps: Deps) -> StdResult<CanonicalResponse> {
    let canonical = CANONICAL.load(deps.storage)?;
    Ok(CanonicalResponse {
        source_token: canonical.address,
        source_chain_id: canonical.chain_id,
    })
}

// ============================================================================
// Configuration Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let lifecycle = LIFECYCLE.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: lifecycle.owner,
        address_manager: lifecycle.address_manager,
        this_chain_id: lifecycle.this_chain_id,
    })
}

pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    let paused = query_paused(deps).map_err(|err| match err {
        ContractError::Std(err) => err,
        ContractError::CollaboratorNotFound { name } => StdError::not_found(name),
        other => StdError::generic_err(other.to_string()),
    })?;
    Ok(IsPausedResponse { paused })
}

// ============================================================================
// CW20 Queries
// ============================================================================

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    cw20_base::contract::query_balance(deps, address)
}

/// cw20 token info with the decorated name and symbol.
pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = cw20_base::contract::query_token_info(deps)?;
    let canonical = CANONICAL.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: display_name(&info.name, canonical.chain_id),
        symbol: display_symbol(&info.symbol, canonical.chain_id),
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    cw20_base::allowances::query_allowance(deps, owner, spender)
}

pub fn query_all_allowances(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllAllowancesResponse> {
    cw20_base::enumerable::query_owner_allowances(deps, owner, start_after, limit)
}

pub fn query_all_accounts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllAccountsResponse> {
    cw20_base::enumerable::query_all_accounts(deps, start_after, limit)
}
