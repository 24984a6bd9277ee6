//! Initialization of a bridged token.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw20_base::state::{MinterData, TokenInfo, TOKEN_INFO};

use crate::error::ContractError;
use crate::identity::{display_symbol, validate_identity};
use crate::msg::InstantiateMsg;
use crate::state::{
    CanonicalToken, Lifecycle, CANONICAL, CONTRACT_NAME, CONTRACT_VERSION, LIFECYCLE,
};

/// Bind the ledger to its address manager and canonical asset.
///
/// Runs exactly once per instance. The cw20 token info keeps the raw base
/// name and symbol; decoration happens on read. The ledger is registered as
/// its own cw20 minter so that vault-authorized mints go through `cw20-base`.
pub fn execute_initialize(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if LIFECYCLE.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    validate_identity(
        &msg.source_token,
        msg.source_chain_id,
        msg.this_chain_id,
        &msg.symbol,
        &msg.name,
    )?;
    let address_manager = deps.api.addr_validate(&msg.address_manager)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    LIFECYCLE.save(
        deps.storage,
        &Lifecycle {
            owner: info.sender.clone(),
            address_manager: address_manager.clone(),
            this_chain_id: msg.this_chain_id,
        },
    )?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            mint: Some(MinterData {
                minter: env.contract.address.clone(),
                cap: None,
            }),
        },
    )?;

    CANONICAL.save(
        deps.storage,
        &CanonicalToken {
            address: msg.source_token.clone(),
            chain_id: msg.source_chain_id,
            decimals: msg.decimals,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("address_manager", address_manager)
        .add_attribute("symbol", display_symbol(&msg.symbol, msg.source_chain_id))
        .add_attribute("src_token", format!("0x{}", hex::encode(&msg.source_token)))
        .add_attribute("src_chain_id", msg.source_chain_id.to_string())
        .add_attribute("decimals", msg.decimals.to_string()))
}
