//! Address manager interface.
//!
//! The address manager is a registry keyed by `(chain_id, name)`. A bridged
//! token binds to one address manager at initialization and looks up its
//! privileged collaborators through it on every call, so rotating the vault
//! or the pause authority never requires touching the token.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

/// Registry name of the bridge vault allowed to mint and burn.
pub const BRIDGE_VAULT: &str = "erc20_vault";

/// Registry name of the contract that owns the paused flag.
pub const PAUSE_AUTHORITY: &str = "pause_authority";

#[cw_serde]
#[derive(QueryResponses)]
pub enum AddressManagerQueryMsg {
    /// Resolve a well-known name registered for `chain_id`.
    #[returns(ResolveResponse)]
    Resolve { chain_id: u64, name: String },
}

#[cw_serde]
pub struct ResolveResponse {
    /// None when nothing is registered under the name
    pub address: Option<Addr>,
}

/// Resolve `name` on `chain_id` through the address manager at `manager`.
pub fn resolve(
    querier: &QuerierWrapper,
    manager: &Addr,
    chain_id: u64,
    name: &str,
) -> StdResult<Option<Addr>> {
    let res: ResolveResponse = querier.query_wasm_smart(
        manager,
        &AddressManagerQueryMsg::Resolve {
            chain_id,
            name: name.to_string(),
        },
    )?;
    Ok(res.address)
}
