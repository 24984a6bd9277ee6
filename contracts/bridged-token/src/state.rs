//! State definitions for the CL8Y bridged token contract.
//!
//! Balances, allowances and total supply live in `cw20-base` storage
//! (`cw20_base::state`). This module only holds what the bridged token adds
//! on top: the lifecycle binding, the canonical identity and the reentrancy
//! sentinel.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:cl8y-bridged-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the cw20 receive hook dispatched by Send / SendFrom.
pub const RECEIVE_HOOK_REPLY_ID: u64 = 1;

// ============================================================================
// Lifecycle
// ============================================================================

/// One-shot binding performed by Initialize.
#[cw_serde]
pub struct Lifecycle {
    /// Address that performed initialization
    pub owner: Addr,
    /// Registry used to resolve the bridge vault and the pause authority
    pub address_manager: Addr,
    /// Numeric id of the chain this ledger runs on
    pub this_chain_id: u64,
}

/// Identity of the asset this ledger mirrors. Immutable after Initialize.
#[cw_serde]
pub struct CanonicalToken {
    /// Token address on the source chain (opaque bytes)
    pub address: Binary,
    /// Source chain id
    pub chain_id: u64,
    /// Source decimals, used verbatim as this ledger's decimals
    pub decimals: u8,
}

pub const LIFECYCLE: Item<Lifecycle> = Item::new("lifecycle");

pub const CANONICAL: Item<CanonicalToken> = Item::new("canonical");

/// Held while a guarded entry point (or its receive hook) is in flight.
pub const REENTRANCY_LOCK: Item<bool> = Item::new("reentrancy_lock");
