//! Message types for the CL8Y bridged token contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Expiration;

pub use common::IsPausedResponse;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message (one-shot initialization of the ledger)
#[cw_serde]
pub struct InstantiateMsg {
    /// Address manager used to resolve the bridge vault and pause authority
    pub address_manager: String,
    /// Numeric id of the chain this ledger is deployed on
    pub this_chain_id: u64,
    /// Canonical token address on the source chain
    pub source_token: Binary,
    /// Source chain id (non-zero, different from `this_chain_id`)
    pub source_chain_id: u64,
    /// Canonical token decimals, used verbatim
    pub decimals: u8,
    /// Base symbol of the canonical token (e.g. "USDC")
    pub symbol: String,
    /// Base name of the canonical token (e.g. "USD Coin")
    pub name: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Guarded Transfers
    // ========================================================================
    /// Move `amount` from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient` using the sender's allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Transfer to a contract and invoke its cw20 `Receive` hook
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Transfer from `owner` to a contract using the sender's allowance and
    /// invoke its cw20 `Receive` hook
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    // ========================================================================
    // Bridge Vault Only
    // ========================================================================
    /// Mint on observing a lock on the source chain
    Mint { recipient: String, amount: Uint128 },

    /// Burn when value is released back to the source chain
    Burn { from: String, amount: Uint128 },

    // ========================================================================
    // Allowances
    // ========================================================================
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Decorated display name
    #[returns(NameResponse)]
    Name {},
    /// Decorated display symbol
    #[returns(SymbolResponse)]
    Symbol {},
    #[returns(DecimalsResponse)]
    Decimals {},
    /// The remote asset this ledger mirrors
    #[returns(CanonicalResponse)]
    Canonical {},
    #[returns(ConfigResponse)]
    Config {},
    /// Live answer from the pause authority
    #[returns(IsPausedResponse)]
    IsPaused {},

    // cw20 compatible queries
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    /// Token info with the decorated name and symbol
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(cw20::AllAllowancesResponse)]
    AllAllowances {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(cw20::AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct NameResponse {
    pub name: String,
}

#[cw_serde]
pub struct SymbolResponse {
    pub symbol: String,
}

#[cw_serde]
pub struct DecimalsResponse {
    pub decimals: u8,
}

#[cw_serde]
pub struct CanonicalResponse {
    pub source_token: Binary,
    pub source_chain_id: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub address_manager: Addr,
    pub this_chain_id: u64,
}
