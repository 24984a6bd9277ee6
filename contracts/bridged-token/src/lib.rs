//! CL8Y Bridged Token - Destination-Side Ledger for a Canonical Token
//!
//! This contract is the wrapped representation of a token whose canonical
//! home is another chain. Balances and allowances are kept by `cw20-base`;
//! this crate adds the bridge-specific rules on top.
//!
//! # Identity
//! - Bound once to a canonical `(source_token, source_chain_id)` pair
//! - Decimals copied verbatim from the source token
//! - Name and symbol always carry the source chain id, e.g. `USDC ⭀5`
//!
//! # Supply
//! - `Mint` when the vault observes a lock on the source chain
//! - `Burn` when value is released back to the source chain
//! - Only the `erc20_vault` registered in the address manager may call either
//!
//! # Security
//! - Pause authority halts every balance-changing call
//! - Reentrancy sentinel held across cw20 receive hooks
//! - The contract rejects transfers to itself

pub mod contract;
pub mod error;
mod execute;
pub mod guard;
pub mod identity;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
