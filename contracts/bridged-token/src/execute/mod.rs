//! Execute handlers for the CL8Y bridged token contract.
//!
//! - `lifecycle` - one-shot initialization
//! - `transfer` - guarded Transfer, TransferFrom, Send, SendFrom and allowances
//! - `supply` - vault-only Mint and Burn

mod lifecycle;
mod supply;
mod transfer;

pub use lifecycle::*;
pub use supply::*;
pub use transfer::*;
