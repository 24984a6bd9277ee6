//! Common - Collaborator Interfaces for CL8Y Bridged Tokens
//!
//! This package provides the message shapes and query helpers shared between
//! a bridged token ledger and the contracts it consults:
//! - `address_manager` - resolves a well-known name on a chain to an address
//! - `pause` - answers whether balance-changing calls are halted

pub mod address_manager;
pub mod pause;

pub use address_manager::{
    resolve, AddressManagerQueryMsg, ResolveResponse, BRIDGE_VAULT, PAUSE_AUTHORITY,
};
pub use pause::{is_paused, IsPausedResponse, PauseAuthorityQueryMsg};
