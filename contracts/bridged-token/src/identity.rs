//! Display identity of a bridged token.
//!
//! The base name and symbol are stored raw and decorated with the source
//! chain id on every read, so a bridged "USDC" can never be shown as the
//! canonical "USDC".

use cosmwasm_std::Binary;

use crate::error::ContractError;

/// Marker placed between the base identity and the source chain id.
pub const BRIDGED_MARKER: &str = "⭀";

/// Decorated display name, e.g. `"USD Coin ⭀5"`.
pub fn display_name(base_name: &str, source_chain_id: u64) -> String {
    decorate(base_name, source_chain_id)
}

/// Decorated display symbol, e.g. `"USDC ⭀5"`.
pub fn display_symbol(base_symbol: &str, source_chain_id: u64) -> String {
    decorate(base_symbol, source_chain_id)
}

fn decorate(base: &str, source_chain_id: u64) -> String {
    format!("{} {}{}", base, BRIDGED_MARKER, source_chain_id)
}

/// An empty or all-zero source token address is the zero address.
pub fn is_zero_address(address: &Binary) -> bool {
    address.iter().all(|b| *b == 0)
}

/// Validate Initialize inputs.
pub fn validate_identity(
    source_token: &Binary,
    source_chain_id: u64,
    this_chain_id: u64,
    symbol: &str,
    name: &str,
) -> Result<(), ContractError> {
    let reason = if is_zero_address(source_token) {
        "source token must not be the zero address"
    } else if this_chain_id == 0 {
        "this chain id must not be zero"
    } else if source_chain_id == 0 {
        "source chain id must not be zero"
    } else if source_chain_id == this_chain_id {
        "source chain id must differ from this chain id"
    } else if symbol.is_empty() {
        "symbol must not be empty"
    } else if name.is_empty() {
        "name must not be empty"
    } else {
        return Ok(());
    };

    Err(ContractError::InvalidParameters {
        reason: reason.to_string(),
    })
}
