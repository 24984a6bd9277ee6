//! Error types for the CL8Y bridged token contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    // ========================================================================
    // Initialization Errors
    // ========================================================================

    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Contract already initialized")]
    AlreadyInitialized,

    #[error("Cannot migrate from {previous}")]
    InvalidMigration { previous: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the bridge vault can mint or burn")]
    Unauthorized,

    #[error("Collaborator not registered: {name}")]
    CollaboratorNotFound { name: String },

    // ========================================================================
    // Guard Errors
    // ========================================================================

    #[error("Token is paused")]
    Paused,

    #[error("Reentrant call detected")]
    ReentrancyDetected,

    #[error("Token contract cannot receive its own tokens")]
    CannotReceiveSelf,

    // ========================================================================
    // Bookkeeping Errors
    // ========================================================================

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: Uint128,
        required: Uint128,
    },

    // ========================================================================
    // Receive Hook Errors
    // ========================================================================

    #[error("Receive hook failed: {reason}")]
    ReceiveHookFailed { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
