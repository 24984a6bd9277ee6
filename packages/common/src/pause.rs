//! Pause authority interface.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

#[cw_serde]
#[derive(QueryResponses)]
pub enum PauseAuthorityQueryMsg {
    /// Whether balance-changing operations are currently halted.
    #[returns(IsPausedResponse)]
    IsPaused {},
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}

/// Ask the pause authority at `authority` for the current paused flag.
pub fn is_paused(querier: &QuerierWrapper, authority: &Addr) -> StdResult<bool> {
    let res: IsPausedResponse =
        querier.query_wasm_smart(authority, &PauseAuthorityQueryMsg::IsPaused {})?;
    Ok(res.paused)
}
