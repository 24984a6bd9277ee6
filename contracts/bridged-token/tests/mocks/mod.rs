//! Mock collaborators for the bridged token integration tests.
//!
//! - `address_manager` - `(chain_id, name)` registry
//! - `pause_authority` - owns the paused flag
//! - `receiver` - cw20 receive hook that accepts, rejects or re-enters

#![allow(dead_code)]

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn contract_bridged_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridged_token::contract::execute,
        bridged_token::contract::instantiate,
        bridged_token::contract::query,
    )
    .with_reply(bridged_token::contract::reply)
    .with_migrate(bridged_token::contract::migrate);
    Box::new(contract)
}

pub fn contract_address_manager() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        address_manager::execute,
        address_manager::instantiate,
        address_manager::query,
    );
    Box::new(contract)
}

pub fn contract_pause_authority() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        pause_authority::execute,
        pause_authority::instantiate,
        pause_authority::query,
    );
    Box::new(contract)
}

pub fn contract_receiver() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(receiver::execute, receiver::instantiate, receiver::query)
        .with_reply(receiver::reply);
    Box::new(contract)
}

// ============================================================================
// Address Manager
// ============================================================================

pub mod address_manager {
    use common::{AddressManagerQueryMsg, ResolveResponse};
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    };
    use cw_storage_plus::Map;

    const ADDRESSES: Map<(u64, &str), Addr> = Map::new("addresses");

    #[cw_serde]
    pub struct InstantiateMsg {}

    #[cw_serde]
    pub enum ExecuteMsg {
        SetAddress {
            chain_id: u64,
            name: String,
            address: String,
        },
    }

    pub fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::SetAddress {
                chain_id,
                name,
                address,
            } => {
                let address = deps.api.addr_validate(&address)?;
                ADDRESSES.save(deps.storage, (chain_id, name.as_str()), &address)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: AddressManagerQueryMsg) -> StdResult<Binary> {
        match msg {
            AddressManagerQueryMsg::Resolve { chain_id, name } => {
                let address = ADDRESSES.may_load(deps.storage, (chain_id, name.as_str()))?;
                to_json_binary(&ResolveResponse { address })
            }
        }
    }
}

// ============================================================================
// Pause Authority
// ============================================================================

pub mod pause_authority {
    use common::{IsPausedResponse, PauseAuthorityQueryMsg};
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    };
    use cw_storage_plus::Item;

    const PAUSED: Item<bool> = Item::new("paused");

    #[cw_serde]
    pub struct InstantiateMsg {}

    #[cw_serde]
    pub enum ExecuteMsg {
        SetPaused { paused: bool },
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        PAUSED.save(deps.storage, &false)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::SetPaused { paused } => {
                PAUSED.save(deps.storage, &paused)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: PauseAuthorityQueryMsg) -> StdResult<Binary> {
        match msg {
            PauseAuthorityQueryMsg::IsPaused {} => to_json_binary(&IsPausedResponse {
                paused: PAUSED.load(deps.storage)?,
            }),
        }
    }
}

// ============================================================================
// CW20 Receiver
// ============================================================================

pub mod receiver {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
        StdError, StdResult, SubMsg, SubMsgResult, Uint128, WasmMsg,
    };
    use cw20::Cw20ReceiveMsg;
    use cw_storage_plus::Item;

    const REENTER_REPLY_ID: u64 = 7;

    const RECEIVED: Item<Uint128> = Item::new("received");
    const NESTED_ERROR: Item<String> = Item::new("nested_error");

    #[cw_serde]
    pub struct InstantiateMsg {}

    #[cw_serde]
    pub enum ExecuteMsg {
        Receive(Cw20ReceiveMsg),
    }

    /// Payload carried in `Cw20ReceiveMsg::msg`
    #[cw_serde]
    pub enum HookMsg {
        Accept {},
        Reject {},
        /// Call back into the token with a Transfer before returning
        ReenterTransfer { recipient: String, amount: Uint128 },
        /// Call back into the token with a Mint before returning
        ReenterMint { recipient: String, amount: Uint128 },
    }

    #[cw_serde]
    pub enum QueryMsg {
        State {},
    }

    #[cw_serde]
    pub struct StateResponse {
        pub received: Uint128,
        pub nested_error: Option<String>,
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        RECEIVED.save(deps.storage, &Uint128::zero())?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        let ExecuteMsg::Receive(receive) = msg;
        RECEIVED.update(deps.storage, |r| -> StdResult<_> { Ok(r + receive.amount) })?;

        let nested = match from_json::<HookMsg>(&receive.msg)? {
            HookMsg::Accept {} => return Ok(Response::new()),
            HookMsg::Reject {} => return Err(StdError::generic_err("receiver rejected tokens")),
            HookMsg::ReenterTransfer { recipient, amount } => {
                bridged_token::msg::ExecuteMsg::Transfer { recipient, amount }
            }
            HookMsg::ReenterMint { recipient, amount } => {
                bridged_token::msg::ExecuteMsg::Mint { recipient, amount }
            }
        };

        let call = WasmMsg::Execute {
            contract_addr: info.sender.to_string(),
            msg: to_json_binary(&nested)?,
            funds: vec![],
        };
        Ok(Response::new().add_submessage(SubMsg::reply_on_error(call, REENTER_REPLY_ID)))
    }

    pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> StdResult<Response> {
        if let SubMsgResult::Err(err) = msg.result {
            NESTED_ERROR.save(deps.storage, &err)?;
        }
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::State {} => to_json_binary(&StateResponse {
                received: RECEIVED.load(deps.storage)?,
                nested_error: NESTED_ERROR.may_load(deps.storage)?,
            }),
        }
    }
}
