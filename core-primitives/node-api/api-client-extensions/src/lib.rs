/*
	Copyright 2023 Polymesh Association

	Licensed under the Apache License, Version 2.0 (the "License");
	you may not use this file except in compliance with the License.
	You may obtain a copy of the License at

		http://www.apache.org/licenses/LICENSE-2.0

	Unless required by applicable law or agreed to in writing, software
	distributed under the License is distributed on an "AS IS" BASIS,
	WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
	See the License for the specific language governing permissions and
	limitations under the License.

*/

//! Substrate-api-client extension traits: one trait per pallet, one method
//! per storage item. The traits are blanket-implemented for any `Api` whose
//! client can issue state queries, so the whole query surface of the chain
//! is available on a connected api instance.
//!
//! The pallet traits are deliberately not glob re-exported; several pallets
//! share item names (`storage_version`, `frozen`, `proposals`, ..) and
//! callers should import the traits they query through.

pub use pcp_api_client_types::{Api, ApiClientError, ParentchainApi};

pub mod account;
pub mod chain;
pub mod pallet_asset;
pub mod pallet_babe;
pub mod pallet_balances;
pub mod pallet_bridge;
pub mod pallet_checkpoint;
pub mod pallet_committee;
pub mod pallet_compliance_manager;
pub mod pallet_contracts;
pub mod pallet_corporate_actions;
pub mod pallet_external_agents;
pub mod pallet_grandpa;
pub mod pallet_group;
pub mod pallet_identity;
pub mod pallet_misc;
pub mod pallet_multisig;
pub mod pallet_nft;
pub mod pallet_pips;
pub mod pallet_polymesh_contracts;
pub mod pallet_portfolio;
pub mod pallet_protocol_fee;
pub mod pallet_relayer;
pub mod pallet_session;
pub mod pallet_settlement;
pub mod pallet_staking;
pub mod pallet_statistics;
pub mod pallet_sto;
pub mod pallet_system;

#[cfg(feature = "mocks")]
pub mod pallet_settlement_api_mock;

pub use account::*;
pub use chain::*;

pub type ApiResult<T> = Result<T, ApiClientError>;
