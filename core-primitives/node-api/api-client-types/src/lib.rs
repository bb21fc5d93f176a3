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

//! Contains semi-generic type definitions to talk to the node, without
//! depending on an implementation of the runtime.
//!
//! You need to update this if your chain uses a different signed extra, e.g.
//! the `pallet_asset_tx_payment` tipping variant.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pcp_types::{AccountData, AccountId, Balance, BlockNumber, Hash, Header, Index};

pub use substrate_api_client::{
	ac_node_api::{EventDetails, Metadata, StaticEvent},
	ac_primitives::{
		Config, DefaultRuntimeConfig, ExtrinsicSigner as GenericExtrinsicSigner, PlainTip,
		SignExtrinsic, StorageKey,
	},
	rpc::Request,
	Api,
};

/// Configuration matching the chain: plain-tip fees, u128 balances, sr25519
/// signatures, blake2 hashing.
pub type ParentchainRuntimeConfig = DefaultRuntimeConfig;

pub type ParentchainExtrinsicSigner = GenericExtrinsicSigner<ParentchainRuntimeConfig>;

/// How extrinsic signers are addressed on this chain.
pub type Address = <ParentchainRuntimeConfig as Config>::Address;

pub mod traits {
	pub use substrate_api_client::{
		GetAccountInformation, GetBalance, GetChainInfo, GetStorage, GetTransactionPayment,
	};
}

#[cfg(feature = "std")]
pub use api::*;

#[cfg(feature = "std")]
mod api {
	use super::ParentchainRuntimeConfig;

	pub use substrate_api_client::{
		api::Error as ApiClientError,
		rpc::{tungstenite_client::TungsteniteRpcClient, Error as RpcClientError},
	};

	pub type ParentchainApi = substrate_api_client::Api<ParentchainRuntimeConfig, TungsteniteRpcClient>;
}
