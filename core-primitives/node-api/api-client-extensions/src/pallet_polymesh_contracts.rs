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

use crate::ApiResult;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::contracts::{Api as ChainExtensionApi, ApiCodeHash, ExtrinsicId, NextUpgrade};

pub const POLYMESH_CONTRACTS: &str = "PolymeshContracts";

/// ApiClient extension for the `PolymeshContracts` pallet storage queries.
pub trait PalletPolymeshContractsApi {
	type Hash;

	fn call_runtime_whitelist(
		&self,
		extrinsic: &ExtrinsicId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn current_api_hash(
		&self,
		api: &ChainExtensionApi,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ApiCodeHash>>;
	fn api_next_upgrade(
		&self,
		api: &ChainExtensionApi,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextUpgrade>>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletPolymeshContractsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn call_runtime_whitelist(
		&self,
		extrinsic: &ExtrinsicId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_map(POLYMESH_CONTRACTS, "CallRuntimeWhitelist", extrinsic, at_block)?
			.unwrap_or_default())
	}

	fn current_api_hash(
		&self,
		api: &ChainExtensionApi,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ApiCodeHash>> {
		self.get_storage_map(POLYMESH_CONTRACTS, "CurrentApiHash", api, at_block)
	}

	fn api_next_upgrade(
		&self,
		api: &ChainExtensionApi,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextUpgrade>> {
		self.get_storage_map(POLYMESH_CONTRACTS, "ApiNextUpgrade", api, at_block)
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(POLYMESH_CONTRACTS, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}
