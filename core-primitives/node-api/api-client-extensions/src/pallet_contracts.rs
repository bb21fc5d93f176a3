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
use pcp_types::{
	contracts::{ContractInfo, DeletedContract, OwnerInfo, PrefabWasmModule},
	AccountId, Hash,
};

pub const CONTRACTS: &str = "Contracts";

/// ApiClient extension for the `Contracts` pallet storage queries.
pub trait PalletContractsApi {
	type Hash;

	fn pristine_code(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>>;
	fn code_storage(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PrefabWasmModule>>;
	fn owner_info_of(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<OwnerInfo>>;
	fn nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn contract_info_of(
		&self,
		contract: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ContractInfo>>;
	fn deletion_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<DeletedContract>>;
}

impl<RuntimeConfig, Client> PalletContractsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn pristine_code(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>> {
		self.get_storage_map(CONTRACTS, "PristineCode", code_hash, at_block)
	}

	fn code_storage(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PrefabWasmModule>> {
		self.get_storage_map(CONTRACTS, "CodeStorage", code_hash, at_block)
	}

	fn owner_info_of(
		&self,
		code_hash: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<OwnerInfo>> {
		self.get_storage_map(CONTRACTS, "OwnerInfoOf", code_hash, at_block)
	}

	fn nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_value(CONTRACTS, "Nonce", at_block)?.unwrap_or_default())
	}

	fn contract_info_of(
		&self,
		contract: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ContractInfo>> {
		self.get_storage_map(CONTRACTS, "ContractInfoOf", contract, at_block)
	}

	fn deletion_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<DeletedContract>> {
		Ok(self.get_storage_value(CONTRACTS, "DeletionQueue", at_block)?.unwrap_or_default())
	}
}
