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
use pcp_types::{bridge::BridgeTxDetail, AccountId, Balance, BlockNumber, IdentityId};

pub const BRIDGE: &str = "Bridge";

/// ApiClient extension for the `Bridge` pallet storage queries.
pub trait PalletBridgeApi {
	type Hash;

	fn controller(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>>;
	fn admin(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>>;
	fn timelock(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber>;
	fn frozen(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn freeze_admins(&self, account: &AccountId, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn bridge_tx_details(
		&self,
		handler: &AccountId,
		nonce: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BridgeTxDetail>;
	fn bridge_limit(&self, at_block: Option<Self::Hash>) -> ApiResult<(Balance, BlockNumber)>;
	fn polyx_bridged(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<(Balance, BlockNumber)>;
	fn bridge_limit_exempted(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletBridgeApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn controller(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>> {
		self.get_storage_value(BRIDGE, "Controller", at_block)
	}

	fn admin(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>> {
		self.get_storage_value(BRIDGE, "Admin", at_block)
	}

	fn timelock(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber> {
		Ok(self.get_storage_value(BRIDGE, "Timelock", at_block)?.unwrap_or_default())
	}

	fn frozen(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_value(BRIDGE, "Frozen", at_block)?.unwrap_or_default())
	}

	fn freeze_admins(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self.get_storage_map(BRIDGE, "FreezeAdmins", account, at_block)?.unwrap_or_default())
	}

	fn bridge_tx_details(
		&self,
		handler: &AccountId,
		nonce: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BridgeTxDetail> {
		Ok(self
			.get_storage_double_map(BRIDGE, "BridgeTxDetails", handler, nonce, at_block)?
			.unwrap_or_default())
	}

	fn bridge_limit(&self, at_block: Option<Self::Hash>) -> ApiResult<(Balance, BlockNumber)> {
		Ok(self.get_storage_value(BRIDGE, "BridgeLimit", at_block)?.unwrap_or_default())
	}

	fn polyx_bridged(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<(Balance, BlockNumber)> {
		Ok(self.get_storage_map(BRIDGE, "PolyxBridged", did, at_block)?.unwrap_or_default())
	}

	fn bridge_limit_exempted(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_map(BRIDGE, "BridgeLimitExempted", did, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(BRIDGE, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
