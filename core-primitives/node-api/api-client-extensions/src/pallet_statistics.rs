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
	statistics::{
		AssetTransferCompliance, Stat1stKey, Stat2ndKey, StatType, TransferConditionExemptKey,
	},
	AssetId, IdentityId,
};
use std::collections::BTreeSet;

pub const STATISTICS: &str = "Statistics";

/// ApiClient extension for the `Statistics` pallet storage queries.
pub trait PalletStatisticsApi {
	type Hash;

	fn active_asset_stats(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<StatType>>;
	fn asset_stats(
		&self,
		key1: &Stat1stKey,
		key2: &Stat2ndKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u128>;
	fn asset_transfer_compliances(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetTransferCompliance>;
	fn transfer_condition_exempt_entities(
		&self,
		exempt_key: &TransferConditionExemptKey,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletStatisticsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn active_asset_stats(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<StatType>> {
		Ok(self
			.get_storage_map(STATISTICS, "ActiveAssetStats", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn asset_stats(
		&self,
		key1: &Stat1stKey,
		key2: &Stat2ndKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u128> {
		Ok(self
			.get_storage_double_map(STATISTICS, "AssetStats", key1, key2, at_block)?
			.unwrap_or_default())
	}

	fn asset_transfer_compliances(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetTransferCompliance> {
		Ok(self
			.get_storage_map(STATISTICS, "AssetTransferCompliances", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn transfer_condition_exempt_entities(
		&self,
		exempt_key: &TransferConditionExemptKey,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(
				STATISTICS,
				"TransferConditionExemptEntities",
				exempt_key,
				did,
				at_block,
			)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(STATISTICS, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
