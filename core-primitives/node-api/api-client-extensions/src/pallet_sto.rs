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
	sto::{Fundraiser, FundraiserId, FundraiserName},
	AssetId,
};

pub const STO: &str = "Sto";

/// ApiClient extension for the `Sto` pallet storage queries.
pub trait PalletStoApi {
	type Hash;

	fn fundraisers(
		&self,
		asset_id: &AssetId,
		fundraiser_id: &FundraiserId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Fundraiser>>;
	fn fundraiser_count(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<FundraiserId>;
	fn fundraiser_names(
		&self,
		asset_id: &AssetId,
		fundraiser_id: &FundraiserId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<FundraiserName>>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletStoApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn fundraisers(
		&self,
		asset_id: &AssetId,
		fundraiser_id: &FundraiserId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Fundraiser>> {
		self.get_storage_double_map(STO, "Fundraisers", asset_id, fundraiser_id, at_block)
	}

	fn fundraiser_count(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<FundraiserId> {
		Ok(self.get_storage_map(STO, "FundraiserCount", asset_id, at_block)?.unwrap_or_default())
	}

	fn fundraiser_names(
		&self,
		asset_id: &AssetId,
		fundraiser_id: &FundraiserId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<FundraiserName>> {
		self.get_storage_double_map(STO, "FundraiserNames", asset_id, fundraiser_id, at_block)
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(STO, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
