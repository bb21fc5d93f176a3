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
	compliance::{AssetCompliance, TrustedIssuer},
	AssetId,
};

pub const COMPLIANCE_MANAGER: &str = "ComplianceManager";

/// ApiClient extension for the `ComplianceManager` pallet storage queries.
pub trait PalletComplianceManagerApi {
	type Hash;

	fn asset_compliances(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetCompliance>;
	fn trusted_claim_issuer(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<TrustedIssuer>>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletComplianceManagerApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn asset_compliances(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetCompliance> {
		Ok(self
			.get_storage_map(COMPLIANCE_MANAGER, "AssetCompliances", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn trusted_claim_issuer(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<TrustedIssuer>> {
		Ok(self
			.get_storage_map(COMPLIANCE_MANAGER, "TrustedClaimIssuer", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(COMPLIANCE_MANAGER, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}
