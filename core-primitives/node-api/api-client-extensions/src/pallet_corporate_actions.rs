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

//! Extension traits for the three corporate-action pallets: `CorporateAction`
//! itself plus the `CorporateBallot` and `CapitalDistribution` attachments.

use crate::ApiResult;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	corporate_actions::{
		BallotMeta, BallotTimeRange, BallotVote, CAId, CorporateAction, Distribution, LocalCAId,
		TargetIdentities, Tax,
	},
	AssetId, DocumentId, IdentityId,
};

pub const CORPORATE_ACTION: &str = "CorporateAction";
pub const CORPORATE_BALLOT: &str = "CorporateBallot";
pub const CAPITAL_DISTRIBUTION: &str = "CapitalDistribution";

/// ApiClient extension for the `CorporateAction` pallet storage queries.
pub trait PalletCorporateActionsApi {
	type Hash;

	fn corporate_actions(
		&self,
		asset_id: &AssetId,
		local_id: &LocalCAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CorporateAction>>;
	fn ca_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<LocalCAId>;
	fn ca_doc_link(&self, ca_id: &CAId, at_block: Option<Self::Hash>)
		-> ApiResult<Vec<DocumentId>>;
	fn details(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Vec<u8>>;
	fn default_target_identities(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<TargetIdentities>;
	fn default_withholding_tax(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Tax>;
	fn did_withholding_tax(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(IdentityId, Tax)>>;
	fn max_details_length(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletCorporateActionsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn corporate_actions(
		&self,
		asset_id: &AssetId,
		local_id: &LocalCAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CorporateAction>> {
		self.get_storage_double_map(CORPORATE_ACTION, "CorporateActions", asset_id, local_id, at_block)
	}

	fn ca_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<LocalCAId> {
		Ok(self
			.get_storage_map(CORPORATE_ACTION, "CAIdSequence", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn ca_doc_link(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<DocumentId>> {
		Ok(self
			.get_storage_map(CORPORATE_ACTION, "CADocLink", ca_id, at_block)?
			.unwrap_or_default())
	}

	fn details(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Vec<u8>> {
		Ok(self.get_storage_map(CORPORATE_ACTION, "Details", ca_id, at_block)?.unwrap_or_default())
	}

	fn default_target_identities(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<TargetIdentities> {
		Ok(self
			.get_storage_map(CORPORATE_ACTION, "DefaultTargetIdentities", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn default_withholding_tax(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Tax> {
		Ok(self
			.get_storage_map(CORPORATE_ACTION, "DefaultWithholdingTax", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn did_withholding_tax(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(IdentityId, Tax)>> {
		Ok(self
			.get_storage_map(CORPORATE_ACTION, "DidWithholdingTax", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn max_details_length(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(CORPORATE_ACTION, "MaxDetailsLength", at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(CORPORATE_ACTION, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `CorporateBallot` pallet storage queries.
pub trait PalletCorporateBallotApi {
	type Hash;

	fn metas(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Option<BallotMeta>>;
	fn time_ranges(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BallotTimeRange>>;
	fn motion_num_choices(&self, ca_id: &CAId, at_block: Option<Self::Hash>)
		-> ApiResult<Vec<u16>>;
	fn rcv(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn results(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Vec<u128>>;
	fn votes(
		&self,
		ca_id: &CAId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<BallotVote>>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletCorporateBallotApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn metas(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Option<BallotMeta>> {
		self.get_storage_map(CORPORATE_BALLOT, "Metas", ca_id, at_block)
	}

	fn time_ranges(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BallotTimeRange>> {
		self.get_storage_map(CORPORATE_BALLOT, "TimeRanges", ca_id, at_block)
	}

	fn motion_num_choices(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<u16>> {
		Ok(self
			.get_storage_map(CORPORATE_BALLOT, "MotionNumChoices", ca_id, at_block)?
			.unwrap_or_default())
	}

	fn rcv(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_map(CORPORATE_BALLOT, "RCV", ca_id, at_block)?.unwrap_or_default())
	}

	fn results(&self, ca_id: &CAId, at_block: Option<Self::Hash>) -> ApiResult<Vec<u128>> {
		Ok(self.get_storage_map(CORPORATE_BALLOT, "Results", ca_id, at_block)?.unwrap_or_default())
	}

	fn votes(
		&self,
		ca_id: &CAId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<BallotVote>> {
		Ok(self
			.get_storage_double_map(CORPORATE_BALLOT, "Votes", ca_id, did, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(CORPORATE_BALLOT, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `CapitalDistribution` pallet storage queries.
pub trait PalletCapitalDistributionApi {
	type Hash;

	fn distributions(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Distribution>>;
	fn holder_paid(
		&self,
		ca_did: &(CAId, IdentityId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletCapitalDistributionApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn distributions(
		&self,
		ca_id: &CAId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Distribution>> {
		self.get_storage_map(CAPITAL_DISTRIBUTION, "Distributions", ca_id, at_block)
	}

	fn holder_paid(
		&self,
		ca_did: &(CAId, IdentityId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_map(CAPITAL_DISTRIBUTION, "HolderPaid", ca_did, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(CAPITAL_DISTRIBUTION, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}
