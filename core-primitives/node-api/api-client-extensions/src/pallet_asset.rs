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
	asset::{
		AssetDetails, AssetIdentifier, AssetMetadataGlobalKey, AssetMetadataKey,
		AssetMetadataLocalKey, AssetMetadataName, AssetMetadataSpec, AssetMetadataValue,
		AssetMetadataValueDetail, AssetName, CustomAssetTypeId, Document, FundingRoundName,
		TickerRegistration, TickerRegistrationConfig,
	},
	AccountId, AssetId, Balance, DocumentId, IdentityId, Ticker,
};
use std::collections::BTreeSet;

pub const ASSET: &str = "Asset";

/// ApiClient extension for the `Asset` pallet storage queries.
pub trait PalletAssetApi {
	type Hash;

	fn assets(&self, asset_id: &AssetId, at_block: Option<Self::Hash>)
		-> ApiResult<Option<AssetDetails>>;
	fn asset_names(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetName>>;
	fn balance_of(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn asset_identifiers(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<AssetIdentifier>>;
	fn frozen(&self, asset_id: &AssetId, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn funding_round(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<FundingRoundName>;
	fn issued_in_funding_round(
		&self,
		round: &(AssetId, FundingRoundName),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn asset_nonce(&self, account: &AccountId, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn asset_documents(
		&self,
		asset_id: &AssetId,
		doc_id: &DocumentId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Document>>;
	fn asset_documents_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<DocumentId>;
	fn unique_ticker_registration(
		&self,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<TickerRegistration>>;
	fn ticker_config(&self, at_block: Option<Self::Hash>) -> ApiResult<TickerRegistrationConfig>;
	fn ticker_asset_id(
		&self,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetId>>;
	fn asset_id_ticker(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Ticker>>;
	fn tickers_owned_by_user(
		&self,
		did: &IdentityId,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn security_tokens_owned_by_user(
		&self,
		did: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn custom_types(
		&self,
		id: &CustomAssetTypeId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<u8>>;
	fn custom_types_inverse(
		&self,
		contents: &Vec<u8>,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomAssetTypeId>>;
	fn custom_type_id_sequence(&self, at_block: Option<Self::Hash>)
		-> ApiResult<CustomAssetTypeId>;
	fn asset_metadata_values(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataValue>>;
	fn asset_metadata_value_details(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataValueDetail>>;
	fn asset_metadata_local_name_to_key(
		&self,
		asset_id: &AssetId,
		name: &AssetMetadataName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataLocalKey>>;
	fn asset_metadata_global_name_to_key(
		&self,
		name: &AssetMetadataName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataGlobalKey>>;
	fn asset_metadata_local_key_to_name(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataLocalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataName>>;
	fn asset_metadata_global_key_to_name(
		&self,
		key: &AssetMetadataGlobalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataName>>;
	fn asset_metadata_local_specs(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataLocalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataSpec>>;
	fn asset_metadata_global_specs(
		&self,
		key: &AssetMetadataGlobalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataSpec>>;
	fn asset_metadata_next_global_key(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataGlobalKey>;
	fn asset_metadata_next_local_key(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataLocalKey>;
	fn current_asset_metadata_global_key(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataGlobalKey>>;
	fn current_asset_metadata_local_key(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataLocalKey>>;
	fn assets_exempt_from_affirmation(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn pre_approved_asset(
		&self,
		did: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn mandatory_mediators(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<IdentityId>>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletAssetApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn assets(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetDetails>> {
		self.get_storage_map(ASSET, "Assets", asset_id, at_block)
	}

	fn asset_names(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetName>> {
		self.get_storage_map(ASSET, "AssetNames", asset_id, at_block)
	}

	fn balance_of(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_double_map(ASSET, "BalanceOf", asset_id, did, at_block)?
			.unwrap_or_default())
	}

	fn asset_identifiers(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<AssetIdentifier>> {
		Ok(self
			.get_storage_map(ASSET, "AssetIdentifiers", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn frozen(&self, asset_id: &AssetId, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_map(ASSET, "Frozen", asset_id, at_block)?.unwrap_or_default())
	}

	fn funding_round(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<FundingRoundName> {
		Ok(self.get_storage_map(ASSET, "FundingRound", asset_id, at_block)?.unwrap_or_default())
	}

	fn issued_in_funding_round(
		&self,
		round: &(AssetId, FundingRoundName),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_map(ASSET, "IssuedInFundingRound", round, at_block)?
			.unwrap_or_default())
	}

	fn asset_nonce(&self, account: &AccountId, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_map(ASSET, "AssetNonce", account, at_block)?.unwrap_or_default())
	}

	fn asset_documents(
		&self,
		asset_id: &AssetId,
		doc_id: &DocumentId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Document>> {
		self.get_storage_double_map(ASSET, "AssetDocuments", asset_id, doc_id, at_block)
	}

	fn asset_documents_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<DocumentId> {
		Ok(self
			.get_storage_map(ASSET, "AssetDocumentsIdSequence", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn unique_ticker_registration(
		&self,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<TickerRegistration>> {
		self.get_storage_map(ASSET, "UniqueTickerRegistration", ticker, at_block)
	}

	fn ticker_config(&self, at_block: Option<Self::Hash>) -> ApiResult<TickerRegistrationConfig> {
		Ok(self.get_storage_value(ASSET, "TickerConfig", at_block)?.unwrap_or_default())
	}

	fn ticker_asset_id(
		&self,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetId>> {
		self.get_storage_map(ASSET, "TickerAssetID", ticker, at_block)
	}

	fn asset_id_ticker(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Ticker>> {
		self.get_storage_map(ASSET, "AssetIDTicker", asset_id, at_block)
	}

	fn tickers_owned_by_user(
		&self,
		did: &IdentityId,
		ticker: &Ticker,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(ASSET, "TickersOwnedByUser", did, ticker, at_block)?
			.unwrap_or_default())
	}

	fn security_tokens_owned_by_user(
		&self,
		did: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(ASSET, "SecurityTokensOwnedByUser", did, asset_id, at_block)?
			.unwrap_or_default())
	}

	fn custom_types(
		&self,
		id: &CustomAssetTypeId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<u8>> {
		Ok(self.get_storage_map(ASSET, "CustomTypes", id, at_block)?.unwrap_or_default())
	}

	fn custom_types_inverse(
		&self,
		contents: &Vec<u8>,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomAssetTypeId>> {
		self.get_storage_map(ASSET, "CustomTypesInverse", contents, at_block)
	}

	fn custom_type_id_sequence(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<CustomAssetTypeId> {
		Ok(self.get_storage_value(ASSET, "CustomTypeIdSequence", at_block)?.unwrap_or_default())
	}

	fn asset_metadata_values(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataValue>> {
		self.get_storage_double_map(ASSET, "AssetMetadataValues", asset_id, key, at_block)
	}

	fn asset_metadata_value_details(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataValueDetail>> {
		self.get_storage_double_map(ASSET, "AssetMetadataValueDetails", asset_id, key, at_block)
	}

	fn asset_metadata_local_name_to_key(
		&self,
		asset_id: &AssetId,
		name: &AssetMetadataName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataLocalKey>> {
		self.get_storage_double_map(ASSET, "AssetMetadataLocalNameToKey", asset_id, name, at_block)
	}

	fn asset_metadata_global_name_to_key(
		&self,
		name: &AssetMetadataName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataGlobalKey>> {
		self.get_storage_map(ASSET, "AssetMetadataGlobalNameToKey", name, at_block)
	}

	fn asset_metadata_local_key_to_name(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataLocalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataName>> {
		self.get_storage_double_map(ASSET, "AssetMetadataLocalKeyToName", asset_id, key, at_block)
	}

	fn asset_metadata_global_key_to_name(
		&self,
		key: &AssetMetadataGlobalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataName>> {
		self.get_storage_map(ASSET, "AssetMetadataGlobalKeyToName", key, at_block)
	}

	fn asset_metadata_local_specs(
		&self,
		asset_id: &AssetId,
		key: &AssetMetadataLocalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataSpec>> {
		self.get_storage_double_map(ASSET, "AssetMetadataLocalSpecs", asset_id, key, at_block)
	}

	fn asset_metadata_global_specs(
		&self,
		key: &AssetMetadataGlobalKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataSpec>> {
		self.get_storage_map(ASSET, "AssetMetadataGlobalSpecs", key, at_block)
	}

	fn asset_metadata_next_global_key(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataGlobalKey> {
		Ok(self
			.get_storage_value(ASSET, "AssetMetadataNextGlobalKey", at_block)?
			.unwrap_or_default())
	}

	fn asset_metadata_next_local_key(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataLocalKey> {
		Ok(self
			.get_storage_map(ASSET, "AssetMetadataNextLocalKey", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn current_asset_metadata_global_key(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataGlobalKey>> {
		self.get_storage_value(ASSET, "CurrentAssetMetadataGlobalKey", at_block)
	}

	fn current_asset_metadata_local_key(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetMetadataLocalKey>> {
		self.get_storage_map(ASSET, "CurrentAssetMetadataLocalKey", asset_id, at_block)
	}

	fn assets_exempt_from_affirmation(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_map(ASSET, "AssetsExemptFromAffirmation", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn pre_approved_asset(
		&self,
		did: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(ASSET, "PreApprovedAsset", did, asset_id, at_block)?
			.unwrap_or_default())
	}

	fn mandatory_mediators(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<IdentityId>> {
		Ok(self
			.get_storage_map(ASSET, "MandatoryMediators", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(ASSET, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
