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
use log::error;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	identity::{
		Authorization, Claim1stKey, Claim2ndKey, CustomClaimTypeId, CustomClaimTypeName,
		DidRecord, IdentityClaim, KeyRecord, Signatory,
	},
	secondary_key::{AssetPermissions, ExtrinsicPermissions, PortfolioPermissions},
	AccountId, IdentityId,
};

pub const IDENTITY: &str = "Identity";

/// ApiClient extension for the `Identity` pallet storage queries.
pub trait PalletIdentityApi {
	type Hash;

	fn did_records(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<DidRecord>>;
	fn key_records(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<KeyRecord>>;
	fn did_keys(
		&self,
		did: &IdentityId,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn is_did_frozen(&self, did: &IdentityId, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn claims(
		&self,
		claim1st: &Claim1stKey,
		claim2nd: &Claim2ndKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityClaim>>;
	fn authorizations(
		&self,
		target: &Signatory,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Authorization>>;
	fn authorizations_given(
		&self,
		authorizer: &IdentityId,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Signatory>;
	fn outdated_authorizations(
		&self,
		target: &Signatory,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u64>>;
	fn number_of_given_auths(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
	fn account_key_ref_count(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn key_asset_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetPermissions>>;
	fn key_extrinsic_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ExtrinsicPermissions>>;
	fn key_portfolio_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioPermissions>>;
	fn parent_did(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>>;
	fn child_did(
		&self,
		parent: &IdentityId,
		child: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn off_chain_authorization_nonce(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn custom_claims(
		&self,
		id: &CustomClaimTypeId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomClaimTypeName>>;
	fn custom_claims_inverse(
		&self,
		name: &CustomClaimTypeName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomClaimTypeId>>;
	fn custom_claim_id_sequence(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<CustomClaimTypeId>;
	/// Scans the `DidRecords` map. Truncated at 1000 entries.
	fn all_did_records(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<DidRecord>>;
	fn multi_purpose_nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn current_auth_id(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn current_payer(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>>;
	fn cdd_auth_for_primary_key_rotation(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletIdentityApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn did_records(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<DidRecord>> {
		self.get_storage_map(IDENTITY, "DidRecords", did, at_block)
	}

	fn key_records(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<KeyRecord>> {
		self.get_storage_map(IDENTITY, "KeyRecords", account, at_block)
	}

	fn did_keys(
		&self,
		did: &IdentityId,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(IDENTITY, "DidKeys", did, account, at_block)?
			.unwrap_or_default())
	}

	fn is_did_frozen(&self, did: &IdentityId, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_map(IDENTITY, "IsDidFrozen", did, at_block)?.unwrap_or_default())
	}

	fn claims(
		&self,
		claim1st: &Claim1stKey,
		claim2nd: &Claim2ndKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityClaim>> {
		self.get_storage_double_map(IDENTITY, "Claims", claim1st, claim2nd, at_block)
	}

	fn authorizations(
		&self,
		target: &Signatory,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Authorization>> {
		self.get_storage_double_map(IDENTITY, "Authorizations", target, auth_id, at_block)
	}

	fn authorizations_given(
		&self,
		authorizer: &IdentityId,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Signatory> {
		Ok(self
			.get_storage_double_map(IDENTITY, "AuthorizationsGiven", authorizer, auth_id, at_block)?
			.unwrap_or_default())
	}

	fn outdated_authorizations(
		&self,
		target: &Signatory,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u64>> {
		self.get_storage_map(IDENTITY, "OutdatedAuthorizations", target, at_block)
	}

	fn number_of_given_auths(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_map(IDENTITY, "NumberOfGivenAuths", did, at_block)?
			.unwrap_or_default())
	}

	fn account_key_ref_count(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(IDENTITY, "AccountKeyRefCount", account, at_block)?
			.unwrap_or_default())
	}

	fn key_asset_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AssetPermissions>> {
		self.get_storage_map(IDENTITY, "KeyAssetPermissions", account, at_block)
	}

	fn key_extrinsic_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ExtrinsicPermissions>> {
		self.get_storage_map(IDENTITY, "KeyExtrinsicPermissions", account, at_block)
	}

	fn key_portfolio_permissions(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioPermissions>> {
		self.get_storage_map(IDENTITY, "KeyPortfolioPermissions", account, at_block)
	}

	fn parent_did(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>> {
		self.get_storage_map(IDENTITY, "ParentDid", did, at_block)
	}

	fn child_did(
		&self,
		parent: &IdentityId,
		child: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(IDENTITY, "ChildDid", parent, child, at_block)?
			.unwrap_or_default())
	}

	fn off_chain_authorization_nonce(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(IDENTITY, "OffChainAuthorizationNonce", did, at_block)?
			.unwrap_or_default())
	}

	fn custom_claims(
		&self,
		id: &CustomClaimTypeId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomClaimTypeName>> {
		self.get_storage_map(IDENTITY, "CustomClaims", id, at_block)
	}

	fn custom_claims_inverse(
		&self,
		name: &CustomClaimTypeName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<CustomClaimTypeId>> {
		self.get_storage_map(IDENTITY, "CustomClaimsInverse", name, at_block)
	}

	fn custom_claim_id_sequence(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<CustomClaimTypeId> {
		Ok(self
			.get_storage_value(IDENTITY, "CustomClaimIdSequence", at_block)?
			.unwrap_or_default())
	}

	fn all_did_records(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<DidRecord>> {
		let key_prefix = self.get_storage_map_key_prefix(IDENTITY, "DidRecords")?;
		//fixme: solve this properly with infinite elements
		let max_keys = 1000;
		let storage_keys =
			self.get_storage_keys_paged(Some(key_prefix), max_keys, None, at_block.clone())?;

		if storage_keys.len() == max_keys as usize {
			error!("results can be wrong because max keys reached for query")
		}
		let records = storage_keys
			.iter()
			.filter_map(|key| self.get_storage_by_key(key.clone(), at_block.clone()).ok()?)
			.collect();
		Ok(records)
	}

	fn multi_purpose_nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_value(IDENTITY, "MultiPurposeNonce", at_block)?.unwrap_or_default())
	}

	fn current_auth_id(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_value(IDENTITY, "CurrentAuthId", at_block)?.unwrap_or_default())
	}

	fn current_payer(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>> {
		self.get_storage_value(IDENTITY, "CurrentPayer", at_block)
	}

	fn cdd_auth_for_primary_key_rotation(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self
			.get_storage_value(IDENTITY, "CddAuthForPrimaryKeyRotation", at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(IDENTITY, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
