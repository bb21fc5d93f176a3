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

//! Raw storage keys for the pallets whose state gets read through storage
//! proofs, one trait per pallet. Hashers mirror the pallets' storage
//! declarations, so a wrong hasher here means a key that reads as empty.

#![cfg_attr(not(feature = "std"), no_std)]

use pcp_storage::{storage_double_map_key, storage_map_key, storage_value_key, StorageHasher};
use pcp_types::{
	agents::AGId,
	asset::{
		AssetMetadataGlobalKey, AssetMetadataKey, AssetMetadataLocalKey, CustomAssetTypeId,
		FundingRoundName,
	},
	checkpoint::{CheckpointId, ScheduleId},
	identity::{Claim1stKey, Claim2ndKey, CustomClaimTypeId, Signatory},
	nft::{NFTCollectionId, NFTId},
	portfolio::{PortfolioId, PortfolioName, PortfolioNumber},
	settlement::{InstructionId, LegId, VenueId},
	AccountId, AssetId, BlockNumber, DocumentId, Hash, IdentityId, Ticker,
};
use sp_std::prelude::Vec;

// Separate the prefix from the key set so that a renamed deployment of the
// same pallet only needs another `StoragePrefix` struct; the `*StorageKeys`
// implementation comes for free. The committee and group instances below rely
// on exactly that.
pub trait StoragePrefix {
	fn prefix() -> &'static str;
}

fn version_key<S: StoragePrefix>() -> Vec<u8> {
	storage_value_key(S::prefix(), "StorageVersion")
}

pub struct SystemStorage;

impl StoragePrefix for SystemStorage {
	fn prefix() -> &'static str {
		"System"
	}
}

pub trait SystemStorageKeys {
	/// Account information (nonce, refcounts, balance data) per account key.
	fn account(account: &AccountId) -> Vec<u8>;
	fn block_hash(number: &BlockNumber) -> Vec<u8>;
	fn extrinsic_data(index: &u32) -> Vec<u8>;
	fn event_topics(topic: &Hash) -> Vec<u8>;
	fn events() -> Vec<u8>;
	fn event_count() -> Vec<u8>;
	fn number() -> Vec<u8>;
	fn parent_hash() -> Vec<u8>;
}

impl<S: StoragePrefix> SystemStorageKeys for S {
	fn account(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Account", account, &StorageHasher::Blake2_128Concat)
	}

	fn block_hash(number: &BlockNumber) -> Vec<u8> {
		storage_map_key(Self::prefix(), "BlockHash", number, &StorageHasher::Twox64Concat)
	}

	fn extrinsic_data(index: &u32) -> Vec<u8> {
		storage_map_key(Self::prefix(), "ExtrinsicData", index, &StorageHasher::Twox64Concat)
	}

	fn event_topics(topic: &Hash) -> Vec<u8> {
		storage_map_key(Self::prefix(), "EventTopics", topic, &StorageHasher::Blake2_128Concat)
	}

	fn events() -> Vec<u8> {
		storage_value_key(Self::prefix(), "Events")
	}

	fn event_count() -> Vec<u8> {
		storage_value_key(Self::prefix(), "EventCount")
	}

	fn number() -> Vec<u8> {
		storage_value_key(Self::prefix(), "Number")
	}

	fn parent_hash() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ParentHash")
	}
}

pub struct BalancesStorage;

impl StoragePrefix for BalancesStorage {
	fn prefix() -> &'static str {
		"Balances"
	}
}

pub trait BalancesStorageKeys {
	fn total_issuance() -> Vec<u8>;
	fn locks(account: &AccountId) -> Vec<u8>;
}

impl<S: StoragePrefix> BalancesStorageKeys for S {
	fn total_issuance() -> Vec<u8> {
		storage_value_key(Self::prefix(), "TotalIssuance")
	}

	fn locks(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Locks", account, &StorageHasher::Blake2_128Concat)
	}
}

pub struct IdentityStorage;

impl StoragePrefix for IdentityStorage {
	fn prefix() -> &'static str {
		"Identity"
	}
}

pub trait IdentityStorageKeys {
	fn did_records(did: &IdentityId) -> Vec<u8>;
	fn key_records(account: &AccountId) -> Vec<u8>;
	fn did_keys(did: &IdentityId, account: &AccountId) -> Vec<u8>;
	fn is_did_frozen(did: &IdentityId) -> Vec<u8>;
	fn claims(claim1st: &Claim1stKey, claim2nd: &Claim2ndKey) -> Vec<u8>;
	fn authorizations(target: &Signatory, auth_id: &u64) -> Vec<u8>;
	fn authorizations_given(authorizer: &IdentityId, auth_id: &u64) -> Vec<u8>;
	fn outdated_authorizations(target: &Signatory) -> Vec<u8>;
	fn number_of_given_auths(did: &IdentityId) -> Vec<u8>;
	fn account_key_ref_count(account: &AccountId) -> Vec<u8>;
	fn key_asset_permissions(account: &AccountId) -> Vec<u8>;
	fn key_extrinsic_permissions(account: &AccountId) -> Vec<u8>;
	fn key_portfolio_permissions(account: &AccountId) -> Vec<u8>;
	fn parent_did(did: &IdentityId) -> Vec<u8>;
	fn child_did(parent: &IdentityId, child: &IdentityId) -> Vec<u8>;
	fn off_chain_authorization_nonce(did: &IdentityId) -> Vec<u8>;
	fn custom_claims(id: &CustomClaimTypeId) -> Vec<u8>;
	fn custom_claims_inverse(name: &Vec<u8>) -> Vec<u8>;
	fn custom_claim_id_sequence() -> Vec<u8>;
	fn multi_purpose_nonce() -> Vec<u8>;
	fn current_auth_id() -> Vec<u8>;
	fn current_payer() -> Vec<u8>;
	fn cdd_auth_for_primary_key_rotation() -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> IdentityStorageKeys for S {
	fn did_records(did: &IdentityId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "DidRecords", did, &StorageHasher::Twox64Concat)
	}

	fn key_records(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "KeyRecords", account, &StorageHasher::Twox64Concat)
	}

	fn did_keys(did: &IdentityId, account: &AccountId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"DidKeys",
			did,
			&StorageHasher::Twox64Concat,
			account,
			&StorageHasher::Twox64Concat,
		)
	}

	fn is_did_frozen(did: &IdentityId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "IsDidFrozen", did, &StorageHasher::Twox64Concat)
	}

	fn claims(claim1st: &Claim1stKey, claim2nd: &Claim2ndKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Claims",
			claim1st,
			&StorageHasher::Twox64Concat,
			claim2nd,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn authorizations(target: &Signatory, auth_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Authorizations",
			target,
			&StorageHasher::Twox64Concat,
			auth_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn authorizations_given(authorizer: &IdentityId, auth_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AuthorizationsGiven",
			authorizer,
			&StorageHasher::Twox64Concat,
			auth_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn outdated_authorizations(target: &Signatory) -> Vec<u8> {
		storage_map_key(Self::prefix(), "OutdatedAuthorizations", target, &StorageHasher::Twox64Concat)
	}

	fn number_of_given_auths(did: &IdentityId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NumberOfGivenAuths", did, &StorageHasher::Twox64Concat)
	}

	fn account_key_ref_count(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AccountKeyRefCount", account, &StorageHasher::Twox64Concat)
	}

	fn key_asset_permissions(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "KeyAssetPermissions", account, &StorageHasher::Twox64Concat)
	}

	fn key_extrinsic_permissions(account: &AccountId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"KeyExtrinsicPermissions",
			account,
			&StorageHasher::Twox64Concat,
		)
	}

	fn key_portfolio_permissions(account: &AccountId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"KeyPortfolioPermissions",
			account,
			&StorageHasher::Twox64Concat,
		)
	}

	fn parent_did(did: &IdentityId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "ParentDid", did, &StorageHasher::Twox64Concat)
	}

	fn child_did(parent: &IdentityId, child: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ChildDid",
			parent,
			&StorageHasher::Twox64Concat,
			child,
			&StorageHasher::Twox64Concat,
		)
	}

	fn off_chain_authorization_nonce(did: &IdentityId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"OffChainAuthorizationNonce",
			did,
			&StorageHasher::Twox64Concat,
		)
	}

	fn custom_claims(id: &CustomClaimTypeId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CustomClaims", id, &StorageHasher::Twox64Concat)
	}

	fn custom_claims_inverse(name: &Vec<u8>) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CustomClaimsInverse", name, &StorageHasher::Blake2_128Concat)
	}

	fn custom_claim_id_sequence() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CustomClaimIdSequence")
	}

	fn multi_purpose_nonce() -> Vec<u8> {
		storage_value_key(Self::prefix(), "MultiPurposeNonce")
	}

	fn current_auth_id() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CurrentAuthId")
	}

	fn current_payer() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CurrentPayer")
	}

	fn cdd_auth_for_primary_key_rotation() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CddAuthForPrimaryKeyRotation")
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct AssetStorage;

impl StoragePrefix for AssetStorage {
	fn prefix() -> &'static str {
		"Asset"
	}
}

pub trait AssetStorageKeys {
	fn assets(asset_id: &AssetId) -> Vec<u8>;
	fn asset_names(asset_id: &AssetId) -> Vec<u8>;
	fn balance_of(asset_id: &AssetId, did: &IdentityId) -> Vec<u8>;
	fn asset_identifiers(asset_id: &AssetId) -> Vec<u8>;
	fn frozen(asset_id: &AssetId) -> Vec<u8>;
	fn funding_round(asset_id: &AssetId) -> Vec<u8>;
	fn issued_in_funding_round(key: &(AssetId, FundingRoundName)) -> Vec<u8>;
	fn asset_nonce(account: &AccountId) -> Vec<u8>;
	fn asset_documents(asset_id: &AssetId, doc_id: &DocumentId) -> Vec<u8>;
	fn asset_documents_id_sequence(asset_id: &AssetId) -> Vec<u8>;
	fn unique_ticker_registration(ticker: &Ticker) -> Vec<u8>;
	fn ticker_config() -> Vec<u8>;
	fn ticker_asset_id(ticker: &Ticker) -> Vec<u8>;
	fn asset_id_ticker(asset_id: &AssetId) -> Vec<u8>;
	fn tickers_owned_by_user(did: &IdentityId, ticker: &Ticker) -> Vec<u8>;
	fn security_tokens_owned_by_user(did: &IdentityId, asset_id: &AssetId) -> Vec<u8>;
	fn custom_types(id: &CustomAssetTypeId) -> Vec<u8>;
	fn custom_types_inverse(name: &Vec<u8>) -> Vec<u8>;
	fn custom_type_id_sequence() -> Vec<u8>;
	fn asset_metadata_values(asset_id: &AssetId, key: &AssetMetadataKey) -> Vec<u8>;
	fn asset_metadata_value_details(asset_id: &AssetId, key: &AssetMetadataKey) -> Vec<u8>;
	fn asset_metadata_local_name_to_key(asset_id: &AssetId, name: &Vec<u8>) -> Vec<u8>;
	fn asset_metadata_global_name_to_key(name: &Vec<u8>) -> Vec<u8>;
	fn asset_metadata_local_key_to_name(asset_id: &AssetId, key: &AssetMetadataLocalKey) -> Vec<u8>;
	fn asset_metadata_global_key_to_name(key: &AssetMetadataGlobalKey) -> Vec<u8>;
	fn asset_metadata_local_specs(asset_id: &AssetId, key: &AssetMetadataLocalKey) -> Vec<u8>;
	fn asset_metadata_global_specs(key: &AssetMetadataGlobalKey) -> Vec<u8>;
	fn asset_metadata_next_global_key() -> Vec<u8>;
	fn asset_metadata_next_local_key(asset_id: &AssetId) -> Vec<u8>;
	fn current_asset_metadata_global_key() -> Vec<u8>;
	fn current_asset_metadata_local_key(asset_id: &AssetId) -> Vec<u8>;
	fn assets_exempt_from_affirmation(asset_id: &AssetId) -> Vec<u8>;
	fn pre_approved_asset(did: &IdentityId, asset_id: &AssetId) -> Vec<u8>;
	fn mandatory_mediators(asset_id: &AssetId) -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> AssetStorageKeys for S {
	fn assets(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Assets", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn asset_names(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AssetNames", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn balance_of(asset_id: &AssetId, did: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"BalanceOf",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			did,
			&StorageHasher::Identity,
		)
	}

	fn asset_identifiers(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AssetIdentifiers", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn frozen(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Frozen", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn funding_round(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "FundingRound", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn issued_in_funding_round(key: &(AssetId, FundingRoundName)) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"IssuedInFundingRound",
			key,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn asset_nonce(account: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AssetNonce", account, &StorageHasher::Blake2_128Concat)
	}

	fn asset_documents(asset_id: &AssetId, doc_id: &DocumentId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetDocuments",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			doc_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn asset_documents_id_sequence(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetDocumentsIdSequence",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn unique_ticker_registration(ticker: &Ticker) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"UniqueTickerRegistration",
			ticker,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn ticker_config() -> Vec<u8> {
		storage_value_key(Self::prefix(), "TickerConfig")
	}

	fn ticker_asset_id(ticker: &Ticker) -> Vec<u8> {
		storage_map_key(Self::prefix(), "TickerAssetID", ticker, &StorageHasher::Blake2_128Concat)
	}

	fn asset_id_ticker(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AssetIDTicker", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn tickers_owned_by_user(did: &IdentityId, ticker: &Ticker) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"TickersOwnedByUser",
			did,
			&StorageHasher::Identity,
			ticker,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn security_tokens_owned_by_user(did: &IdentityId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"SecurityTokensOwnedByUser",
			did,
			&StorageHasher::Identity,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn custom_types(id: &CustomAssetTypeId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CustomTypes", id, &StorageHasher::Twox64Concat)
	}

	fn custom_types_inverse(name: &Vec<u8>) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CustomTypesInverse", name, &StorageHasher::Blake2_128Concat)
	}

	fn custom_type_id_sequence() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CustomTypeIdSequence")
	}

	fn asset_metadata_values(asset_id: &AssetId, key: &AssetMetadataKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetMetadataValues",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			key,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn asset_metadata_value_details(asset_id: &AssetId, key: &AssetMetadataKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetMetadataValueDetails",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			key,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn asset_metadata_local_name_to_key(asset_id: &AssetId, name: &Vec<u8>) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetMetadataLocalNameToKey",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			name,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn asset_metadata_global_name_to_key(name: &Vec<u8>) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetMetadataGlobalNameToKey",
			name,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn asset_metadata_local_key_to_name(asset_id: &AssetId, key: &AssetMetadataLocalKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetMetadataLocalKeyToName",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			key,
			&StorageHasher::Twox64Concat,
		)
	}

	fn asset_metadata_global_key_to_name(key: &AssetMetadataGlobalKey) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetMetadataGlobalKeyToName",
			key,
			&StorageHasher::Twox64Concat,
		)
	}

	fn asset_metadata_local_specs(asset_id: &AssetId, key: &AssetMetadataLocalKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AssetMetadataLocalSpecs",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			key,
			&StorageHasher::Twox64Concat,
		)
	}

	fn asset_metadata_global_specs(key: &AssetMetadataGlobalKey) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetMetadataGlobalSpecs",
			key,
			&StorageHasher::Twox64Concat,
		)
	}

	fn asset_metadata_next_global_key() -> Vec<u8> {
		storage_value_key(Self::prefix(), "AssetMetadataNextGlobalKey")
	}

	fn asset_metadata_next_local_key(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetMetadataNextLocalKey",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn current_asset_metadata_global_key() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CurrentAssetMetadataGlobalKey")
	}

	fn current_asset_metadata_local_key(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"CurrentAssetMetadataLocalKey",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn assets_exempt_from_affirmation(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"AssetsExemptFromAffirmation",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn pre_approved_asset(did: &IdentityId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PreApprovedAsset",
			did,
			&StorageHasher::Identity,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn mandatory_mediators(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"MandatoryMediators",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct PortfolioStorage;

impl StoragePrefix for PortfolioStorage {
	fn prefix() -> &'static str {
		"Portfolio"
	}
}

pub trait PortfolioStorageKeys {
	fn portfolios(did: &IdentityId, num: &PortfolioNumber) -> Vec<u8>;
	fn name_to_number(did: &IdentityId, name: &PortfolioName) -> Vec<u8>;
	fn next_portfolio_number(did: &IdentityId) -> Vec<u8>;
	fn portfolio_asset_balances(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8>;
	fn portfolio_locked_assets(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8>;
	fn portfolio_asset_count(portfolio: &PortfolioId) -> Vec<u8>;
	fn portfolio_custodian(portfolio: &PortfolioId) -> Vec<u8>;
	fn portfolios_in_custody(custodian: &IdentityId, portfolio: &PortfolioId) -> Vec<u8>;
	fn portfolio_nft(portfolio: &PortfolioId, nft: &(AssetId, NFTId)) -> Vec<u8>;
	fn portfolio_locked_nft(portfolio: &PortfolioId, nft: &(AssetId, NFTId)) -> Vec<u8>;
	fn pre_approved_portfolios(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8>;
	fn allowed_custodians(owner: &IdentityId, custodian: &IdentityId) -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> PortfolioStorageKeys for S {
	fn portfolios(did: &IdentityId, num: &PortfolioNumber) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Portfolios",
			did,
			&StorageHasher::Twox64Concat,
			num,
			&StorageHasher::Twox64Concat,
		)
	}

	fn name_to_number(did: &IdentityId, name: &PortfolioName) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"NameToNumber",
			did,
			&StorageHasher::Twox64Concat,
			name,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn next_portfolio_number(did: &IdentityId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NextPortfolioNumber", did, &StorageHasher::Twox64Concat)
	}

	fn portfolio_asset_balances(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PortfolioAssetBalances",
			portfolio,
			&StorageHasher::Twox64Concat,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn portfolio_locked_assets(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PortfolioLockedAssets",
			portfolio,
			&StorageHasher::Twox64Concat,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn portfolio_asset_count(portfolio: &PortfolioId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "PortfolioAssetCount", portfolio, &StorageHasher::Twox64Concat)
	}

	fn portfolio_custodian(portfolio: &PortfolioId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "PortfolioCustodian", portfolio, &StorageHasher::Twox64Concat)
	}

	fn portfolios_in_custody(custodian: &IdentityId, portfolio: &PortfolioId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PortfoliosInCustody",
			custodian,
			&StorageHasher::Twox64Concat,
			portfolio,
			&StorageHasher::Twox64Concat,
		)
	}

	fn portfolio_nft(portfolio: &PortfolioId, nft: &(AssetId, NFTId)) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PortfolioNFT",
			portfolio,
			&StorageHasher::Twox64Concat,
			nft,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn portfolio_locked_nft(portfolio: &PortfolioId, nft: &(AssetId, NFTId)) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PortfolioLockedNFT",
			portfolio,
			&StorageHasher::Twox64Concat,
			nft,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn pre_approved_portfolios(portfolio: &PortfolioId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"PreApprovedPortfolios",
			portfolio,
			&StorageHasher::Twox64Concat,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn allowed_custodians(owner: &IdentityId, custodian: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AllowedCustodians",
			owner,
			&StorageHasher::Twox64Concat,
			custodian,
			&StorageHasher::Twox64Concat,
		)
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct SettlementStorage;

impl StoragePrefix for SettlementStorage {
	fn prefix() -> &'static str {
		"Settlement"
	}
}

pub trait SettlementStorageKeys {
	fn venue_info(venue: &VenueId) -> Vec<u8>;
	fn details(venue: &VenueId) -> Vec<u8>;
	fn venue_instructions(venue: &VenueId, instruction: &InstructionId) -> Vec<u8>;
	fn venue_signers(venue: &VenueId, signer: &AccountId) -> Vec<u8>;
	fn user_venues(did: &IdentityId, venue: &VenueId) -> Vec<u8>;
	fn instruction_details(instruction: &InstructionId) -> Vec<u8>;
	fn instruction_leg_status(instruction: &InstructionId, leg: &LegId) -> Vec<u8>;
	fn instruction_affirms_pending(instruction: &InstructionId) -> Vec<u8>;
	fn affirms_received(instruction: &InstructionId, portfolio: &PortfolioId) -> Vec<u8>;
	fn user_affirmations(portfolio: &PortfolioId, instruction: &InstructionId) -> Vec<u8>;
	fn receipts_used(signer: &AccountId, receipt_uid: &u64) -> Vec<u8>;
	fn venue_filtering(asset_id: &AssetId) -> Vec<u8>;
	fn venue_allow_list(asset_id: &AssetId, venue: &VenueId) -> Vec<u8>;
	fn venue_counter() -> Vec<u8>;
	fn instruction_counter() -> Vec<u8>;
	fn instruction_memos(instruction: &InstructionId) -> Vec<u8>;
	fn instruction_statuses(instruction: &InstructionId) -> Vec<u8>;
	fn instruction_legs(instruction: &InstructionId, leg: &LegId) -> Vec<u8>;
	fn off_chain_affirmations(instruction: &InstructionId, leg: &LegId) -> Vec<u8>;
	fn number_of_venue_signers(venue: &VenueId) -> Vec<u8>;
	fn instruction_mediators_affirmations(instruction: &InstructionId, did: &IdentityId)
		-> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> SettlementStorageKeys for S {
	fn venue_info(venue: &VenueId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "VenueInfo", venue, &StorageHasher::Twox64Concat)
	}

	fn details(venue: &VenueId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Details", venue, &StorageHasher::Twox64Concat)
	}

	fn venue_instructions(venue: &VenueId, instruction: &InstructionId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"VenueInstructions",
			venue,
			&StorageHasher::Twox64Concat,
			instruction,
			&StorageHasher::Twox64Concat,
		)
	}

	fn venue_signers(venue: &VenueId, signer: &AccountId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"VenueSigners",
			venue,
			&StorageHasher::Twox64Concat,
			signer,
			&StorageHasher::Twox64Concat,
		)
	}

	fn user_venues(did: &IdentityId, venue: &VenueId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"UserVenues",
			did,
			&StorageHasher::Twox64Concat,
			venue,
			&StorageHasher::Twox64Concat,
		)
	}

	fn instruction_details(instruction: &InstructionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "InstructionDetails", instruction, &StorageHasher::Twox64Concat)
	}

	fn instruction_leg_status(instruction: &InstructionId, leg: &LegId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"InstructionLegStatus",
			instruction,
			&StorageHasher::Twox64Concat,
			leg,
			&StorageHasher::Twox64Concat,
		)
	}

	fn instruction_affirms_pending(instruction: &InstructionId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"InstructionAffirmsPending",
			instruction,
			&StorageHasher::Twox64Concat,
		)
	}

	fn affirms_received(instruction: &InstructionId, portfolio: &PortfolioId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AffirmsReceived",
			instruction,
			&StorageHasher::Twox64Concat,
			portfolio,
			&StorageHasher::Twox64Concat,
		)
	}

	fn user_affirmations(portfolio: &PortfolioId, instruction: &InstructionId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"UserAffirmations",
			portfolio,
			&StorageHasher::Twox64Concat,
			instruction,
			&StorageHasher::Twox64Concat,
		)
	}

	fn receipts_used(signer: &AccountId, receipt_uid: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ReceiptsUsed",
			signer,
			&StorageHasher::Twox64Concat,
			receipt_uid,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn venue_filtering(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "VenueFiltering", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn venue_allow_list(asset_id: &AssetId, venue: &VenueId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"VenueAllowList",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			venue,
			&StorageHasher::Twox64Concat,
		)
	}

	fn venue_counter() -> Vec<u8> {
		storage_value_key(Self::prefix(), "VenueCounter")
	}

	fn instruction_counter() -> Vec<u8> {
		storage_value_key(Self::prefix(), "InstructionCounter")
	}

	fn instruction_memos(instruction: &InstructionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "InstructionMemos", instruction, &StorageHasher::Twox64Concat)
	}

	fn instruction_statuses(instruction: &InstructionId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"InstructionStatuses",
			instruction,
			&StorageHasher::Twox64Concat,
		)
	}

	fn instruction_legs(instruction: &InstructionId, leg: &LegId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"InstructionLegs",
			instruction,
			&StorageHasher::Twox64Concat,
			leg,
			&StorageHasher::Twox64Concat,
		)
	}

	fn off_chain_affirmations(instruction: &InstructionId, leg: &LegId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"OffChainAffirmations",
			instruction,
			&StorageHasher::Twox64Concat,
			leg,
			&StorageHasher::Twox64Concat,
		)
	}

	fn number_of_venue_signers(venue: &VenueId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NumberOfVenueSigners", venue, &StorageHasher::Twox64Concat)
	}

	fn instruction_mediators_affirmations(
		instruction: &InstructionId,
		did: &IdentityId,
	) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"InstructionMediatorsAffirmations",
			instruction,
			&StorageHasher::Twox64Concat,
			did,
			&StorageHasher::Identity,
		)
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct CheckpointStorage;

impl StoragePrefix for CheckpointStorage {
	fn prefix() -> &'static str {
		"Checkpoint"
	}
}

pub trait CheckpointStorageKeys {
	fn balance(asset_checkpoint: &(AssetId, CheckpointId), did: &IdentityId) -> Vec<u8>;
	fn balance_updates(asset_id: &AssetId, did: &IdentityId) -> Vec<u8>;
	fn checkpoint_id_sequence(asset_id: &AssetId) -> Vec<u8>;
	fn timestamps(asset_id: &AssetId, checkpoint: &CheckpointId) -> Vec<u8>;
	fn total_supply(asset_id: &AssetId, checkpoint: &CheckpointId) -> Vec<u8>;
	fn schedule_id_sequence(asset_id: &AssetId) -> Vec<u8>;
	fn scheduled_checkpoints(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8>;
	fn schedule_ref_count(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8>;
	fn schedule_points(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8>;
	fn cached_next_checkpoints(asset_id: &AssetId) -> Vec<u8>;
	fn schedules_max_complexity() -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> CheckpointStorageKeys for S {
	fn balance(asset_checkpoint: &(AssetId, CheckpointId), did: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Balance",
			asset_checkpoint,
			&StorageHasher::Blake2_128Concat,
			did,
			&StorageHasher::Twox64Concat,
		)
	}

	fn balance_updates(asset_id: &AssetId, did: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"BalanceUpdates",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			did,
			&StorageHasher::Twox64Concat,
		)
	}

	fn checkpoint_id_sequence(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"CheckpointIdSequence",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn timestamps(asset_id: &AssetId, checkpoint: &CheckpointId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Timestamps",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			checkpoint,
			&StorageHasher::Twox64Concat,
		)
	}

	fn total_supply(asset_id: &AssetId, checkpoint: &CheckpointId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"TotalSupply",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			checkpoint,
			&StorageHasher::Twox64Concat,
		)
	}

	fn schedule_id_sequence(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"ScheduleIdSequence",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn scheduled_checkpoints(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ScheduledCheckpoints",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			schedule,
			&StorageHasher::Twox64Concat,
		)
	}

	fn schedule_ref_count(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ScheduleRefCount",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			schedule,
			&StorageHasher::Twox64Concat,
		)
	}

	fn schedule_points(asset_id: &AssetId, schedule: &ScheduleId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"SchedulePoints",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			schedule,
			&StorageHasher::Twox64Concat,
		)
	}

	fn cached_next_checkpoints(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(
			Self::prefix(),
			"CachedNextCheckpoints",
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn schedules_max_complexity() -> Vec<u8> {
		storage_value_key(Self::prefix(), "SchedulesMaxComplexity")
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct NftStorage;

impl StoragePrefix for NftStorage {
	fn prefix() -> &'static str {
		"Nft"
	}
}

pub trait NftStorageKeys {
	fn number_of_nfts(asset_id: &AssetId, did: &IdentityId) -> Vec<u8>;
	fn collection_asset(asset_id: &AssetId) -> Vec<u8>;
	fn collection(collection: &NFTCollectionId) -> Vec<u8>;
	fn collection_keys(collection: &NFTCollectionId) -> Vec<u8>;
	fn metadata_value(nft: &(NFTCollectionId, NFTId), key: &AssetMetadataKey) -> Vec<u8>;
	fn nfts_in_collection(asset_id: &AssetId) -> Vec<u8>;
	fn nft_owner(asset_id: &AssetId, nft: &NFTId) -> Vec<u8>;
	fn current_nft_id(collection: &NFTCollectionId) -> Vec<u8>;
	fn current_collection_id() -> Vec<u8>;
	fn next_nft_id(collection: &NFTCollectionId) -> Vec<u8>;
	fn next_collection_id() -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> NftStorageKeys for S {
	fn number_of_nfts(asset_id: &AssetId, did: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"NumberOfNFTs",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			did,
			&StorageHasher::Identity,
		)
	}

	fn collection_asset(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CollectionAsset", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn collection(collection: &NFTCollectionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Collection", collection, &StorageHasher::Blake2_128Concat)
	}

	fn collection_keys(collection: &NFTCollectionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CollectionKeys", collection, &StorageHasher::Blake2_128Concat)
	}

	fn metadata_value(nft: &(NFTCollectionId, NFTId), key: &AssetMetadataKey) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"MetadataValue",
			nft,
			&StorageHasher::Blake2_128Concat,
			key,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn nfts_in_collection(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NFTsInCollection", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn nft_owner(asset_id: &AssetId, nft: &NFTId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"NFTOwner",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			nft,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn current_nft_id(collection: &NFTCollectionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "CurrentNFTId", collection, &StorageHasher::Blake2_128Concat)
	}

	fn current_collection_id() -> Vec<u8> {
		storage_value_key(Self::prefix(), "CurrentCollectionId")
	}

	fn next_nft_id(collection: &NFTCollectionId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NextNFTId", collection, &StorageHasher::Blake2_128Concat)
	}

	fn next_collection_id() -> Vec<u8> {
		storage_value_key(Self::prefix(), "NextCollectionId")
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct ExternalAgentsStorage;

impl StoragePrefix for ExternalAgentsStorage {
	fn prefix() -> &'static str {
		"ExternalAgents"
	}
}

pub trait ExternalAgentsStorageKeys {
	fn group_of_agent(asset_id: &AssetId, agent: &IdentityId) -> Vec<u8>;
	fn agent_of(agent: &IdentityId, asset_id: &AssetId) -> Vec<u8>;
	fn group_permissions(asset_id: &AssetId, ag_id: &AGId) -> Vec<u8>;
	fn num_full_agents(asset_id: &AssetId) -> Vec<u8>;
	fn ag_id_sequence(asset_id: &AssetId) -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> ExternalAgentsStorageKeys for S {
	fn group_of_agent(asset_id: &AssetId, agent: &IdentityId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"GroupOfAgent",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			agent,
			&StorageHasher::Twox64Concat,
		)
	}

	fn agent_of(agent: &IdentityId, asset_id: &AssetId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AgentOf",
			agent,
			&StorageHasher::Twox64Concat,
			asset_id,
			&StorageHasher::Blake2_128Concat,
		)
	}

	fn group_permissions(asset_id: &AssetId, ag_id: &AGId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"GroupPermissions",
			asset_id,
			&StorageHasher::Blake2_128Concat,
			ag_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn num_full_agents(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NumFullAgents", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn ag_id_sequence(asset_id: &AssetId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AGIdSequence", asset_id, &StorageHasher::Blake2_128Concat)
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

pub struct MultiSigStorage;

impl StoragePrefix for MultiSigStorage {
	fn prefix() -> &'static str {
		"MultiSig"
	}
}

pub trait MultiSigStorageKeys {
	fn multisig_signers(multisig: &AccountId, signer: &AccountId) -> Vec<u8>;
	fn number_of_signers(multisig: &AccountId) -> Vec<u8>;
	fn multisig_signs_required(multisig: &AccountId) -> Vec<u8>;
	fn next_proposal_id(multisig: &AccountId) -> Vec<u8>;
	fn proposals(multisig: &AccountId, proposal_id: &u64) -> Vec<u8>;
	fn proposal_states(multisig: &AccountId, proposal_id: &u64) -> Vec<u8>;
	fn proposal_vote_counts(multisig: &AccountId, proposal_id: &u64) -> Vec<u8>;
	fn votes(proposal: &(AccountId, u64), signer: &AccountId) -> Vec<u8>;
	fn auth_to_proposal_id(multisig: &AccountId, auth_id: &u64) -> Vec<u8>;
	fn admin_did(multisig: &AccountId) -> Vec<u8>;
	fn paying_did(multisig: &AccountId) -> Vec<u8>;
	fn multisig_nonce() -> Vec<u8>;
	fn execution_reentry() -> Vec<u8>;
	fn transaction_version() -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> MultiSigStorageKeys for S {
	fn multisig_signers(multisig: &AccountId, signer: &AccountId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"MultiSigSigners",
			multisig,
			&StorageHasher::Identity,
			signer,
			&StorageHasher::Twox64Concat,
		)
	}

	fn number_of_signers(multisig: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NumberOfSigners", multisig, &StorageHasher::Identity)
	}

	fn multisig_signs_required(multisig: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "MultiSigSignsRequired", multisig, &StorageHasher::Identity)
	}

	fn next_proposal_id(multisig: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "NextProposalId", multisig, &StorageHasher::Identity)
	}

	fn proposals(multisig: &AccountId, proposal_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Proposals",
			multisig,
			&StorageHasher::Identity,
			proposal_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn proposal_states(multisig: &AccountId, proposal_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ProposalStates",
			multisig,
			&StorageHasher::Identity,
			proposal_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn proposal_vote_counts(multisig: &AccountId, proposal_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"ProposalVoteCounts",
			multisig,
			&StorageHasher::Identity,
			proposal_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn votes(proposal: &(AccountId, u64), signer: &AccountId) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"Votes",
			proposal,
			&StorageHasher::Identity,
			signer,
			&StorageHasher::Twox64Concat,
		)
	}

	fn auth_to_proposal_id(multisig: &AccountId, auth_id: &u64) -> Vec<u8> {
		storage_double_map_key(
			Self::prefix(),
			"AuthToProposalId",
			multisig,
			&StorageHasher::Identity,
			auth_id,
			&StorageHasher::Twox64Concat,
		)
	}

	fn admin_did(multisig: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "AdminDid", multisig, &StorageHasher::Identity)
	}

	fn paying_did(multisig: &AccountId) -> Vec<u8> {
		storage_map_key(Self::prefix(), "PayingDid", multisig, &StorageHasher::Identity)
	}

	fn multisig_nonce() -> Vec<u8> {
		storage_value_key(Self::prefix(), "MultiSigNonce")
	}

	fn execution_reentry() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ExecutionReentry")
	}

	fn transaction_version() -> Vec<u8> {
		storage_value_key(Self::prefix(), "TransactionVersion")
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

// The three governance committees are instances of one pallet; they share the
// key set and differ only in prefix.
pub struct GovernanceCommitteeStorage;

impl StoragePrefix for GovernanceCommitteeStorage {
	fn prefix() -> &'static str {
		"PolymeshCommittee"
	}
}

pub struct TechnicalCommitteeStorage;

impl StoragePrefix for TechnicalCommitteeStorage {
	fn prefix() -> &'static str {
		"TechnicalCommittee"
	}
}

pub struct UpgradeCommitteeStorage;

impl StoragePrefix for UpgradeCommitteeStorage {
	fn prefix() -> &'static str {
		"UpgradeCommittee"
	}
}

pub trait CommitteeStorageKeys {
	fn members() -> Vec<u8>;
	fn proposals() -> Vec<u8>;
	fn proposal_of(proposal: &Hash) -> Vec<u8>;
	fn proposal_count() -> Vec<u8>;
	fn voting(proposal: &Hash) -> Vec<u8>;
	fn vote_threshold() -> Vec<u8>;
	fn release_coordinator() -> Vec<u8>;
	fn expires_after() -> Vec<u8>;
	fn storage_version() -> Vec<u8>;
}

impl<S: StoragePrefix> CommitteeStorageKeys for S {
	fn members() -> Vec<u8> {
		storage_value_key(Self::prefix(), "Members")
	}

	fn proposals() -> Vec<u8> {
		storage_value_key(Self::prefix(), "Proposals")
	}

	fn proposal_of(proposal: &Hash) -> Vec<u8> {
		storage_map_key(Self::prefix(), "ProposalOf", proposal, &StorageHasher::Twox64Concat)
	}

	fn proposal_count() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ProposalCount")
	}

	fn voting(proposal: &Hash) -> Vec<u8> {
		storage_map_key(Self::prefix(), "Voting", proposal, &StorageHasher::Twox64Concat)
	}

	fn vote_threshold() -> Vec<u8> {
		storage_value_key(Self::prefix(), "VoteThreshold")
	}

	fn release_coordinator() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ReleaseCoordinator")
	}

	fn expires_after() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ExpiresAfter")
	}

	fn storage_version() -> Vec<u8> {
		version_key::<Self>()
	}
}

// Likewise for the four group (membership) instances.
pub struct CddServiceProvidersStorage;

impl StoragePrefix for CddServiceProvidersStorage {
	fn prefix() -> &'static str {
		"CddServiceProviders"
	}
}

pub struct CommitteeMembershipStorage;

impl StoragePrefix for CommitteeMembershipStorage {
	fn prefix() -> &'static str {
		"CommitteeMembership"
	}
}

pub struct TechnicalCommitteeMembershipStorage;

impl StoragePrefix for TechnicalCommitteeMembershipStorage {
	fn prefix() -> &'static str {
		"TechnicalCommitteeMembership"
	}
}

pub struct UpgradeCommitteeMembershipStorage;

impl StoragePrefix for UpgradeCommitteeMembershipStorage {
	fn prefix() -> &'static str {
		"UpgradeCommitteeMembership"
	}
}

pub trait GroupStorageKeys {
	fn active_members() -> Vec<u8>;
	fn inactive_members() -> Vec<u8>;
	fn active_members_limit() -> Vec<u8>;
}

impl<S: StoragePrefix> GroupStorageKeys for S {
	fn active_members() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ActiveMembers")
	}

	fn inactive_members() -> Vec<u8> {
		storage_value_key(Self::prefix(), "InactiveMembers")
	}

	fn active_members_limit() -> Vec<u8> {
		storage_value_key(Self::prefix(), "ActiveMembersLimit")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn system_account_key_has_the_well_known_prefix() {
		let key = SystemStorage::account(&AccountId::new([0u8; 32]));
		assert_eq!(
			key[..32],
			hex!("26aa394eea5630e07c48ae0c9558cef7b99d880ec681799c0cf30e8886371da9")
		);
	}

	#[test]
	fn settlement_keys_are_anchored_under_their_item_prefix() {
		let venue = VenueId(1);
		let key = SettlementStorage::venue_info(&venue);
		assert_eq!(key[..32], storage_value_key("Settlement", "VenueInfo")[..]);
		// twox64-concat: 8 byte digest + 8 byte encoded id
		assert_eq!(key.len(), 32 + 16);

		let legs = SettlementStorage::instruction_legs(&InstructionId(9), &LegId(0));
		assert_eq!(legs[..32], storage_value_key("Settlement", "InstructionLegs")[..]);
		assert_eq!(legs.len(), 32 + 16 + 16);
	}

	#[test]
	fn committee_instances_share_the_key_set_but_not_the_prefix() {
		let governance = GovernanceCommitteeStorage::members();
		let technical = TechnicalCommitteeStorage::members();
		let upgrade = UpgradeCommitteeStorage::members();

		assert_eq!(governance, storage_value_key("PolymeshCommittee", "Members"));
		assert_eq!(technical, storage_value_key("TechnicalCommittee", "Members"));
		assert_ne!(governance, technical);
		assert_ne!(technical, upgrade);
		// same item hash, different pallet hash
		assert_eq!(governance[16..], technical[16..]);
	}

	#[test]
	fn identity_hashed_second_keys_keep_the_raw_did() {
		let did = IdentityId([7u8; 32]);
		let asset_id = AssetId([1u8; 16]);
		let key = AssetStorage::balance_of(&asset_id, &did);
		// prefix (32) + blake2_128_concat(16 + 16) + identity(32)
		assert_eq!(key.len(), 32 + 32 + 32);
		assert_eq!(key[64..], did.0);
	}

	#[test]
	fn venue_cell_round_trips_through_a_storage_proof() {
		use codec::Encode;
		use pcp_storage::VerifyStorageProof;
		use pcp_types::{
			settlement::{Venue, VenueType},
			storage::StorageEntry,
			Header,
		};
		use sp_core::Blake2Hasher;
		use sp_runtime::traits::Header as HeaderT;
		use sp_state_machine::{backend::Backend, new_in_mem, prove_read};
		use sp_trie::HashKey;

		let venue_key = SettlementStorage::venue_info(&VenueId(1));
		let venue = Venue { creator: IdentityId([9u8; 32]), venue_type: VenueType::Sto };

		let mut backend = new_in_mem::<Blake2Hasher, HashKey<Blake2Hasher>>();
		backend.insert(
			vec![(None, vec![(venue_key.clone(), Some(venue.encode()))])],
			Default::default(),
		);
		let root = backend.storage_root(std::iter::empty(), Default::default()).0;
		let proof: Vec<Vec<u8>> = prove_read(backend, &[venue_key.as_slice()])
			.unwrap()
			.iter_nodes()
			.cloned()
			.collect();

		// a header committing to the backend's state root authenticates the read
		let header =
			Header::new(1, Default::default(), root, Default::default(), Default::default());
		let entry =
			StorageEntry { key: venue_key.clone(), value: Some(venue.encode()), proof: Some(proof.clone()) };
		let verified = entry.verify_storage_proof::<_, Venue>(&header).unwrap();
		assert_eq!(verified.key(), venue_key.as_slice());
		assert_eq!(verified.value(), &Some(venue.clone()));

		// a tampered value no longer matches the proof
		let tampered = StorageEntry {
			key: venue_key,
			value: Some(
				Venue { creator: IdentityId([8u8; 32]), venue_type: VenueType::Sto }.encode(),
			),
			proof: Some(proof),
		};
		assert!(tampered.verify_storage_proof::<_, Venue>(&header).is_err());
	}
}
