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
	asset::{AssetMetadataKey, AssetMetadataValue},
	nft::{NFTCollection, NFTCollectionId, NFTCount, NFTId},
	portfolio::PortfolioId,
	AssetId, IdentityId,
};
use std::collections::BTreeSet;

pub const NFT: &str = "Nft";

/// ApiClient extension for the `Nft` pallet storage queries.
pub trait PalletNftApi {
	type Hash;

	fn number_of_nfts(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCount>;
	fn collection_asset(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCollectionId>;
	fn collection(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCollection>;
	fn collection_keys(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<AssetMetadataKey>>;
	fn metadata_value(
		&self,
		nft: &(NFTCollectionId, NFTId),
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataValue>;
	fn nfts_in_collection(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCount>;
	fn nft_owner(
		&self,
		asset_id: &AssetId,
		nft: &NFTId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioId>>;
	fn current_nft_id(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NFTId>>;
	fn current_collection_id(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NFTCollectionId>>;
	fn next_nft_id(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTId>;
	fn next_collection_id(&self, at_block: Option<Self::Hash>) -> ApiResult<NFTCollectionId>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletNftApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn number_of_nfts(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCount> {
		Ok(self
			.get_storage_double_map(NFT, "NumberOfNFTs", asset_id, did, at_block)?
			.unwrap_or_default())
	}

	fn collection_asset(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCollectionId> {
		Ok(self.get_storage_map(NFT, "CollectionAsset", asset_id, at_block)?.unwrap_or_default())
	}

	fn collection(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCollection> {
		Ok(self.get_storage_map(NFT, "Collection", collection, at_block)?.unwrap_or_default())
	}

	fn collection_keys(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<BTreeSet<AssetMetadataKey>> {
		Ok(self.get_storage_map(NFT, "CollectionKeys", collection, at_block)?.unwrap_or_default())
	}

	fn metadata_value(
		&self,
		nft: &(NFTCollectionId, NFTId),
		key: &AssetMetadataKey,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AssetMetadataValue> {
		Ok(self
			.get_storage_double_map(NFT, "MetadataValue", nft, key, at_block)?
			.unwrap_or_default())
	}

	fn nfts_in_collection(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTCount> {
		Ok(self.get_storage_map(NFT, "NFTsInCollection", asset_id, at_block)?.unwrap_or_default())
	}

	fn nft_owner(
		&self,
		asset_id: &AssetId,
		nft: &NFTId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioId>> {
		self.get_storage_double_map(NFT, "NFTOwner", asset_id, nft, at_block)
	}

	fn current_nft_id(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NFTId>> {
		self.get_storage_map(NFT, "CurrentNFTId", collection, at_block)
	}

	fn current_collection_id(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NFTCollectionId>> {
		self.get_storage_value(NFT, "CurrentCollectionId", at_block)
	}

	fn next_nft_id(
		&self,
		collection: &NFTCollectionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<NFTId> {
		Ok(self.get_storage_map(NFT, "NextNFTId", collection, at_block)?.unwrap_or_default())
	}

	fn next_collection_id(&self, at_block: Option<Self::Hash>) -> ApiResult<NFTCollectionId> {
		Ok(self.get_storage_value(NFT, "NextCollectionId", at_block)?.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(NFT, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
