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
	nft::NFTId,
	portfolio::{PortfolioId, PortfolioName, PortfolioNumber},
	AssetId, Balance, IdentityId,
};

pub const PORTFOLIO: &str = "Portfolio";

/// ApiClient extension for the `Portfolio` pallet storage queries.
pub trait PalletPortfolioApi {
	type Hash;

	fn portfolios(
		&self,
		did: &IdentityId,
		num: &PortfolioNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioName>>;
	fn name_to_number(
		&self,
		did: &IdentityId,
		name: &PortfolioName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioNumber>>;
	fn next_portfolio_number(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<PortfolioNumber>;
	fn portfolio_asset_balances(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn portfolio_locked_assets(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn portfolio_asset_count(
		&self,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn portfolio_custodian(
		&self,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>>;
	fn portfolios_in_custody(
		&self,
		custodian: &IdentityId,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn portfolio_nft(
		&self,
		portfolio: &PortfolioId,
		nft: &(AssetId, NFTId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn portfolio_locked_nft(
		&self,
		portfolio: &PortfolioId,
		nft: &(AssetId, NFTId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn pre_approved_portfolios(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn allowed_custodians(
		&self,
		owner: &IdentityId,
		custodian: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletPortfolioApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn portfolios(
		&self,
		did: &IdentityId,
		num: &PortfolioNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioName>> {
		self.get_storage_double_map(PORTFOLIO, "Portfolios", did, num, at_block)
	}

	fn name_to_number(
		&self,
		did: &IdentityId,
		name: &PortfolioName,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PortfolioNumber>> {
		self.get_storage_double_map(PORTFOLIO, "NameToNumber", did, name, at_block)
	}

	fn next_portfolio_number(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<PortfolioNumber> {
		Ok(self
			.get_storage_map(PORTFOLIO, "NextPortfolioNumber", did, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_asset_balances(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PortfolioAssetBalances", portfolio, asset_id, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_locked_assets(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PortfolioLockedAssets", portfolio, asset_id, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_asset_count(
		&self,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(PORTFOLIO, "PortfolioAssetCount", portfolio, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_custodian(
		&self,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>> {
		self.get_storage_map(PORTFOLIO, "PortfolioCustodian", portfolio, at_block)
	}

	fn portfolios_in_custody(
		&self,
		custodian: &IdentityId,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PortfoliosInCustody", custodian, portfolio, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_nft(
		&self,
		portfolio: &PortfolioId,
		nft: &(AssetId, NFTId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PortfolioNFT", portfolio, nft, at_block)?
			.unwrap_or_default())
	}

	fn portfolio_locked_nft(
		&self,
		portfolio: &PortfolioId,
		nft: &(AssetId, NFTId),
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PortfolioLockedNFT", portfolio, nft, at_block)?
			.unwrap_or_default())
	}

	fn pre_approved_portfolios(
		&self,
		portfolio: &PortfolioId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "PreApprovedPortfolios", portfolio, asset_id, at_block)?
			.unwrap_or_default())
	}

	fn allowed_custodians(
		&self,
		owner: &IdentityId,
		custodian: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(PORTFOLIO, "AllowedCustodians", owner, custodian, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(PORTFOLIO, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
