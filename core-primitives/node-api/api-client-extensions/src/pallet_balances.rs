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
use pcp_types::{AccountId, Balance};

pub const BALANCES: &str = "Balances";

/// ApiClient extension for the `Balances` pallet storage queries.
pub trait PalletBalancesApi {
	type Hash;

	fn total_issuance(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn locks(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<pallet_balances::BalanceLock<Balance>>>;
}

impl<RuntimeConfig, Client> PalletBalancesApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn total_issuance(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self.get_storage_value(BALANCES, "TotalIssuance", at_block)?.unwrap_or_default())
	}

	fn locks(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<pallet_balances::BalanceLock<Balance>>> {
		Ok(self.get_storage_map(BALANCES, "Locks", account, at_block)?.unwrap_or_default())
	}
}
