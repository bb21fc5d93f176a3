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
use pcp_types::{AccountId, AccountInfo, Balance, Index};

/// ApiClient extension that contains some convenience methods around accounts.
pub trait AccountApi {
	type Hash;

	fn account_info(
		&self,
		who: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountInfo>>;
	fn get_nonce_of(&self, who: &AccountId) -> ApiResult<Index>;
	fn get_free_balance(&self, who: &AccountId) -> ApiResult<Balance>;
}

impl<RuntimeConfig, Client> AccountApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn account_info(
		&self,
		who: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountInfo>> {
		self.get_storage_map("System", "Account", who, at_block)
	}

	fn get_nonce_of(&self, who: &AccountId) -> ApiResult<Index> {
		Ok(self.account_info(who, None)?.map_or_else(|| 0, |info| info.nonce))
	}

	fn get_free_balance(&self, who: &AccountId) -> ApiResult<Balance> {
		Ok(self.account_info(who, None)?.map_or_else(|| 0, |info| info.data.free))
	}
}
