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
use pcp_types::{relayer::Subsidy, AccountId};

pub const RELAYER: &str = "Relayer";

/// ApiClient extension for the `Relayer` pallet storage queries.
pub trait PalletRelayerApi {
	type Hash;

	fn subsidies(
		&self,
		user_key: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Subsidy>>;
}

impl<RuntimeConfig, Client> PalletRelayerApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn subsidies(
		&self,
		user_key: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Subsidy>> {
		self.get_storage_map(RELAYER, "Subsidies", user_key, at_block)
	}
}
