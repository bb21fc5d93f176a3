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

//! Extension trait for the `Grandpa` pallet's own storage. The current
//! authority list lives under the well-known `:grandpa_authorities` key and
//! is served by [`crate::ChainApi`].

use crate::ApiResult;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	grandpa::{StoredPendingChange, StoredState},
	BlockNumber,
};

pub const GRANDPA: &str = "Grandpa";

pub type SetId = u64;

/// ApiClient extension for the `Grandpa` pallet storage queries.
pub trait PalletGrandpaApi {
	type Hash;

	fn state(&self, at_block: Option<Self::Hash>) -> ApiResult<StoredState>;
	fn pending_change(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<StoredPendingChange>>;
	fn next_forced(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<BlockNumber>>;
	fn stalled(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(BlockNumber, BlockNumber)>>;
	fn current_set_id(&self, at_block: Option<Self::Hash>) -> ApiResult<SetId>;
	fn set_id_session(
		&self,
		set_id: &SetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u32>>;
}

impl<RuntimeConfig, Client> PalletGrandpaApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn state(&self, at_block: Option<Self::Hash>) -> ApiResult<StoredState> {
		Ok(self.get_storage_value(GRANDPA, "State", at_block)?.unwrap_or_default())
	}

	fn pending_change(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<StoredPendingChange>> {
		self.get_storage_value(GRANDPA, "PendingChange", at_block)
	}

	fn next_forced(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<BlockNumber>> {
		self.get_storage_value(GRANDPA, "NextForced", at_block)
	}

	fn stalled(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(BlockNumber, BlockNumber)>> {
		self.get_storage_value(GRANDPA, "Stalled", at_block)
	}

	fn current_set_id(&self, at_block: Option<Self::Hash>) -> ApiResult<SetId> {
		Ok(self.get_storage_value(GRANDPA, "CurrentSetId", at_block)?.unwrap_or_default())
	}

	fn set_id_session(
		&self,
		set_id: &SetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u32>> {
		self.get_storage_map(GRANDPA, "SetIdSession", set_id, at_block)
	}
}
