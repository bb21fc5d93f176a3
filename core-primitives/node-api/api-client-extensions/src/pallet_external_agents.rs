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
	agents::{AGId, AgentGroup},
	secondary_key::ExtrinsicPermissions,
	AssetId, IdentityId,
};

pub const EXTERNAL_AGENTS: &str = "ExternalAgents";

/// ApiClient extension for the `ExternalAgents` pallet storage queries.
pub trait PalletExternalAgentsApi {
	type Hash;

	fn group_of_agent(
		&self,
		asset_id: &AssetId,
		agent: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AgentGroup>>;
	fn agent_of(
		&self,
		agent: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn group_permissions(
		&self,
		asset_id: &AssetId,
		ag_id: &AGId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ExtrinsicPermissions>>;
	fn num_full_agents(&self, asset_id: &AssetId, at_block: Option<Self::Hash>)
		-> ApiResult<u32>;
	fn ag_id_sequence(&self, asset_id: &AssetId, at_block: Option<Self::Hash>) -> ApiResult<AGId>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletExternalAgentsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn group_of_agent(
		&self,
		asset_id: &AssetId,
		agent: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AgentGroup>> {
		self.get_storage_double_map(EXTERNAL_AGENTS, "GroupOfAgent", asset_id, agent, at_block)
	}

	fn agent_of(
		&self,
		agent: &IdentityId,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map::<_, _, ()>(EXTERNAL_AGENTS, "AgentOf", agent, asset_id, at_block)?
			.is_some())
	}

	fn group_permissions(
		&self,
		asset_id: &AssetId,
		ag_id: &AGId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ExtrinsicPermissions>> {
		self.get_storage_double_map(EXTERNAL_AGENTS, "GroupPermissions", asset_id, ag_id, at_block)
	}

	fn num_full_agents(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_map(EXTERNAL_AGENTS, "NumFullAgents", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn ag_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AGId> {
		Ok(self
			.get_storage_map(EXTERNAL_AGENTS, "AGIdSequence", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(EXTERNAL_AGENTS, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}
