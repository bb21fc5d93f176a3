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

//! The group (membership) pallet backs the cdd-provider registry and the
//! three committee memberships. One trait, instance passed as an argument.

use crate::ApiResult;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{group::InactiveMember, IdentityId};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GroupInstance {
	CddServiceProviders,
	CommitteeMembership,
	TechnicalCommitteeMembership,
	UpgradeCommitteeMembership,
}

impl GroupInstance {
	pub fn prefix(&self) -> &'static str {
		match self {
			Self::CddServiceProviders => "CddServiceProviders",
			Self::CommitteeMembership => "CommitteeMembership",
			Self::TechnicalCommitteeMembership => "TechnicalCommitteeMembership",
			Self::UpgradeCommitteeMembership => "UpgradeCommitteeMembership",
		}
	}
}

/// ApiClient extension for the group pallet instances' storage queries.
pub trait PalletGroupApi {
	type Hash;

	fn active_members(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<IdentityId>>;
	fn inactive_members(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<InactiveMember>>;
	fn active_members_limit(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
}

impl<RuntimeConfig, Client> PalletGroupApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn active_members(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<IdentityId>> {
		Ok(self
			.get_storage_value(instance.prefix(), "ActiveMembers", at_block)?
			.unwrap_or_default())
	}

	fn inactive_members(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<InactiveMember>> {
		Ok(self
			.get_storage_value(instance.prefix(), "InactiveMembers", at_block)?
			.unwrap_or_default())
	}

	fn active_members_limit(
		&self,
		instance: GroupInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(instance.prefix(), "ActiveMembersLimit", at_block)?
			.unwrap_or_default())
	}
}
