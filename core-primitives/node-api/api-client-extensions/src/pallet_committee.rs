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

//! The chain instantiates the committee pallet three times. The storage
//! layout is identical per instance, so the trait takes the instance as an
//! argument instead of being declared thrice.

use crate::ApiResult;
use codec::Decode;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{committee::PolymeshVotes, BlockNumber, Hash, IdentityId, MaybeBlock};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CommitteeInstance {
	Governance,
	Technical,
	Upgrade,
}

impl CommitteeInstance {
	pub fn prefix(&self) -> &'static str {
		match self {
			Self::Governance => "PolymeshCommittee",
			Self::Technical => "TechnicalCommittee",
			Self::Upgrade => "UpgradeCommittee",
		}
	}
}

/// ApiClient extension for the committee pallet instances' storage queries.
pub trait PalletCommitteeApi {
	type Hash;

	fn members(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<IdentityId>>;
	fn proposals(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Hash>>;
	fn proposal_of<Proposal: Decode>(
		&self,
		instance: CommitteeInstance,
		proposal: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Proposal>>;
	fn proposal_count(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
	fn voting(
		&self,
		instance: CommitteeInstance,
		proposal: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PolymeshVotes>>;
	fn vote_threshold(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<(u32, u32)>;
	fn release_coordinator(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>>;
	fn expires_after(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MaybeBlock<BlockNumber>>;
	fn storage_version(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletCommitteeApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn members(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<IdentityId>> {
		Ok(self
			.get_storage_value(instance.prefix(), "Members", at_block)?
			.unwrap_or_default())
	}

	fn proposals(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Hash>> {
		Ok(self
			.get_storage_value(instance.prefix(), "Proposals", at_block)?
			.unwrap_or_default())
	}

	fn proposal_of<Proposal: Decode>(
		&self,
		instance: CommitteeInstance,
		proposal: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Proposal>> {
		self.get_storage_map(instance.prefix(), "ProposalOf", proposal, at_block)
	}

	fn proposal_count(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(instance.prefix(), "ProposalCount", at_block)?
			.unwrap_or_default())
	}

	fn voting(
		&self,
		instance: CommitteeInstance,
		proposal: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PolymeshVotes>> {
		self.get_storage_map(instance.prefix(), "Voting", proposal, at_block)
	}

	fn vote_threshold(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<(u32, u32)> {
		Ok(self
			.get_storage_value(instance.prefix(), "VoteThreshold", at_block)?
			.unwrap_or_default())
	}

	fn release_coordinator(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>> {
		self.get_storage_value(instance.prefix(), "ReleaseCoordinator", at_block)
	}

	fn expires_after(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MaybeBlock<BlockNumber>> {
		Ok(self
			.get_storage_value(instance.prefix(), "ExpiresAfter", at_block)?
			.unwrap_or_default())
	}

	fn storage_version(
		&self,
		instance: CommitteeInstance,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(instance.prefix(), "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}
