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
use pcp_types::BlockNumber;
use sp_consensus_babe::{
	digests::{NextConfigDescriptor, PreDigest},
	AuthorityId, BabeAuthorityWeight, BabeEpochConfiguration, Slot,
};

pub const BABE: &str = "Babe";

/// Per-epoch VRF output accumulator entries.
pub type Randomness = [u8; 32];

/// ApiClient extension for the `Babe` pallet storage queries.
pub trait PalletBabeApi {
	type Hash;

	fn authorities(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AuthorityId, BabeAuthorityWeight)>>;
	fn next_authorities(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AuthorityId, BabeAuthorityWeight)>>;
	fn epoch_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn genesis_slot(&self, at_block: Option<Self::Hash>) -> ApiResult<Slot>;
	fn current_slot(&self, at_block: Option<Self::Hash>) -> ApiResult<Slot>;
	fn randomness(&self, at_block: Option<Self::Hash>) -> ApiResult<Randomness>;
	fn next_randomness(&self, at_block: Option<Self::Hash>) -> ApiResult<Randomness>;
	fn author_vrf_randomness(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Randomness>>;
	fn segment_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn under_construction(
		&self,
		segment: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Randomness>>;
	fn initialized(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Option<PreDigest>>>;
	fn pending_epoch_config_change(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextConfigDescriptor>>;
	fn epoch_start(&self, at_block: Option<Self::Hash>)
		-> ApiResult<(BlockNumber, BlockNumber)>;
	fn lateness(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber>;
	fn epoch_config(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BabeEpochConfiguration>>;
	fn next_epoch_config(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BabeEpochConfiguration>>;
	fn skipped_epochs(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(u64, SessionIndex)>>;
}

pub type SessionIndex = u32;

impl<RuntimeConfig, Client> PalletBabeApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn authorities(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AuthorityId, BabeAuthorityWeight)>> {
		Ok(self.get_storage_value(BABE, "Authorities", at_block)?.unwrap_or_default())
	}

	fn next_authorities(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AuthorityId, BabeAuthorityWeight)>> {
		Ok(self.get_storage_value(BABE, "NextAuthorities", at_block)?.unwrap_or_default())
	}

	fn epoch_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_value(BABE, "EpochIndex", at_block)?.unwrap_or_default())
	}

	fn genesis_slot(&self, at_block: Option<Self::Hash>) -> ApiResult<Slot> {
		Ok(self.get_storage_value(BABE, "GenesisSlot", at_block)?.unwrap_or_default())
	}

	fn current_slot(&self, at_block: Option<Self::Hash>) -> ApiResult<Slot> {
		Ok(self.get_storage_value(BABE, "CurrentSlot", at_block)?.unwrap_or_default())
	}

	fn randomness(&self, at_block: Option<Self::Hash>) -> ApiResult<Randomness> {
		Ok(self.get_storage_value(BABE, "Randomness", at_block)?.unwrap_or_default())
	}

	fn next_randomness(&self, at_block: Option<Self::Hash>) -> ApiResult<Randomness> {
		Ok(self.get_storage_value(BABE, "NextRandomness", at_block)?.unwrap_or_default())
	}

	fn author_vrf_randomness(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Randomness>> {
		Ok(self.get_storage_value(BABE, "AuthorVrfRandomness", at_block)?.unwrap_or_default())
	}

	fn segment_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(BABE, "SegmentIndex", at_block)?.unwrap_or_default())
	}

	fn under_construction(
		&self,
		segment: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Randomness>> {
		Ok(self
			.get_storage_map(BABE, "UnderConstruction", segment, at_block)?
			.unwrap_or_default())
	}

	fn initialized(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Option<PreDigest>>> {
		self.get_storage_value(BABE, "Initialized", at_block)
	}

	fn pending_epoch_config_change(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextConfigDescriptor>> {
		self.get_storage_value(BABE, "PendingEpochConfigChange", at_block)
	}

	fn epoch_start(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<(BlockNumber, BlockNumber)> {
		Ok(self.get_storage_value(BABE, "EpochStart", at_block)?.unwrap_or_default())
	}

	fn lateness(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber> {
		Ok(self.get_storage_value(BABE, "Lateness", at_block)?.unwrap_or_default())
	}

	fn epoch_config(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BabeEpochConfiguration>> {
		self.get_storage_value(BABE, "EpochConfig", at_block)
	}

	fn next_epoch_config(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BabeEpochConfiguration>> {
		self.get_storage_value(BABE, "NextEpochConfig", at_block)
	}

	fn skipped_epochs(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(u64, SessionIndex)>> {
		Ok(self.get_storage_value(BABE, "SkippedEpochs", at_block)?.unwrap_or_default())
	}
}
