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
use codec::Decode;
use frame_support::dispatch::PerDispatchClass;
use frame_system::{EventRecord, LastRuntimeUpgradeInfo, Phase};
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{BlockNumber, Hash};
use sp_runtime::generic::Digest;

pub const SYSTEM: &str = "System";

/// ApiClient extension for the `System` pallet storage queries. Account
/// information lives on [`crate::AccountApi`].
///
/// Events embed the runtime's event enum, so `events` is generic over the
/// caller's event type.
pub trait PalletSystemApi {
	type Hash;

	fn block_hash(
		&self,
		number: &BlockNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Hash>;
	fn parent_hash(&self, at_block: Option<Self::Hash>) -> ApiResult<Hash>;
	fn number(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber>;
	fn digest(&self, at_block: Option<Self::Hash>) -> ApiResult<Digest>;
	fn events<RuntimeEvent: Decode>(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<EventRecord<RuntimeEvent, Hash>>>;
	fn event_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn event_topics(
		&self,
		topic: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(BlockNumber, u32)>>;
	fn extrinsic_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>>;
	fn extrinsic_data(&self, index: &u32, at_block: Option<Self::Hash>) -> ApiResult<Vec<u8>>;
	fn all_extrinsics_len(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>>;
	fn block_weight(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<PerDispatchClass<frame_support::weights::Weight>>;
	fn execution_phase(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Phase>>;
	fn last_runtime_upgrade(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<LastRuntimeUpgradeInfo>>;
	fn upgraded_to_u32_ref_count(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn upgraded_to_triple_ref_count(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
}

impl<RuntimeConfig, Client> PalletSystemApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn block_hash(
		&self,
		number: &BlockNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Hash> {
		Ok(self.get_storage_map(SYSTEM, "BlockHash", number, at_block)?.unwrap_or_default())
	}

	fn parent_hash(&self, at_block: Option<Self::Hash>) -> ApiResult<Hash> {
		Ok(self.get_storage_value(SYSTEM, "ParentHash", at_block)?.unwrap_or_default())
	}

	fn number(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber> {
		Ok(self.get_storage_value(SYSTEM, "Number", at_block)?.unwrap_or_default())
	}

	fn digest(&self, at_block: Option<Self::Hash>) -> ApiResult<Digest> {
		Ok(self.get_storage_value(SYSTEM, "Digest", at_block)?.unwrap_or_default())
	}

	fn events<RuntimeEvent: Decode>(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<EventRecord<RuntimeEvent, Hash>>> {
		Ok(self.get_storage_value(SYSTEM, "Events", at_block)?.unwrap_or_default())
	}

	fn event_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(SYSTEM, "EventCount", at_block)?.unwrap_or_default())
	}

	fn event_topics(
		&self,
		topic: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(BlockNumber, u32)>> {
		Ok(self.get_storage_map(SYSTEM, "EventTopics", topic, at_block)?.unwrap_or_default())
	}

	fn extrinsic_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>> {
		self.get_storage_value(SYSTEM, "ExtrinsicCount", at_block)
	}

	fn extrinsic_data(&self, index: &u32, at_block: Option<Self::Hash>) -> ApiResult<Vec<u8>> {
		Ok(self.get_storage_map(SYSTEM, "ExtrinsicData", index, at_block)?.unwrap_or_default())
	}

	fn all_extrinsics_len(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>> {
		self.get_storage_value(SYSTEM, "AllExtrinsicsLen", at_block)
	}

	fn block_weight(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<PerDispatchClass<frame_support::weights::Weight>> {
		Ok(self.get_storage_value(SYSTEM, "BlockWeight", at_block)?.unwrap_or_default())
	}

	fn execution_phase(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Phase>> {
		self.get_storage_value(SYSTEM, "ExecutionPhase", at_block)
	}

	fn last_runtime_upgrade(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<LastRuntimeUpgradeInfo>> {
		self.get_storage_value(SYSTEM, "LastRuntimeUpgrade", at_block)
	}

	fn upgraded_to_u32_ref_count(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self
			.get_storage_value(SYSTEM, "UpgradedToU32RefCount", at_block)?
			.unwrap_or_default())
	}

	fn upgraded_to_triple_ref_count(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self
			.get_storage_value(SYSTEM, "UpgradedToTripleRefCount", at_block)?
			.unwrap_or_default())
	}
}
