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
	checkpoint::{CheckpointId, NextCheckpoints, ScheduleCheckpoints, ScheduleId},
	AssetId, Balance, IdentityId, Moment,
};

pub const CHECKPOINT: &str = "Checkpoint";

/// ApiClient extension for the `Checkpoint` pallet storage queries.
pub trait PalletCheckpointApi {
	type Hash;

	fn balance(
		&self,
		asset_checkpoint: &(AssetId, CheckpointId),
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn balance_updates(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<CheckpointId>>;
	fn checkpoint_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<CheckpointId>;
	fn timestamps(
		&self,
		asset_id: &AssetId,
		checkpoint: &CheckpointId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Moment>;
	fn total_supply(
		&self,
		asset_id: &AssetId,
		checkpoint: &CheckpointId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance>;
	fn schedule_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ScheduleId>;
	fn scheduled_checkpoints(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ScheduleCheckpoints>>;
	fn schedule_ref_count(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
	fn schedule_points(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<CheckpointId>>;
	fn cached_next_checkpoints(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextCheckpoints>>;
	fn schedules_max_complexity(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletCheckpointApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn balance(
		&self,
		asset_checkpoint: &(AssetId, CheckpointId),
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "Balance", asset_checkpoint, did, at_block)?
			.unwrap_or_default())
	}

	fn balance_updates(
		&self,
		asset_id: &AssetId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<CheckpointId>> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "BalanceUpdates", asset_id, did, at_block)?
			.unwrap_or_default())
	}

	fn checkpoint_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<CheckpointId> {
		Ok(self
			.get_storage_map(CHECKPOINT, "CheckpointIdSequence", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn timestamps(
		&self,
		asset_id: &AssetId,
		checkpoint: &CheckpointId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Moment> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "Timestamps", asset_id, checkpoint, at_block)?
			.unwrap_or_default())
	}

	fn total_supply(
		&self,
		asset_id: &AssetId,
		checkpoint: &CheckpointId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "TotalSupply", asset_id, checkpoint, at_block)?
			.unwrap_or_default())
	}

	fn schedule_id_sequence(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ScheduleId> {
		Ok(self
			.get_storage_map(CHECKPOINT, "ScheduleIdSequence", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn scheduled_checkpoints(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ScheduleCheckpoints>> {
		self.get_storage_double_map(CHECKPOINT, "ScheduledCheckpoints", asset_id, schedule, at_block)
	}

	fn schedule_ref_count(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "ScheduleRefCount", asset_id, schedule, at_block)?
			.unwrap_or_default())
	}

	fn schedule_points(
		&self,
		asset_id: &AssetId,
		schedule: &ScheduleId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<CheckpointId>> {
		Ok(self
			.get_storage_double_map(CHECKPOINT, "SchedulePoints", asset_id, schedule, at_block)?
			.unwrap_or_default())
	}

	fn cached_next_checkpoints(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<NextCheckpoints>> {
		self.get_storage_map(CHECKPOINT, "CachedNextCheckpoints", asset_id, at_block)
	}

	fn schedules_max_complexity(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self
			.get_storage_value(CHECKPOINT, "SchedulesMaxComplexity", at_block)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(CHECKPOINT, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
