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
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	pips::{
		DepositInfo, Pip, PipId, PipsMetadata, ProposalState, SnapshotId, SnapshotMetadata,
		SnapshottedPip, Vote, VotingResult,
	},
	AccountId, Balance, BlockNumber, MaybeBlock,
};

pub const PIPS: &str = "Pips";

/// ApiClient extension for the `Pips` pallet storage queries.
pub trait PalletPipsApi {
	type Hash;

	fn proposals<Proposal: Decode>(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Pip<Proposal>>>;
	fn proposal_metadata(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PipsMetadata>>;
	fn proposal_states(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalState>>;
	fn proposal_result(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<VotingResult>;
	fn proposal_votes(
		&self,
		pip_id: &PipId,
		voter: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vote>>;
	fn deposits(
		&self,
		pip_id: &PipId,
		owner: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<DepositInfo>>;
	fn pip_id_sequence(&self, at_block: Option<Self::Hash>) -> ApiResult<PipId>;
	fn pip_skip_count(&self, pip_id: &PipId, at_block: Option<Self::Hash>) -> ApiResult<u8>;
	fn pip_to_schedule(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BlockNumber>>;
	fn committee_pips(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<PipId>>;
	fn live_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<SnapshottedPip>>;
	fn snapshot_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<SnapshottedPip>>;
	fn snapshot_meta(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<SnapshotMetadata>>;
	fn snapshot_id_sequence(&self, at_block: Option<Self::Hash>) -> ApiResult<SnapshotId>;
	fn active_pip_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn active_pip_limit(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn minimum_proposal_deposit(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn default_enactment_period(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber>;
	fn pending_pip_expiry(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MaybeBlock<BlockNumber>>;
	fn max_pip_skip_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
	fn prune_historical_pips(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletPipsApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn proposals<Proposal: Decode>(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Pip<Proposal>>> {
		self.get_storage_map(PIPS, "Proposals", pip_id, at_block)
	}

	fn proposal_metadata(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PipsMetadata>> {
		self.get_storage_map(PIPS, "ProposalMetadata", pip_id, at_block)
	}

	fn proposal_states(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalState>> {
		self.get_storage_map(PIPS, "ProposalStates", pip_id, at_block)
	}

	fn proposal_result(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<VotingResult> {
		Ok(self.get_storage_map(PIPS, "ProposalResult", pip_id, at_block)?.unwrap_or_default())
	}

	fn proposal_votes(
		&self,
		pip_id: &PipId,
		voter: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vote>> {
		self.get_storage_double_map(PIPS, "ProposalVotes", pip_id, voter, at_block)
	}

	fn deposits(
		&self,
		pip_id: &PipId,
		owner: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<DepositInfo>> {
		self.get_storage_double_map(PIPS, "Deposits", pip_id, owner, at_block)
	}

	fn pip_id_sequence(&self, at_block: Option<Self::Hash>) -> ApiResult<PipId> {
		Ok(self.get_storage_value(PIPS, "PipIdSequence", at_block)?.unwrap_or_default())
	}

	fn pip_skip_count(&self, pip_id: &PipId, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_map(PIPS, "PipSkipCount", pip_id, at_block)?.unwrap_or_default())
	}

	fn pip_to_schedule(
		&self,
		pip_id: &PipId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<BlockNumber>> {
		self.get_storage_map(PIPS, "PipToSchedule", pip_id, at_block)
	}

	fn committee_pips(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<PipId>> {
		Ok(self.get_storage_value(PIPS, "CommitteePips", at_block)?.unwrap_or_default())
	}

	fn live_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<SnapshottedPip>> {
		Ok(self.get_storage_value(PIPS, "LiveQueue", at_block)?.unwrap_or_default())
	}

	fn snapshot_queue(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<SnapshottedPip>> {
		Ok(self.get_storage_value(PIPS, "SnapshotQueue", at_block)?.unwrap_or_default())
	}

	fn snapshot_meta(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<SnapshotMetadata>> {
		self.get_storage_value(PIPS, "SnapshotMeta", at_block)
	}

	fn snapshot_id_sequence(&self, at_block: Option<Self::Hash>) -> ApiResult<SnapshotId> {
		Ok(self.get_storage_value(PIPS, "SnapshotIdSequence", at_block)?.unwrap_or_default())
	}

	fn active_pip_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(PIPS, "ActivePipCount", at_block)?.unwrap_or_default())
	}

	fn active_pip_limit(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(PIPS, "ActivePipLimit", at_block)?.unwrap_or_default())
	}

	fn minimum_proposal_deposit(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self
			.get_storage_value(PIPS, "MinimumProposalDeposit", at_block)?
			.unwrap_or_default())
	}

	fn default_enactment_period(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber> {
		Ok(self
			.get_storage_value(PIPS, "DefaultEnactmentPeriod", at_block)?
			.unwrap_or_default())
	}

	fn pending_pip_expiry(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MaybeBlock<BlockNumber>> {
		Ok(self.get_storage_value(PIPS, "PendingPipExpiry", at_block)?.unwrap_or_default())
	}

	fn max_pip_skip_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(PIPS, "MaxPipSkipCount", at_block)?.unwrap_or_default())
	}

	fn prune_historical_pips(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_value(PIPS, "PruneHistoricalPips", at_block)?.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(PIPS, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
