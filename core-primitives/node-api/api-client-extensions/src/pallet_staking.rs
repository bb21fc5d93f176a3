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

//! Extension traits for the `Staking` pallet and the multi-phase election
//! provider that feeds it.

use crate::ApiResult;
use codec::Decode;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	staking::{
		ActiveEraInfo, ElectionPhase, EraRewardPoints, Exposure, Forcing, Nominations,
		PermissionedIdentityPrefs, ReadySolution, RewardDestination, RoundSnapshot,
		SlashingSpans, SlashingSwitch, SolutionOrSnapshotSize, SpanRecord, StakingLedger,
		UnappliedSlash, ValidatorPrefs,
	},
	AccountId, Balance, IdentityId,
};
use sp_npos_elections::ElectionScore;
use sp_runtime::{Perbill, Percent};

pub const STAKING: &str = "Staking";
pub const ELECTION_PROVIDER_MULTI_PHASE: &str = "ElectionProviderMultiPhase";

pub type EraIndex = u32;
pub type SessionIndex = u32;

/// ApiClient extension for the `Staking` pallet storage queries.
pub trait PalletStakingApi {
	type Hash;

	fn validator_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn minimum_validator_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn invulnerables(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<AccountId>>;
	fn bonded(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountId>>;
	fn ledger(
		&self,
		controller: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<StakingLedger>>;
	fn payee(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<RewardDestination>;
	fn validators(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ValidatorPrefs>;
	fn counter_for_validators(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn max_validators_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>>;
	fn nominators(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Nominations>>;
	fn counter_for_nominators(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn max_nominators_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>>;
	fn current_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<EraIndex>>;
	fn active_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<ActiveEraInfo>>;
	fn eras_start_session_index(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SessionIndex>>;
	fn eras_stakers(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Exposure>;
	fn eras_stakers_clipped(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Exposure>;
	fn eras_validator_prefs(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ValidatorPrefs>;
	fn eras_validator_reward(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Balance>>;
	fn eras_reward_points(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<EraRewardPoints>;
	fn eras_total_stake(&self, era: &EraIndex, at_block: Option<Self::Hash>)
		-> ApiResult<Balance>;
	fn force_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Forcing>;
	fn slash_reward_fraction(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill>;
	fn canceled_slash_payout(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn unapplied_slashes(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<UnappliedSlash>>;
	fn bonded_eras(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(EraIndex, SessionIndex)>>;
	fn validator_slash_in_era(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(Perbill, Balance)>>;
	fn nominator_slash_in_era(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Balance>>;
	fn slashing_spans(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SlashingSpans>>;
	fn span_slash(
		&self,
		span: &(AccountId, u32),
		at_block: Option<Self::Hash>,
	) -> ApiResult<SpanRecord>;
	fn current_planned_session(&self, at_block: Option<Self::Hash>) -> ApiResult<SessionIndex>;
	fn offending_validators(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(u32, bool)>>;
	fn permissioned_identity(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PermissionedIdentityPrefs>>;
	fn validator_commission_cap(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill>;
	fn slashing_allowed_for(&self, at_block: Option<Self::Hash>) -> ApiResult<SlashingSwitch>;
	fn min_nominator_bond(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn min_validator_bond(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn minimum_active_stake(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn min_commission(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill>;
	fn chill_threshold(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Percent>>;
	fn polymesh_storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletStakingApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn validator_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(STAKING, "ValidatorCount", at_block)?.unwrap_or_default())
	}

	fn minimum_validator_count(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(STAKING, "MinimumValidatorCount", at_block)?
			.unwrap_or_default())
	}

	fn invulnerables(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<AccountId>> {
		Ok(self.get_storage_value(STAKING, "Invulnerables", at_block)?.unwrap_or_default())
	}

	fn bonded(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountId>> {
		self.get_storage_map(STAKING, "Bonded", stash, at_block)
	}

	fn ledger(
		&self,
		controller: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<StakingLedger>> {
		self.get_storage_map(STAKING, "Ledger", controller, at_block)
	}

	fn payee(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<RewardDestination> {
		Ok(self.get_storage_map(STAKING, "Payee", stash, at_block)?.unwrap_or_default())
	}

	fn validators(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ValidatorPrefs> {
		Ok(self.get_storage_map(STAKING, "Validators", stash, at_block)?.unwrap_or_default())
	}

	fn counter_for_validators(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(STAKING, "CounterForValidators", at_block)?
			.unwrap_or_default())
	}

	fn max_validators_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>> {
		self.get_storage_value(STAKING, "MaxValidatorsCount", at_block)
	}

	fn nominators(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Nominations>> {
		self.get_storage_map(STAKING, "Nominators", stash, at_block)
	}

	fn counter_for_nominators(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(STAKING, "CounterForNominators", at_block)?
			.unwrap_or_default())
	}

	fn max_nominators_count(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>> {
		self.get_storage_value(STAKING, "MaxNominatorsCount", at_block)
	}

	fn current_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<EraIndex>> {
		self.get_storage_value(STAKING, "CurrentEra", at_block)
	}

	fn active_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<ActiveEraInfo>> {
		self.get_storage_value(STAKING, "ActiveEra", at_block)
	}

	fn eras_start_session_index(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SessionIndex>> {
		self.get_storage_map(STAKING, "ErasStartSessionIndex", era, at_block)
	}

	fn eras_stakers(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Exposure> {
		Ok(self
			.get_storage_double_map(STAKING, "ErasStakers", era, stash, at_block)?
			.unwrap_or_default())
	}

	fn eras_stakers_clipped(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Exposure> {
		Ok(self
			.get_storage_double_map(STAKING, "ErasStakersClipped", era, stash, at_block)?
			.unwrap_or_default())
	}

	fn eras_validator_prefs(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<ValidatorPrefs> {
		Ok(self
			.get_storage_double_map(STAKING, "ErasValidatorPrefs", era, stash, at_block)?
			.unwrap_or_default())
	}

	fn eras_validator_reward(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Balance>> {
		self.get_storage_map(STAKING, "ErasValidatorReward", era, at_block)
	}

	fn eras_reward_points(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<EraRewardPoints> {
		Ok(self
			.get_storage_map(STAKING, "ErasRewardPoints", era, at_block)?
			.unwrap_or_default())
	}

	fn eras_total_stake(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Balance> {
		Ok(self.get_storage_map(STAKING, "ErasTotalStake", era, at_block)?.unwrap_or_default())
	}

	fn force_era(&self, at_block: Option<Self::Hash>) -> ApiResult<Forcing> {
		Ok(self.get_storage_value(STAKING, "ForceEra", at_block)?.unwrap_or_default())
	}

	fn slash_reward_fraction(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill> {
		Ok(self
			.get_storage_value(STAKING, "SlashRewardFraction", at_block)?
			.unwrap_or_default())
	}

	fn canceled_slash_payout(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self
			.get_storage_value(STAKING, "CanceledSlashPayout", at_block)?
			.unwrap_or_default())
	}

	fn unapplied_slashes(
		&self,
		era: &EraIndex,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<UnappliedSlash>> {
		Ok(self
			.get_storage_map(STAKING, "UnappliedSlashes", era, at_block)?
			.unwrap_or_default())
	}

	fn bonded_eras(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(EraIndex, SessionIndex)>> {
		Ok(self.get_storage_value(STAKING, "BondedEras", at_block)?.unwrap_or_default())
	}

	fn validator_slash_in_era(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(Perbill, Balance)>> {
		self.get_storage_double_map(STAKING, "ValidatorSlashInEra", era, stash, at_block)
	}

	fn nominator_slash_in_era(
		&self,
		era: &EraIndex,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Balance>> {
		self.get_storage_double_map(STAKING, "NominatorSlashInEra", era, stash, at_block)
	}

	fn slashing_spans(
		&self,
		stash: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SlashingSpans>> {
		self.get_storage_map(STAKING, "SlashingSpans", stash, at_block)
	}

	fn span_slash(
		&self,
		span: &(AccountId, u32),
		at_block: Option<Self::Hash>,
	) -> ApiResult<SpanRecord> {
		Ok(self.get_storage_map(STAKING, "SpanSlash", span, at_block)?.unwrap_or_default())
	}

	fn current_planned_session(&self, at_block: Option<Self::Hash>) -> ApiResult<SessionIndex> {
		Ok(self
			.get_storage_value(STAKING, "CurrentPlannedSession", at_block)?
			.unwrap_or_default())
	}

	fn offending_validators(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(u32, bool)>> {
		Ok(self
			.get_storage_value(STAKING, "OffendingValidators", at_block)?
			.unwrap_or_default())
	}

	fn permissioned_identity(
		&self,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<PermissionedIdentityPrefs>> {
		self.get_storage_map(STAKING, "PermissionedIdentity", did, at_block)
	}

	fn validator_commission_cap(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill> {
		Ok(self
			.get_storage_value(STAKING, "ValidatorCommissionCap", at_block)?
			.unwrap_or_default())
	}

	fn slashing_allowed_for(&self, at_block: Option<Self::Hash>) -> ApiResult<SlashingSwitch> {
		Ok(self
			.get_storage_value(STAKING, "SlashingAllowedFor", at_block)?
			.unwrap_or_default())
	}

	fn min_nominator_bond(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self.get_storage_value(STAKING, "MinNominatorBond", at_block)?.unwrap_or_default())
	}

	fn min_validator_bond(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self.get_storage_value(STAKING, "MinValidatorBond", at_block)?.unwrap_or_default())
	}

	fn minimum_active_stake(&self, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self
			.get_storage_value(STAKING, "MinimumActiveStake", at_block)?
			.unwrap_or_default())
	}

	fn min_commission(&self, at_block: Option<Self::Hash>) -> ApiResult<Perbill> {
		Ok(self.get_storage_value(STAKING, "MinCommission", at_block)?.unwrap_or_default())
	}

	fn chill_threshold(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<Percent>> {
		self.get_storage_value(STAKING, "ChillThreshold", at_block)
	}

	fn polymesh_storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self
			.get_storage_value(STAKING, "PolymeshStorageVersion", at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `ElectionProviderMultiPhase` pallet storage
/// queries. Signed submissions embed the runtime's compact solution type, so
/// `signed_submissions_map` is generic over the caller's submission type.
pub trait PalletElectionProviderApi {
	type Hash;

	fn round(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn current_phase(&self, at_block: Option<Self::Hash>) -> ApiResult<ElectionPhase>;
	fn queued_solution(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<ReadySolution>>;
	fn snapshot(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<RoundSnapshot>>;
	fn desired_targets(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>>;
	fn snapshot_metadata(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SolutionOrSnapshotSize>>;
	fn signed_submission_next_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn signed_submission_indices(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(ElectionScore, u32, u32)>>;
	fn signed_submissions_map<Submission: Decode>(
		&self,
		index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Submission>>;
	fn minimum_untrusted_score(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ElectionScore>>;
}

impl<RuntimeConfig, Client> PalletElectionProviderApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn round(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "Round", at_block)?
			.unwrap_or_default())
	}

	fn current_phase(&self, at_block: Option<Self::Hash>) -> ApiResult<ElectionPhase> {
		Ok(self
			.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "CurrentPhase", at_block)?
			.unwrap_or_default())
	}

	fn queued_solution(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<ReadySolution>> {
		self.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "QueuedSolution", at_block)
	}

	fn snapshot(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<RoundSnapshot>> {
		self.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "Snapshot", at_block)
	}

	fn desired_targets(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<u32>> {
		self.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "DesiredTargets", at_block)
	}

	fn snapshot_metadata(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SolutionOrSnapshotSize>> {
		self.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "SnapshotMetadata", at_block)
	}

	fn signed_submission_next_index(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self
			.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "SignedSubmissionNextIndex", at_block)?
			.unwrap_or_default())
	}

	fn signed_submission_indices(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(ElectionScore, u32, u32)>> {
		Ok(self
			.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "SignedSubmissionIndices", at_block)?
			.unwrap_or_default())
	}

	fn signed_submissions_map<Submission: Decode>(
		&self,
		index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Submission>> {
		self.get_storage_map(ELECTION_PROVIDER_MULTI_PHASE, "SignedSubmissionsMap", index, at_block)
	}

	fn minimum_untrusted_score(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ElectionScore>> {
		self.get_storage_value(ELECTION_PROVIDER_MULTI_PHASE, "MinimumUntrustedScore", at_block)
	}
}
