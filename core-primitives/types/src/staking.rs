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

//! Value types of the `Staking` and `ElectionProviderMultiPhase` pallet
//! storage. The chain runs a fork of substrate staking that gates validators
//! on permissioned identities, so the fork-specific records live here rather
//! than coming from a pallet crate.

use crate::{AccountId, Balance, BlockNumber, Moment};
use codec::{Decode, Encode};
use sp_npos_elections::{ElectionScore, Support};
use sp_runtime::Perbill;
use sp_std::{collections::btree_map::BTreeMap, prelude::Vec};

/// The active era: its index and when it started (set one block into the era).
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct ActiveEraInfo {
	pub index: u32,
	pub start: Option<Moment>,
}

/// Reward points of an era, total and per validator.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct EraRewardPoints {
	pub total: u32,
	pub individual: BTreeMap<AccountId, u32>,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct IndividualExposure {
	pub who: AccountId,
	#[codec(compact)]
	pub value: Balance,
}

/// A validator's own stake plus the stake nominated to it, for one era.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Exposure {
	#[codec(compact)]
	pub total: Balance,
	#[codec(compact)]
	pub own: Balance,
	pub others: Vec<IndividualExposure>,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct ValidatorPrefs {
	#[codec(compact)]
	pub commission: Perbill,
	pub blocked: bool,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Forcing {
	NotForcing,
	ForceNew,
	ForceNone,
	ForceAlways,
}

impl Default for Forcing {
	fn default() -> Self {
		Self::NotForcing
	}
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Nominations {
	pub targets: Vec<AccountId>,
	pub submitted_in: u32,
	pub suppressed: bool,
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum RewardDestination {
	Staked,
	Stash,
	Controller,
	Account(AccountId),
	None,
}

impl Default for RewardDestination {
	fn default() -> Self {
		Self::Staked
	}
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct UnlockChunk {
	#[codec(compact)]
	pub value: Balance,
	#[codec(compact)]
	pub era: u32,
}

/// The bonding ledger of a stash/controller pair.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct StakingLedger {
	pub stash: AccountId,
	#[codec(compact)]
	pub total: Balance,
	#[codec(compact)]
	pub active: Balance,
	pub unlocking: Vec<UnlockChunk>,
	pub claimed_rewards: Vec<u32>,
}

/// Slashing history of a stash, pruned past the bonding window.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct SlashingSpans {
	pub span_index: u32,
	pub last_start: u32,
	pub last_nonzero_slash: u32,
	pub prior: Vec<u32>,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct SpanRecord {
	pub slashed: Balance,
	pub paid_out: Balance,
}

/// A slash that waits out the deferral period before being applied.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct UnappliedSlash {
	pub validator: AccountId,
	pub own: Balance,
	pub others: Vec<(AccountId, Balance)>,
	pub reporters: Vec<AccountId>,
	pub payout: Balance,
}

/// Who slashing currently applies to. The fork allows disabling nominator
/// slashing while governance vets misbehaviour.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SlashingSwitch {
	Validator,
	ValidatorAndNominator,
	None,
}

impl Default for SlashingSwitch {
	fn default() -> Self {
		Self::Validator
	}
}

/// Per-identity validator allowance: how many validator slots the identity
/// asked for and how many are running.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct PermissionedIdentityPrefs {
	pub intended_count: u32,
	pub running_count: u32,
}

/// Phase of the multi-phase election for the next validator set.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElectionPhase {
	Off,
	Signed,
	Unsigned((bool, BlockNumber)),
	Emergency,
}

impl Default for ElectionPhase {
	fn default() -> Self {
		Self::Off
	}
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElectionCompute {
	OnChain,
	Signed,
	Unsigned,
	Fallback,
	Emergency,
}

/// A solution ready to be applied at the end of the election round.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct ReadySolution {
	pub supports: Vec<(AccountId, Support<AccountId>)>,
	pub score: ElectionScore,
	pub compute: ElectionCompute,
}

/// The frozen voter/target lists a solution must be computed against.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct RoundSnapshot {
	pub voters: Vec<(AccountId, u64, Vec<AccountId>)>,
	pub targets: Vec<AccountId>,
}

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct SolutionOrSnapshotSize {
	#[codec(compact)]
	pub voters: u32,
	#[codec(compact)]
	pub targets: u32,
}
