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

//! Value types of the `CorporateAction`, `CorporateBallot` and
//! `CapitalDistribution` pallet storage.

use crate::{
	checkpoint::{CheckpointId, ScheduleId},
	portfolio::PortfolioId,
	AssetId, Balance, IdentityId, Moment, PalletString,
};
use codec::{Decode, Encode};
use sp_runtime::Permill;
use sp_std::prelude::Vec;

/// Withholding tax on benefits, as a per-million fraction.
pub type Tax = Permill;

/// Per-asset sequence number of a corporate action.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LocalCAId(pub u32);

/// Fully qualifies a corporate action: the asset plus the per-asset sequence number.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CAId {
	pub asset_id: AssetId,
	pub local_id: LocalCAId,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum CAKind {
	PredictableBenefit,
	UnpredictableBenefit,
	IssuerNotice,
	Reorganization,
	Other,
}

impl Default for CAKind {
	fn default() -> Self {
		Self::Other
	}
}

/// Where a record date's holder snapshot comes from: a schedule slot or an
/// existing checkpoint.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum CACheckpoint {
	Scheduled(ScheduleId, u64),
	Existing(CheckpointId),
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub struct RecordDate {
	pub date: Moment,
	pub checkpoint: CACheckpoint,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum TargetTreatment {
	Include,
	Exclude,
}

impl Default for TargetTreatment {
	fn default() -> Self {
		Self::Include
	}
}

/// The identities a corporate action applies to, as a white- or blacklist.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct TargetIdentities {
	pub identities: Vec<IdentityId>,
	pub treatment: TargetTreatment,
}

/// A corporate action as stored, minus the per-CA free-form details text.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct CorporateAction {
	pub kind: CAKind,
	pub decl_date: Moment,
	pub record_date: Option<RecordDate>,
	pub targets: TargetIdentities,
	pub default_withholding_tax: Tax,
	pub withholding_tax: Vec<(IdentityId, Tax)>,
}

/// A benefit distribution attached to a corporate action.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Distribution {
	pub from: PortfolioId,
	pub currency: AssetId,
	pub per_share: Balance,
	pub amount: Balance,
	pub remaining: Balance,
	pub reclaimed: bool,
	pub payment_at: Moment,
	pub expires_at: Option<Moment>,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct BallotTitle(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct MotionTitle(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct MotionInfoLink(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct ChoiceTitle(pub PalletString);

/// One question on a ballot and its answer choices.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Motion {
	pub title: MotionTitle,
	pub info_link: MotionInfoLink,
	pub choices: Vec<ChoiceTitle>,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct BallotMeta {
	pub title: BallotTitle,
	pub motions: Vec<Motion>,
}

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct BallotTimeRange {
	pub start: Moment,
	pub end: Moment,
}

/// Voting power assigned to one choice, with an optional ranked-choice fallback.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct BallotVote {
	pub power: Balance,
	pub fallback: Option<u16>,
}
