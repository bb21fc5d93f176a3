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

//! Value types of the `Pips` (Polymesh improvement proposals) pallet storage.

use crate::{AccountId, Balance, BlockNumber, MaybeBlock, PalletString, Url};
use codec::{Decode, Encode};

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PipId(pub u32);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SnapshotId(pub u32);

/// Which governance committee a proposal originated from, if not the community.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Committee {
	Technical,
	Upgrade,
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum Proposer {
	Community(AccountId),
	Committee(Committee),
}

/// A proposal, generic over the runtime call it carries.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Pip<Proposal> {
	pub id: PipId,
	pub proposal: Proposal,
	pub proposer: Proposer,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct PipDescription(pub PalletString);

/// The off-chain metadata of a proposal.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct PipsMetadata {
	pub id: PipId,
	pub url: Option<Url>,
	pub description: Option<PipDescription>,
	pub created_at: BlockNumber,
	pub transaction_version: u32,
	pub expiry: MaybeBlock<BlockNumber>,
}

/// The bond a voter or proposer has locked behind a proposal.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct DepositInfo {
	pub owner: AccountId,
	pub amount: Balance,
}

/// An aye/nay vote weighted by the locked deposit.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Vote(pub bool, pub Balance);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct VotingResult {
	pub ayes_count: u32,
	pub ayes_stake: Balance,
	pub nays_count: u32,
	pub nays_stake: Balance,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ProposalState {
	Pending,
	Rejected,
	Scheduled,
	Failed,
	Executed,
	Expired,
}

impl Default for ProposalState {
	fn default() -> Self {
		Self::Pending
	}
}

/// Metadata of the snapshot the governance council last took of the live queue.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct SnapshotMetadata {
	pub created_at: BlockNumber,
	pub made_by: AccountId,
	pub id: SnapshotId,
}

/// A proposal as frozen in a snapshot: its id and aggregate stake, signed.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct SnapshottedPip {
	pub id: PipId,
	pub weight: (bool, Balance),
}
