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

//! Value types of the `Settlement` pallet storage.

use crate::{
	nft::NFTId, portfolio::PortfolioId, AccountId, AssetId, Balance, BlockNumber, IdentityId,
	Moment, PalletString, Ticker,
};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VenueId(pub u64);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InstructionId(pub u64);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LegId(pub u64);

/// How a venue self-describes; purely informational.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum VenueType {
	Other,
	Distribution,
	Sto,
	Exchange,
}

impl Default for VenueType {
	fn default() -> Self {
		Self::Other
	}
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Venue {
	pub creator: IdentityId,
	pub venue_type: VenueType,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct VenueDetails(pub PalletString);

/// When an instruction may execute: as soon as all parties affirm, at a given
/// block, or only on an explicit manual trigger after the given block.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SettlementType {
	SettleOnAffirmation,
	SettleOnBlock(BlockNumber),
	SettleManual(BlockNumber),
}

impl Default for SettlementType {
	fn default() -> Self {
		Self::SettleOnAffirmation
	}
}

/// Details of a settlement instruction.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Instruction {
	pub instruction_id: InstructionId,
	pub venue_id: Option<VenueId>,
	pub settlement_type: SettlementType,
	pub created_at: Option<Moment>,
	pub trade_date: Option<Moment>,
	pub value_date: Option<Moment>,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum InstructionStatus {
	Unknown,
	Pending,
	Failed,
	Success(BlockNumber),
	Rejected(BlockNumber),
}

impl Default for InstructionStatus {
	fn default() -> Self {
		Self::Unknown
	}
}

/// A batch of non-fungible tokens of one asset.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct NFTs {
	pub asset_id: AssetId,
	pub ids: Vec<NFTId>,
}

/// One movement within an instruction.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum Leg {
	Fungible { sender: PortfolioId, receiver: PortfolioId, asset_id: AssetId, amount: Balance },
	NonFungible { sender: PortfolioId, receiver: PortfolioId, nfts: NFTs },
	OffChain { sender_identity: IdentityId, receiver_identity: IdentityId, ticker: Ticker, amount: Balance },
}

/// Execution state of a leg once its instruction starts settling.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum LegStatus {
	PendingTokenLock,
	ExecutionPending,
	/// Execution is skipped in favour of an off-chain receipt: (signer, receipt uid).
	ExecutionToBeSkipped(AccountId, u64),
}

impl Default for LegStatus {
	fn default() -> Self {
		Self::PendingTokenLock
	}
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum AffirmationStatus {
	Unknown,
	Pending,
	Affirmed,
}

impl Default for AffirmationStatus {
	fn default() -> Self {
		Self::Unknown
	}
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum MediatorAffirmationStatus {
	Unknown,
	Pending,
	Affirmed { expiry: Option<Moment> },
}

impl Default for MediatorAffirmationStatus {
	fn default() -> Self {
		Self::Unknown
	}
}
