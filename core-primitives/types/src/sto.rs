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

//! Value types of the `Sto` pallet storage.

use crate::{portfolio::PortfolioId, settlement::VenueId, AssetId, Balance, IdentityId, Moment, PalletString};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FundraiserId(pub u64);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct FundraiserName(pub PalletString);

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum FundraiserStatus {
	Live,
	Frozen,
	Closed,
	ClosedEarly,
}

/// One price tier of a fundraiser, as stored: the original size and what is left.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct FundraiserTier {
	pub total: Balance,
	pub price: Balance,
	pub remaining: Balance,
}

/// A running or finished security token offering.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Fundraiser {
	pub creator: IdentityId,
	pub offering_portfolio: PortfolioId,
	pub offering_asset: AssetId,
	pub raising_portfolio: PortfolioId,
	pub raising_asset: AssetId,
	pub tiers: Vec<FundraiserTier>,
	pub venue_id: VenueId,
	pub start: Moment,
	pub end: Option<Moment>,
	pub status: FundraiserStatus,
	pub minimum_investment: Balance,
}
