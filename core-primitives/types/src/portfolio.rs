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

//! Portfolio identifiers. Balances are partitioned per identity into a default
//! portfolio and any number of numbered user portfolios.

use crate::{IdentityId, PalletString};
use codec::{Decode, Encode};

/// Per-identity sequence number of a user portfolio.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioNumber(pub u64);

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PortfolioKind {
	Default,
	User(PortfolioNumber),
}

impl Default for PortfolioKind {
	fn default() -> Self {
		Self::Default
	}
}

/// Fully qualifies a portfolio: the owning identity plus which of its portfolios.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioId {
	pub did: IdentityId,
	pub kind: PortfolioKind,
}

impl PortfolioId {
	pub fn default_portfolio(did: IdentityId) -> Self {
		Self { did, kind: PortfolioKind::Default }
	}

	pub fn user_portfolio(did: IdentityId, num: PortfolioNumber) -> Self {
		Self { did, kind: PortfolioKind::User(num) }
	}
}

/// Display name of a user portfolio, unique per identity.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct PortfolioName(pub PalletString);
