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

//! Permission subsets attached to an identity's secondary keys.

use crate::{portfolio::PortfolioId, AssetId, PalletString};
use codec::{Decode, Encode};
use sp_std::collections::btree_set::BTreeSet;

/// A subset of some universe of elements: everything, a whitelist or a blacklist.
#[derive(Encode, Decode, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum SubsetRestriction<A: Ord> {
	Whole,
	These(BTreeSet<A>),
	Except(BTreeSet<A>),
}

impl<A: Ord> Default for SubsetRestriction<A> {
	fn default() -> Self {
		Self::Whole
	}
}

/// Name of a pallet, as spelled in the runtime metadata.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct PalletName(pub PalletString);

/// Name of a dispatchable function within a pallet.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct DispatchableName(pub PalletString);

/// The dispatchables of one pallet a key is allowed to call.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct PalletPermissions {
	pub pallet_name: PalletName,
	pub dispatchable_names: SubsetRestriction<DispatchableName>,
}

pub type AssetPermissions = SubsetRestriction<AssetId>;
pub type PortfolioPermissions = SubsetRestriction<PortfolioId>;
pub type ExtrinsicPermissions = SubsetRestriction<PalletPermissions>;

/// Everything a secondary key is allowed to touch.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Permissions {
	pub asset: AssetPermissions,
	pub extrinsic: ExtrinsicPermissions,
	pub portfolio: PortfolioPermissions,
}
