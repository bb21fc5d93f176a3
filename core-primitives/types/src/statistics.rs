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

//! Value types of the `Statistics` pallet storage.

use crate::{
	identity::{ClaimType, CountryCode},
	AssetId, IdentityId,
};
use codec::{Decode, Encode};
use sp_runtime::Permill;
use sp_std::collections::btree_set::BTreeSet;

/// What a statistic counts: holders or their balances.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum StatOpType {
	Count,
	Balance,
}

/// A tracked statistic, optionally partitioned by a claim from a given issuer.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct StatType {
	pub op: StatOpType,
	pub claim_issuer: Option<(ClaimType, IdentityId)>,
}

/// The claim payload variants statistics can partition by.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum StatClaim {
	Accredited(bool),
	Affiliate(bool),
	Jurisdiction(Option<CountryCode>),
}

/// First key of the `AssetStats` double map.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub struct Stat1stKey {
	pub asset_id: AssetId,
	pub stat_type: StatType,
}

/// Second key of the `AssetStats` double map: the partition the count applies to.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stat2ndKey {
	NoClaimStat,
	Claim(StatClaim),
}

/// A transfer restriction backed by a tracked statistic.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum TransferCondition {
	MaxInvestorCount(u64),
	MaxInvestorOwnership(Permill),
	ClaimCount(StatClaim, IdentityId, u64, Option<u64>),
	ClaimOwnership(StatClaim, IdentityId, Permill, Permill),
}

/// All transfer restrictions active for one asset.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetTransferCompliance {
	pub paused: bool,
	pub requirements: BTreeSet<TransferCondition>,
}

/// Key under which identities are exempted from a transfer condition.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub struct TransferConditionExemptKey {
	pub asset_id: AssetId,
	pub op: StatOpType,
	pub claim_type: Option<ClaimType>,
}
