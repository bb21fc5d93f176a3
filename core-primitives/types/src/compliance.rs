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

//! Value types of the `ComplianceManager` pallet storage.

use crate::{
	identity::{Claim, ClaimType},
	IdentityId,
};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// Which claim types an issuer is trusted for.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum TrustedFor {
	Any,
	Specific(Vec<ClaimType>),
}

/// A claim issuer trusted for an asset's conditions.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct TrustedIssuer {
	pub issuer: IdentityId,
	pub trusted_for: TrustedFor,
}

/// The counterparty a condition singles out.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum TargetIdentity {
	ExternalAgent,
	Specific(IdentityId),
}

/// The predicate of a compliance condition.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum ConditionType {
	IsPresent(Claim),
	IsAbsent(Claim),
	IsAnyOf(Vec<Claim>),
	IsNoneOf(Vec<Claim>),
	IsIdentity(TargetIdentity),
}

/// A predicate plus the issuers whose claims may satisfy it.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Condition {
	pub condition_type: ConditionType,
	pub issuers: Vec<TrustedIssuer>,
}

/// One way a transfer can be compliant: all sender and receiver conditions hold.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct ComplianceRequirement {
	pub sender_conditions: Vec<Condition>,
	pub receiver_conditions: Vec<Condition>,
	pub id: u32,
}

/// The full compliance state of an asset.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetCompliance {
	pub paused: bool,
	pub requirements: Vec<ComplianceRequirement>,
}
