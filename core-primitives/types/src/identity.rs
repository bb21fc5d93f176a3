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

//! Value types of the `Identity` pallet storage.

use crate::{
	agents::AgentGroup, portfolio::PortfolioId, secondary_key::Permissions, AccountId, AssetId,
	Balance, IdentityId, Moment, PalletString, Ticker,
};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// A DID record tracks only the primary key; secondary keys live in `KeyRecords`.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct DidRecord {
	pub primary_key: Option<AccountId>,
}

/// Reverse mapping of an account key to the identity (or multisig) it belongs to.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum KeyRecord {
	PrimaryKey(IdentityId),
	SecondaryKey(IdentityId),
	MultiSigSignerKey(AccountId),
}

/// Anything that can authorize or be authorized: an identity or a raw account key.
#[derive(Encode, Decode, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Signatory {
	Identity(IdentityId),
	Account(AccountId),
}

impl Default for Signatory {
	fn default() -> Self {
		Self::Identity(IdentityId::default())
	}
}

/// The payload of an authorization, one variant per authorizable action.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum AuthorizationData {
	AttestPrimaryKeyRotation(IdentityId),
	RotatePrimaryKey,
	TransferTicker(Ticker),
	AddMultiSigSigner(AccountId),
	TransferAssetOwnership(AssetId),
	JoinIdentity(Permissions),
	PortfolioCustody(PortfolioId),
	BecomeAgent(AssetId, AgentGroup),
	AddRelayerPayingKey(AccountId, AccountId, Balance),
	RotatePrimaryKeyToSecondary(Permissions),
}

/// An authorization waiting for the target to accept or reject it.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Authorization {
	pub authorization_data: AuthorizationData,
	pub authorized_by: IdentityId,
	pub expiry: Option<Moment>,
	pub auth_id: u64,
}

/// Id of a claim type registered at runtime via `register_custom_claim_type`.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct CustomClaimTypeId(pub u32);

/// The cdd provider's confidential identifier of a verified identity.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct CddId(pub [u8; 32]);

/// The scope a claim applies to.
#[derive(Encode, Decode, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Scope {
	Identity(IdentityId),
	Asset(AssetId),
	Custom(Vec<u8>),
}

/// A claim without its payload, used to key claims in storage.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ClaimType {
	Accredited,
	Affiliate,
	BuyLockup,
	SellLockup,
	CustomerDueDiligence,
	KnowYourCustomer,
	Jurisdiction,
	Exempted,
	Blocked,
	Custom(CustomClaimTypeId),
}

/// An attestation issued about an identity.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum Claim {
	Accredited(Scope),
	Affiliate(Scope),
	BuyLockup(Scope),
	SellLockup(Scope),
	CustomerDueDiligence(CddId),
	KnowYourCustomer(Scope),
	Jurisdiction(CountryCode, Scope),
	Exempted(Scope),
	Blocked(Scope),
	Custom(CustomClaimTypeId, Option<Scope>),
}

impl Claim {
	pub fn claim_type(&self) -> ClaimType {
		match self {
			Claim::Accredited(..) => ClaimType::Accredited,
			Claim::Affiliate(..) => ClaimType::Affiliate,
			Claim::BuyLockup(..) => ClaimType::BuyLockup,
			Claim::SellLockup(..) => ClaimType::SellLockup,
			Claim::CustomerDueDiligence(..) => ClaimType::CustomerDueDiligence,
			Claim::KnowYourCustomer(..) => ClaimType::KnowYourCustomer,
			Claim::Jurisdiction(..) => ClaimType::Jurisdiction,
			Claim::Exempted(..) => ClaimType::Exempted,
			Claim::Blocked(..) => ClaimType::Blocked,
			Claim::Custom(id, ..) => ClaimType::Custom(*id),
		}
	}
}

/// A claim together with its issuance book-keeping.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct IdentityClaim {
	pub claim_issuer: IdentityId,
	pub issuance_date: Moment,
	pub last_update_date: Moment,
	pub expiry: Option<Moment>,
	pub claim: Claim,
}

/// First key of the `Claims` double map: who the claim is about and which kind it is.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Claim1stKey {
	pub target: IdentityId,
	pub claim_type: ClaimType,
}

/// Second key of the `Claims` double map: who issued the claim, under which scope.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Claim2ndKey {
	pub issuer: IdentityId,
	pub scope: Option<Scope>,
}

/// Ascii name of a custom claim type.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct CustomClaimTypeName(pub PalletString);

/// ISO-3166-1 alpha-2 country codes, in the order the runtime declares them.
#[rustfmt::skip]
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CountryCode {
	AF, AX, AL, DZ, AS, AD, AO, AI, AQ, AG, AR, AM, AW, AU, AT, AZ, BS, BH, BD, BB,
	BY, BE, BZ, BJ, BM, BT, BO, BA, BW, BV, BR, VG, IO, BN, BG, BF, BI, KH, CM, CA,
	CV, KY, CF, TD, CL, CN, HK, MO, CX, CC, CO, KM, CG, CD, CK, CR, CI, HR, CU, CY,
	CZ, DK, DJ, DM, DO, EC, EG, SV, GQ, ER, EE, ET, FK, FO, FJ, FI, FR, GF, PF, TF,
	GA, GM, GE, DE, GH, GI, GR, GL, GD, GP, GU, GT, GG, GN, GW, GY, HT, HM, VA, HN,
	HU, IS, IN, ID, IR, IQ, IE, IM, IL, IT, JM, JP, JE, JO, KZ, KE, KI, KP, KR, KW,
	KG, LA, LV, LB, LS, LR, LY, LI, LT, LU, MK, MG, MW, MY, MV, ML, MT, MH, MQ, MR,
	MU, YT, MX, FM, MD, MC, MN, ME, MS, MA, MZ, MM, NA, NR, NP, NL, AN, NC, NZ, NI,
	NE, NG, NU, NF, MP, NO, OM, PK, PW, PS, PA, PG, PY, PE, PH, PN, PL, PT, PR, QA,
	RE, RO, RU, RW, BL, SH, KN, LC, MF, PM, VC, WS, SM, ST, SA, SN, RS, SC, SL, SG,
	SK, SI, SB, SO, ZA, GS, SS, ES, LK, SD, SR, SJ, SZ, SE, CH, SY, TW, TJ, TZ, TH,
	TL, TG, TK, TO, TT, TN, TR, TM, TC, TV, UG, UA, AE, GB, US, UM, UY, UZ, VU, VE,
	VN, VI, WF, EH, YE, ZM, ZW, BQ, CW, SX,
}
