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

//! Value types of the `Asset` pallet storage.

use crate::{Balance, IdentityId, Moment, PalletString, Url};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// Id of an asset type registered at runtime via `register_custom_asset_type`.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct CustomAssetTypeId(pub u32);

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum NonFungibleType {
	Derivative,
	FixedIncome,
	Invoice,
	Custom(CustomAssetTypeId),
}

/// The broad class of an asset.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum AssetType {
	EquityCommon,
	EquityPreferred,
	Commodity,
	FixedIncome,
	REIT,
	Fund,
	RevenueShareAgreement,
	StructuredProduct,
	Derivative,
	Custom(CustomAssetTypeId),
	StableCoin,
	NonFungible(NonFungibleType),
}

impl Default for AssetType {
	fn default() -> Self {
		Self::EquityCommon
	}
}

/// Core record of an asset: supply, owner, divisibility and class.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetDetails {
	pub total_supply: Balance,
	pub owner_did: IdentityId,
	pub divisible: bool,
	pub asset_type: AssetType,
}

/// External registry identifiers an asset may carry. Validity of the
/// embedded check digits is enforced at issuance, not here.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum AssetIdentifier {
	CUSIP([u8; 9]),
	CINS([u8; 9]),
	ISIN([u8; 12]),
	LEI([u8; 20]),
	FIGI([u8; 12]),
}

/// Hash of a document attached to an asset, tagged with its width.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum DocumentHash {
	None,
	H512([u8; 64]),
	H384([u8; 48]),
	H320([u8; 40]),
	H256([u8; 32]),
	H224([u8; 28]),
	H192([u8; 24]),
	H160([u8; 20]),
	H128([u8; 16]),
}

impl Default for DocumentHash {
	fn default() -> Self {
		Self::None
	}
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct DocumentName(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct DocumentUri(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct DocumentType(pub PalletString);

/// A document attached to an asset.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Document {
	pub uri: DocumentUri,
	pub content_hash: DocumentHash,
	pub name: DocumentName,
	pub doc_type: Option<DocumentType>,
	pub filing_date: Option<Moment>,
}

/// A ticker registration, held by an identity until it expires.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct TickerRegistration {
	pub owner: IdentityId,
	pub expiry: Option<Moment>,
}

/// Parameters governing fresh ticker registrations.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct TickerRegistrationConfig {
	pub max_ticker_length: u8,
	pub registration_length: Option<Moment>,
}

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct AssetMetadataGlobalKey(pub u64);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct AssetMetadataLocalKey(pub u64);

/// A metadata key, either registered globally by governance or locally per asset.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum AssetMetadataKey {
	Global(AssetMetadataGlobalKey),
	Local(AssetMetadataLocalKey),
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetMetadataName(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetMetadataValue(pub Vec<u8>);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetMetadataDescription(pub PalletString);

/// Off-chain documentation of what a metadata key means and how its value is typed.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetMetadataSpec {
	pub url: Option<Url>,
	pub description: Option<AssetMetadataDescription>,
	pub type_def: Option<Vec<u8>>,
}

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum AssetMetadataLockStatus {
	Unlocked,
	Locked,
	LockedUntil(Moment),
}

impl Default for AssetMetadataLockStatus {
	fn default() -> Self {
		Self::Unlocked
	}
}

/// Expiry and lock state of a metadata value.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetMetadataValueDetail {
	pub expire: Option<Moment>,
	pub lock_status: AssetMetadataLockStatus,
}

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct AssetName(pub PalletString);

#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FundingRoundName(pub PalletString);
