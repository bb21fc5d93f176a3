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

//! Type declarations for everything the chain keeps in storage. The node-api
//! crates decode raw state values into these, so every declaration here must
//! be SCALE-compatible with what the runtime pallets encode.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode};
pub use sp_core::crypto::AccountId32 as AccountId;
use sp_core::H256;
use sp_runtime::{
	generic::{Block as BlockG, Header as HeaderG, SignedBlock as SignedBlockG},
	traits::BlakeTwo256,
	OpaqueExtrinsic,
};

pub mod agents;
pub mod asset;
pub mod bridge;
pub mod checkpoint;
pub mod committee;
pub mod compliance;
pub mod contracts;
pub mod corporate_actions;
pub mod grandpa;
pub mod group;
pub mod identity;
pub mod multisig;
pub mod nft;
pub mod pips;
pub mod portfolio;
pub mod preimage;
pub mod protocol_fee;
pub mod relayer;
pub mod secondary_key;
pub mod settlement;
pub mod staking;
pub mod state_trie_migration;
pub mod statistics;
pub mod sto;
pub mod storage;

/// Substrate runtimes provide no string type. Hence, for arbitrary data of varying length the
/// `Vec<u8>` is used. In the polkadot-js the typedef `Text` is used to automatically
/// utf8 decode bytes into a string.
#[cfg(not(feature = "std"))]
pub type PalletString = sp_std::vec::Vec<u8>;

#[cfg(feature = "std")]
pub type PalletString = String;

// Basic Types.
pub type Index = u32;
pub type Balance = u128;
pub type Moment = u64;
pub type Hash = H256;

// Account Types.
pub type AccountData = pallet_balances::AccountData<Balance>;
pub type AccountInfo = frame_system::AccountInfo<Index, AccountData>;

// Block Types.
pub type BlockNumber = u32;
pub type Header = HeaderG<BlockNumber, BlakeTwo256>;
pub type Block = BlockG<Header, OpaqueExtrinsic>;
pub type SignedBlock = SignedBlockG<Block>;
pub type BlockHash = H256;

/// The identifier an on-chain identity (DID) is addressed by.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityId(pub [u8; 32]);

impl From<[u8; 32]> for IdentityId {
	fn from(raw: [u8; 32]) -> Self {
		Self(raw)
	}
}

/// An asset ticker: fixed width, ascii, zero padded.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticker(pub [u8; 12]);

impl From<[u8; 12]> for Ticker {
	fn from(raw: [u8; 12]) -> Self {
		Self(raw)
	}
}

/// The unique identifier of an asset, assigned at creation from the issuer's nonce.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(pub [u8; 16]);

impl From<[u8; 16]> for AssetId {
	fn from(raw: [u8; 16]) -> Self {
		Self(raw)
	}
}

/// Free-form memo attached to transfers and instructions.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Memo(pub [u8; 32]);

/// A numerator/denominator pair used by the protocol fee pallet.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct PosRatio(pub u32, pub u32);

/// Either a block number, or nothing.
///
/// The chain encodes this instead of `Option<BlockNumber>` to keep the
/// polkadot-js representation distinguishable from optional storage values.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum MaybeBlock<BlockNumber> {
	Some(BlockNumber),
	None,
}

impl<BlockNumber> Default for MaybeBlock<BlockNumber> {
	fn default() -> Self {
		Self::None
	}
}

/// A url, utf8 encoded.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Url(pub PalletString);

/// Per-asset sequence number of an attached document.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct DocumentId(pub u32);

/// Storage-format marker of the transaction-payment pallet.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum TransactionPaymentReleases {
	/// Original format.
	V1Ancient,
	/// One-time migrated multiplier format.
	V2,
}

impl Default for TransactionPaymentReleases {
	fn default() -> Self {
		Self::V1Ancient
	}
}

/// The session keys of the runtime, in declaration order.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct SessionKeys {
	pub grandpa: sp_consensus_grandpa::AuthorityId,
	pub babe: sp_consensus_babe::AuthorityId,
	pub im_online: sp_core::sr25519::Public,
	pub authority_discovery: sp_core::sr25519::Public,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		portfolio::{PortfolioId, PortfolioKind, PortfolioNumber},
		settlement::AffirmationStatus,
	};

	#[test]
	fn maybe_block_encodes_like_the_runtime() {
		// `Some` is variant 0, `None` variant 1; this is NOT the `Option` layout.
		assert_eq!(MaybeBlock::Some(5u32).encode(), [vec![0u8], 5u32.encode()].concat());
		assert_eq!(MaybeBlock::<BlockNumber>::None.encode(), vec![1u8]);
		assert_eq!(MaybeBlock::<BlockNumber>::default(), MaybeBlock::None);
	}

	#[test]
	fn portfolio_id_encoding_distinguishes_default_and_user() {
		let did = IdentityId([1u8; 32]);
		let default = PortfolioId::default_portfolio(did);
		let user = PortfolioId::user_portfolio(did, PortfolioNumber(7));

		let default_encoded = default.encode();
		let user_encoded = user.encode();
		assert_eq!(default_encoded.len(), 33);
		assert_eq!(default_encoded[32], 0);
		assert_eq!(user_encoded.len(), 41);
		assert_eq!(user_encoded[32], 1);
		assert_eq!(PortfolioId::decode(&mut default_encoded.as_slice()).unwrap(), default);
		assert_eq!(PortfolioKind::default(), PortfolioKind::Default);
	}

	#[test]
	fn affirmation_status_defaults_to_unknown() {
		// Storage reads of unset double-map cells decode the default variant.
		assert_eq!(AffirmationStatus::default(), AffirmationStatus::Unknown);
		assert_eq!(AffirmationStatus::Unknown.encode(), vec![0u8]);
		assert_eq!(AffirmationStatus::Affirmed.encode(), vec![2u8]);
	}

	#[test]
	fn id_newtypes_are_transparent_over_their_raw_bytes() {
		let ticker = Ticker(*b"ACME\0\0\0\0\0\0\0\0");
		assert_eq!(ticker.encode(), b"ACME\0\0\0\0\0\0\0\0".to_vec());

		let asset_id = AssetId([9u8; 16]);
		assert_eq!(asset_id.encode(), vec![9u8; 16]);
		assert_eq!(AssetId::decode(&mut asset_id.encode().as_slice()).unwrap(), asset_id);
	}
}
