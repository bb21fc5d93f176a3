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

//! Raw storage-key computation. A storage cell is addressed by
//! `twox128(pallet) ++ twox128(item)`, with map and double-map cells
//! appending their hashed key argument(s).

#![cfg_attr(not(feature = "std"), no_std)]

use codec::Encode;
use sp_core::{blake2_128, blake2_256, twox_128, twox_256, twox_64};
use sp_std::vec::Vec;

pub mod error;
pub mod proof;
pub mod verify_storage_proof;

pub use error::Error;
pub use proof::StorageProofChecker;
pub use verify_storage_proof::{verify_storage_entries, VerifyStorageProof};

/// The hashers a pallet may declare for its map keys.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum StorageHasher {
	Blake2_128,
	Blake2_256,
	Blake2_128Concat,
	Twox128,
	Twox256,
	Twox64Concat,
	Identity,
}

pub fn storage_value_key(module_prefix: &str, storage_prefix: &str) -> Vec<u8> {
	let mut bytes = twox_128(module_prefix.as_bytes()).to_vec();
	bytes.extend(&twox_128(storage_prefix.as_bytes())[..]);
	bytes
}

pub fn storage_map_key<K: Encode>(
	module_prefix: &str,
	storage_prefix: &str,
	mapkey1: &K,
	hasher1: &StorageHasher,
) -> Vec<u8> {
	let mut bytes = storage_value_key(module_prefix, storage_prefix);
	bytes.extend(key_hash(mapkey1, hasher1));
	bytes
}

pub fn storage_double_map_key<K: Encode, Q: Encode>(
	module_prefix: &str,
	storage_prefix: &str,
	mapkey1: &K,
	hasher1: &StorageHasher,
	mapkey2: &Q,
	hasher2: &StorageHasher,
) -> Vec<u8> {
	let mut bytes = storage_value_key(module_prefix, storage_prefix);
	bytes.extend(key_hash(mapkey1, hasher1));
	bytes.extend(key_hash(mapkey2, hasher2));
	bytes
}

/// Hashes the encoded key with the declared hasher. The `..Concat` and
/// `Identity` hashers keep the plain key in the output, which is what makes
/// storage iteration able to recover the key.
fn key_hash<K: Encode>(key: &K, hasher: &StorageHasher) -> Vec<u8> {
	let encoded_key = key.encode();
	match hasher {
		StorageHasher::Identity => encoded_key.to_vec(),
		StorageHasher::Blake2_128 => blake2_128(&encoded_key).to_vec(),
		StorageHasher::Blake2_128Concat => {
			let mut key = blake2_128(&encoded_key).to_vec();
			key.extend(encoded_key);
			key
		},
		StorageHasher::Blake2_256 => blake2_256(&encoded_key).to_vec(),
		StorageHasher::Twox128 => twox_128(&encoded_key).to_vec(),
		StorageHasher::Twox256 => twox_256(&encoded_key).to_vec(),
		StorageHasher::Twox64Concat => {
			let mut key = twox_64(&encoded_key).to_vec();
			key.extend(encoded_key);
			key
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn storage_value_key_matches_known_chain_keys() {
		assert_eq!(
			storage_value_key("Timestamp", "Now"),
			hex!("f0c365c3cf59d671eb72da0e7a4113c49f89c901449ab205580c61ebd39faecb").to_vec()
		);
		assert_eq!(
			storage_value_key("Balances", "TotalIssuance"),
			hex!("c2261276cc9d1f8598ea4b6a74b15c2f57c875e4cff74148e4628f264b974c80").to_vec()
		);
	}

	#[test]
	fn map_keys_start_with_the_item_prefix() {
		let account = [42u8; 32];
		let key =
			storage_map_key("System", "Account", &account, &StorageHasher::Blake2_128Concat);
		assert_eq!(
			key[..32],
			hex!("26aa394eea5630e07c48ae0c9558cef7b99d880ec681799c0cf30e8886371da9")
		);
		// blake2_128 digest + the encoded key itself
		assert_eq!(key.len(), 32 + 16 + 32);
		assert_eq!(key[48..], account);
	}

	#[test]
	fn concat_hashers_preserve_the_encoded_key() {
		let id = 7u64;
		let twox = key_hash(&id, &StorageHasher::Twox64Concat);
		assert_eq!(twox.len(), 8 + 8);
		assert_eq!(twox[8..], id.encode());

		let identity = key_hash(&id, &StorageHasher::Identity);
		assert_eq!(identity, id.encode());
	}

	#[test]
	fn double_map_key_appends_both_hashed_keys() {
		let key = storage_double_map_key(
			"Settlement",
			"InstructionLegs",
			&3u64,
			&StorageHasher::Twox64Concat,
			&0u64,
			&StorageHasher::Twox64Concat,
		);
		assert_eq!(key.len(), 32 + 16 + 16);
		assert_eq!(key[..32], storage_value_key("Settlement", "InstructionLegs")[..]);
	}
}
