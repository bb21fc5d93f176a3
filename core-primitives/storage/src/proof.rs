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

//! Reading storage values out of a state proof.
//!
//! A read proof is a set of trie nodes covering the path from the state root
//! to the queried keys. Values read through it are authenticated against the
//! root, so a light consumer can trust a pallet storage cell without trusting
//! the node that served it.

use crate::error::Error;
use codec::Decode;
use hash_db::EMPTY_PREFIX;
use sp_core::Hasher;
use sp_std::vec::Vec;
use sp_trie::{trie_types::TrieDB, HashDBT, MemoryDB, Trie, TrieDBBuilder};

pub type StorageProof = Vec<Vec<u8>>;

/// A partial state backend rebuilt from a read proof.
pub struct StorageProofChecker<H: Hasher> {
	root: H::Out,
	db: MemoryDB<H>,
}

impl<H: Hasher> StorageProofChecker<H> {
	/// Rebuilds the partial backend from `proof` and checks it against `root`.
	///
	/// Fails with `StorageRootMismatch` if the proof does not contain the
	/// node the root commits to.
	pub fn new(root: H::Out, proof: StorageProof) -> Result<Self, Error> {
		let mut db = MemoryDB::default();
		for node in proof {
			db.insert(EMPTY_PREFIX, &node);
		}
		if !db.contains(&root, EMPTY_PREFIX) {
			return Err(Error::StorageRootMismatch)
		}
		Ok(Self { root, db })
	}

	/// Reads the raw value under `key`. `Ok(None)` means the proof shows the
	/// key is empty; an error means the proof does not cover the key.
	pub fn read_value(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error> {
		let trie: TrieDB<H> = TrieDBBuilder::new(&self.db, &self.root).build();
		trie.get(key)
			.map(|value| value.map(|value| value.to_vec()))
			.map_err(|_| Error::StorageValueUnavailable)
	}

	/// Reads the value under `key` and decodes it into its storage type.
	pub fn read_and_decode<V: Decode>(&self, key: &[u8]) -> Result<Option<V>, Error> {
		self.read_value(key)?
			.map(|raw| Decode::decode(&mut raw.as_slice()))
			.transpose()
			.map_err(Error::Codec)
	}

	/// One-shot convenience: rebuild the backend and read a single key.
	pub fn check_proof(
		root: H::Out,
		storage_key: &[u8],
		proof: StorageProof,
	) -> Result<Option<Vec<u8>>, Error> {
		Self::new(root, proof)?.read_value(storage_key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{storage_map_key, storage_value_key, StorageHasher};
	use codec::Encode;
	use pcp_types::{
		settlement::{InstructionId, Venue, VenueId, VenueType},
		IdentityId,
	};
	use sp_core::{Blake2Hasher, H256};
	use sp_state_machine::{backend::Backend, new_in_mem, prove_read};
	use sp_trie::HashKey;

	#[test]
	fn proof_authenticates_pallet_storage_cells() {
		let counter_key = storage_value_key("Settlement", "InstructionCounter");
		let venue_key =
			storage_map_key("Settlement", "VenueInfo", &VenueId(1), &StorageHasher::Twox64Concat);
		let empty_key = storage_value_key("Settlement", "VenueCounter");
		let venue = Venue { creator: IdentityId([7u8; 32]), venue_type: VenueType::Exchange };

		let mut backend = new_in_mem::<Blake2Hasher, HashKey<Blake2Hasher>>();
		backend.insert(
			vec![
				(None, vec![(counter_key.clone(), Some(InstructionId(42).encode()))]),
				(None, vec![(venue_key.clone(), Some(venue.encode()))]),
			],
			Default::default(),
		);
		let root = backend.storage_root(std::iter::empty(), Default::default()).0;
		let proof: StorageProof = prove_read(
			backend,
			&[counter_key.as_slice(), venue_key.as_slice(), empty_key.as_slice()],
		)
		.unwrap()
		.iter_nodes()
		.cloned()
		.collect();

		let checker = <StorageProofChecker<Blake2Hasher>>::new(root, proof.clone()).unwrap();
		assert_eq!(
			checker.read_and_decode::<InstructionId>(&counter_key),
			Ok(Some(InstructionId(42)))
		);
		assert_eq!(checker.read_and_decode::<Venue>(&venue_key), Ok(Some(venue)));
		// proven-absent cell reads as empty
		assert_eq!(checker.read_value(&empty_key), Ok(None));
		assert_eq!(
			StorageProofChecker::<Blake2Hasher>::check_proof(root, &counter_key, proof.clone()),
			Ok(Some(InstructionId(42).encode()))
		);

		// checking the proof against an unrelated commitment fails
		assert_eq!(
			<StorageProofChecker<Blake2Hasher>>::new(H256::random(), proof).err(),
			Some(Error::StorageRootMismatch)
		);
	}
}
