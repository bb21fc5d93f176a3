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

use crate::{error::Error, StorageProofChecker};
use codec::Decode;
use frame_support::ensure;
use pcp_types::storage::{StorageEntry, StorageEntryVerified};
use sp_runtime::traits::Header as HeaderT;
use sp_std::prelude::Vec;

/// Verifies a raw storage read against the state root of the block it was
/// read at, decoding the value on success.
pub trait VerifyStorageProof {
	fn verify_storage_proof<Header: HeaderT, V: Decode>(
		self,
		header: &Header,
	) -> Result<StorageEntryVerified<V>, Error>;
}

impl VerifyStorageProof for StorageEntry<Vec<u8>> {
	fn verify_storage_proof<Header: HeaderT, V: Decode>(
		self,
		header: &Header,
	) -> Result<StorageEntryVerified<V>, Error> {
		let proof = self.proof.as_ref().ok_or(Error::NoProofSupplied)?;
		let checker = StorageProofChecker::<<Header as HeaderT>::Hashing>::new(
			*header.state_root(),
			proof.to_vec(),
		)?;

		// The node sent the value alongside the proof; insist that both agree,
		// then decode straight out of the authenticated proof.
		ensure!(checker.read_value(&self.key)? == self.value, Error::WrongValue);
		let value = checker.read_and_decode(&self.key)?;

		Ok(StorageEntryVerified { key: self.key, value })
	}
}

/// Verify a set of storage entries.
pub fn verify_storage_entries<S, Header, V>(
	entries: impl IntoIterator<Item = S>,
	header: &Header,
) -> Result<Vec<StorageEntryVerified<V>>, Error>
where
	S: Into<StorageEntry<Vec<u8>>>,
	Header: HeaderT,
	V: Decode,
{
	let mut verified_entries = Vec::new();

	for entry in entries.into_iter() {
		verified_entries.push(entry.into().verify_storage_proof(header)?);
	}
	Ok(verified_entries)
}
