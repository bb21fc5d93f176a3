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

//! Value types of the `Contracts` and `PolymeshContracts` pallet storage.

use crate::{AccountId, Balance, Hash};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// Instrumented wasm code as the contracts pallet stores it.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct PrefabWasmModule {
	#[codec(compact)]
	pub instruction_weights_version: u32,
	#[codec(compact)]
	pub initial: u32,
	#[codec(compact)]
	pub maximum: u32,
	pub code: Vec<u8>,
}

/// Deposit and reference-count book-keeping for one uploaded code blob.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct OwnerInfo {
	pub owner: AccountId,
	#[codec(compact)]
	pub deposit: Balance,
	#[codec(compact)]
	pub refcount: u64,
}

/// The on-chain record of an instantiated contract.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct ContractInfo {
	pub trie_id: Vec<u8>,
	pub code_hash: Hash,
	pub storage_bytes: u32,
	pub storage_items: u32,
	pub storage_byte_deposit: Balance,
	pub storage_item_deposit: Balance,
	pub storage_base_deposit: Balance,
}

/// A contract whose storage is still being lazily deleted.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct DeletedContract {
	pub trie_id: Vec<u8>,
}

/// A runtime API family the chain extension exposes to contracts: a
/// four-byte tag plus the major version.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Api {
	pub desc: [u8; 4],
	pub major: u32,
}

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ApiCodeHash {
	pub hash: Hash,
}

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ChainVersion {
	pub spec_version: u32,
	pub tx_version: u32,
}

/// The api hash that becomes current once the chain reaches the given version.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct NextUpgrade {
	pub chain_version: ChainVersion,
	pub api_hash: ApiCodeHash,
}

/// (pallet index, dispatchable index) of a runtime call whitelisted for
/// `call_runtime` from contracts.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ExtrinsicId(pub u8, pub u8);
