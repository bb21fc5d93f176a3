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

//! Value types of the `StateTrieMigration` pallet storage.

use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// How much one migration step may touch.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct MigrationLimits {
	pub size: u32,
	pub item: u32,
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum MigrationProgress {
	ToStart,
	LastKey(Vec<u8>),
	Complete,
}

impl Default for MigrationProgress {
	fn default() -> Self {
		Self::ToStart
	}
}

/// Cursor of the trie-format migration over the top and child tries.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct MigrationTask {
	pub progress_top: MigrationProgress,
	pub progress_child: MigrationProgress,
	pub size: u32,
	pub top_items: u32,
	pub child_items: u32,
}
