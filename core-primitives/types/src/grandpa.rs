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

//! Pallet-side grandpa storage types. The consensus primitives (authority ids,
//! authority lists) come from `sp-consensus-grandpa`; these are the records
//! the pallet itself keeps around authority-set changes.

use crate::BlockNumber;
use codec::{Decode, Encode};
use sp_consensus_grandpa::AuthorityList;

/// State of the current authority set.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub enum StoredState {
	Live,
	PendingPause { scheduled_at: BlockNumber, delay: BlockNumber },
	Paused,
	PendingResume { scheduled_at: BlockNumber, delay: BlockNumber },
}

impl Default for StoredState {
	fn default() -> Self {
		Self::Live
	}
}

/// An authority-set change scheduled but not yet enacted.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct StoredPendingChange {
	pub scheduled_at: BlockNumber,
	pub delay: BlockNumber,
	pub next_authorities: AuthorityList,
	pub forced: Option<BlockNumber>,
}
