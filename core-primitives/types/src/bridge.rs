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

//! Value types of the `Bridge` pallet storage.

use crate::{Balance, BlockNumber, Hash};
use codec::{Decode, Encode};

/// Lifecycle of a bridge transaction. `Pending` carries the number of times
/// handling has been re-attempted.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum BridgeTxStatus {
	Absent,
	Pending(u8),
	Frozen,
	Timelocked,
	Handled,
}

impl Default for BridgeTxStatus {
	fn default() -> Self {
		Self::Absent
	}
}

/// A POLY-to-POLYX bridge transaction as tracked on the Polymesh side.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct BridgeTxDetail {
	pub amount: Balance,
	pub status: BridgeTxStatus,
	pub execution_block: BlockNumber,
	pub tx_hash: Hash,
}
