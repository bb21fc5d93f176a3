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

//! Value types shared by all committee pallet instances.

use crate::{BlockNumber, IdentityId, MaybeBlock};
use codec::{Decode, Encode};
use sp_std::prelude::Vec;

/// Vote state of one committee proposal. Unlike substrate's collective pallet,
/// votes are tallied per identity rather than per account.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct PolymeshVotes {
	pub index: u32,
	pub ayes: Vec<IdentityId>,
	pub nays: Vec<IdentityId>,
	pub expiry: MaybeBlock<BlockNumber>,
}
