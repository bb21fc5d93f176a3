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

//! Value types of the `Relayer` pallet storage.

use crate::{AccountId, Balance};
use codec::{Decode, Encode};

/// A subsidy: the paying key and how much POLYX it will still cover.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug)]
pub struct Subsidy {
	pub paying_key: AccountId,
	pub remaining: Balance,
}
