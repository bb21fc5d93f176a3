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

//! Value types of the `ExternalAgents` pallet storage.

use codec::{Decode, Encode};

/// Per-asset sequence number of a custom agent group.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct AGId(pub u32);

/// The permission group an agent belongs to for one asset.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum AgentGroup {
	Full,
	Custom(AGId),
	ExceptMeta,
	PolymeshV1CAA,
	PolymeshV1PIA,
}
