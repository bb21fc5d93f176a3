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

//! Value types of the `Checkpoint` pallet storage.

use crate::Moment;
use codec::{Decode, Encode};
use sp_std::collections::btree_set::BTreeSet;

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CheckpointId(pub u64);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ScheduleId(pub u64);

/// Cached earliest pending checkpoint over all of an asset's schedules.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct NextCheckpoints {
	pub next_at: Moment,
	pub total_pending: u64,
}

/// The not-yet-created checkpoints of one schedule, ordered by timestamp.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct ScheduleCheckpoints {
	pub pending: BTreeSet<Moment>,
}
