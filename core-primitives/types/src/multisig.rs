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

//! Value types of the `MultiSig` pallet storage.

use crate::Moment;
use codec::{Decode, Encode};

/// Lifecycle of a multisig proposal.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ProposalState {
	Active { until: Option<Moment> },
	ExecutionSuccessful,
	ExecutionFailed,
	Rejected,
}

/// Running tally of a proposal's votes.
#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ProposalVoteCount {
	pub approvals: u64,
	pub rejections: u64,
}
