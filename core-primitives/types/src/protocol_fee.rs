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

//! Value types of the `ProtocolFee` pallet storage.

use codec::{Decode, Encode};

/// The chargeable protocol operations, in fee-schedule order.
#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ProtocolOp {
	AssetRegisterTicker,
	AssetIssue,
	AssetAddDocuments,
	AssetCreateAsset,
	CheckpointCreateSchedule,
	ComplianceManagerAddComplianceRequirement,
	IdentityCddRegisterDid,
	IdentityAddClaim,
	IdentityAddSecondaryKeysWithAuthorization,
	PipsPropose,
	ContractsPutCode,
	CorporateBallotAttachBallot,
	CapitalDistributionDistribute,
	NFTCreateCollection,
	NFTMint,
	IdentityCreateChildIdentity,
}
