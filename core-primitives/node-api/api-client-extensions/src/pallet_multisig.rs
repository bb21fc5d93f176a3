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

use crate::ApiResult;
use codec::Decode;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	multisig::{ProposalState, ProposalVoteCount},
	AccountId, IdentityId,
};

pub const MULTISIG: &str = "MultiSig";

/// ApiClient extension for the `MultiSig` pallet storage queries.
///
/// Stored proposals embed a runtime call, so `proposals` is generic over the
/// caller's call type.
pub trait PalletMultiSigApi {
	type Hash;

	fn multisig_signers(
		&self,
		multisig: &AccountId,
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn number_of_signers(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn multisig_signs_required(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn next_proposal_id(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn proposals<Proposal: Decode>(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Proposal>>;
	fn proposal_states(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalState>>;
	fn proposal_vote_counts(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalVoteCount>>;
	fn votes(
		&self,
		proposal: &(AccountId, u64),
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn auth_to_proposal_id(
		&self,
		multisig: &AccountId,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u64>>;
	fn admin_did(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>>;
	fn paying_did(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>>;
	fn multisig_nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64>;
	fn execution_reentry(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn transaction_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u32>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletMultiSigApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn multisig_signers(
		&self,
		multisig: &AccountId,
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(MULTISIG, "MultiSigSigners", multisig, signer, at_block)?
			.unwrap_or_default())
	}

	fn number_of_signers(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(MULTISIG, "NumberOfSigners", multisig, at_block)?
			.unwrap_or_default())
	}

	fn multisig_signs_required(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(MULTISIG, "MultiSigSignsRequired", multisig, at_block)?
			.unwrap_or_default())
	}

	fn next_proposal_id(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(MULTISIG, "NextProposalId", multisig, at_block)?
			.unwrap_or_default())
	}

	fn proposals<Proposal: Decode>(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Proposal>> {
		self.get_storage_double_map(MULTISIG, "Proposals", multisig, proposal_id, at_block)
	}

	fn proposal_states(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalState>> {
		self.get_storage_double_map(MULTISIG, "ProposalStates", multisig, proposal_id, at_block)
	}

	fn proposal_vote_counts(
		&self,
		multisig: &AccountId,
		proposal_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<ProposalVoteCount>> {
		self.get_storage_double_map(MULTISIG, "ProposalVoteCounts", multisig, proposal_id, at_block)
	}

	fn votes(
		&self,
		proposal: &(AccountId, u64),
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(MULTISIG, "Votes", proposal, signer, at_block)?
			.unwrap_or_default())
	}

	fn auth_to_proposal_id(
		&self,
		multisig: &AccountId,
		auth_id: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<u64>> {
		self.get_storage_double_map(MULTISIG, "AuthToProposalId", multisig, auth_id, at_block)
	}

	fn admin_did(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>> {
		self.get_storage_map(MULTISIG, "AdminDid", multisig, at_block)
	}

	fn paying_did(
		&self,
		multisig: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<IdentityId>> {
		self.get_storage_map(MULTISIG, "PayingDid", multisig, at_block)
	}

	fn multisig_nonce(&self, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_value(MULTISIG, "MultiSigNonce", at_block)?.unwrap_or_default())
	}

	fn execution_reentry(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_value(MULTISIG, "ExecutionReentry", at_block)?.unwrap_or_default())
	}

	fn transaction_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u32> {
		Ok(self.get_storage_value(MULTISIG, "TransactionVersion", at_block)?.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(MULTISIG, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
