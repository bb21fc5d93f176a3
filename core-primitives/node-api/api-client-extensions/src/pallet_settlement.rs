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
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	portfolio::PortfolioId,
	settlement::{
		AffirmationStatus, Instruction, InstructionId, InstructionStatus, Leg, LegId, LegStatus,
		MediatorAffirmationStatus, Venue, VenueDetails, VenueId,
	},
	AccountId, AssetId, IdentityId, Memo,
};

pub const SETTLEMENT: &str = "Settlement";

/// ApiClient extension for the `Settlement` pallet storage queries.
///
/// Cells the pallet stores as `()` markers (user venues, venue instructions)
/// surface as `bool` presence checks.
pub trait PalletSettlementApi {
	type Hash;

	fn venue_info(&self, venue: &VenueId, at_block: Option<Self::Hash>)
		-> ApiResult<Option<Venue>>;
	fn details(&self, venue: &VenueId, at_block: Option<Self::Hash>) -> ApiResult<VenueDetails>;
	fn venue_instructions(
		&self,
		venue: &VenueId,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn venue_signers(
		&self,
		venue: &VenueId,
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn user_venues(
		&self,
		did: &IdentityId,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn instruction_details(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Instruction>;
	fn instruction_leg_status(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<LegStatus>;
	fn instruction_affirms_pending(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64>;
	fn affirms_received(
		&self,
		instruction: &InstructionId,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus>;
	fn user_affirmations(
		&self,
		portfolio: &PortfolioId,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus>;
	fn receipts_used(
		&self,
		signer: &AccountId,
		receipt_uid: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn venue_filtering(&self, asset_id: &AssetId, at_block: Option<Self::Hash>)
		-> ApiResult<bool>;
	fn venue_allow_list(
		&self,
		asset_id: &AssetId,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool>;
	fn venue_counter(&self, at_block: Option<Self::Hash>) -> ApiResult<VenueId>;
	fn instruction_counter(&self, at_block: Option<Self::Hash>) -> ApiResult<InstructionId>;
	fn instruction_memos(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Memo>>;
	fn instruction_statuses(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<InstructionStatus>;
	fn instruction_legs(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Leg>>;
	fn off_chain_affirmations(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus>;
	fn number_of_venue_signers(
		&self,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
	fn instruction_mediators_affirmations(
		&self,
		instruction: &InstructionId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MediatorAffirmationStatus>;
	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8>;
}

impl<RuntimeConfig, Client> PalletSettlementApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn venue_info(
		&self,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Venue>> {
		self.get_storage_map(SETTLEMENT, "VenueInfo", venue, at_block)
	}

	fn details(&self, venue: &VenueId, at_block: Option<Self::Hash>) -> ApiResult<VenueDetails> {
		Ok(self.get_storage_map(SETTLEMENT, "Details", venue, at_block)?.unwrap_or_default())
	}

	fn venue_instructions(
		&self,
		venue: &VenueId,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map::<_, _, ()>(
				SETTLEMENT,
				"VenueInstructions",
				venue,
				instruction,
				at_block,
			)?
			.is_some())
	}

	fn venue_signers(
		&self,
		venue: &VenueId,
		signer: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "VenueSigners", venue, signer, at_block)?
			.unwrap_or_default())
	}

	fn user_venues(
		&self,
		did: &IdentityId,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map::<_, _, ()>(SETTLEMENT, "UserVenues", did, venue, at_block)?
			.is_some())
	}

	fn instruction_details(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Instruction> {
		Ok(self
			.get_storage_map(SETTLEMENT, "InstructionDetails", instruction, at_block)?
			.unwrap_or_default())
	}

	fn instruction_leg_status(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<LegStatus> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "InstructionLegStatus", instruction, leg, at_block)?
			.unwrap_or_default())
	}

	fn instruction_affirms_pending(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.get_storage_map(SETTLEMENT, "InstructionAffirmsPending", instruction, at_block)?
			.unwrap_or_default())
	}

	fn affirms_received(
		&self,
		instruction: &InstructionId,
		portfolio: &PortfolioId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "AffirmsReceived", instruction, portfolio, at_block)?
			.unwrap_or_default())
	}

	fn user_affirmations(
		&self,
		portfolio: &PortfolioId,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "UserAffirmations", portfolio, instruction, at_block)?
			.unwrap_or_default())
	}

	fn receipts_used(
		&self,
		signer: &AccountId,
		receipt_uid: &u64,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "ReceiptsUsed", signer, receipt_uid, at_block)?
			.unwrap_or_default())
	}

	fn venue_filtering(
		&self,
		asset_id: &AssetId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_map(SETTLEMENT, "VenueFiltering", asset_id, at_block)?
			.unwrap_or_default())
	}

	fn venue_allow_list(
		&self,
		asset_id: &AssetId,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "VenueAllowList", asset_id, venue, at_block)?
			.unwrap_or_default())
	}

	fn venue_counter(&self, at_block: Option<Self::Hash>) -> ApiResult<VenueId> {
		Ok(self.get_storage_value(SETTLEMENT, "VenueCounter", at_block)?.unwrap_or_default())
	}

	fn instruction_counter(&self, at_block: Option<Self::Hash>) -> ApiResult<InstructionId> {
		Ok(self
			.get_storage_value(SETTLEMENT, "InstructionCounter", at_block)?
			.unwrap_or_default())
	}

	fn instruction_memos(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Memo>> {
		self.get_storage_map(SETTLEMENT, "InstructionMemos", instruction, at_block)
	}

	fn instruction_statuses(
		&self,
		instruction: &InstructionId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<InstructionStatus> {
		Ok(self
			.get_storage_map(SETTLEMENT, "InstructionStatuses", instruction, at_block)?
			.unwrap_or_default())
	}

	fn instruction_legs(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Leg>> {
		self.get_storage_double_map(SETTLEMENT, "InstructionLegs", instruction, leg, at_block)
	}

	fn off_chain_affirmations(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		Ok(self
			.get_storage_double_map(SETTLEMENT, "OffChainAffirmations", instruction, leg, at_block)?
			.unwrap_or_default())
	}

	fn number_of_venue_signers(
		&self,
		venue: &VenueId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_map(SETTLEMENT, "NumberOfVenueSigners", venue, at_block)?
			.unwrap_or_default())
	}

	fn instruction_mediators_affirmations(
		&self,
		instruction: &InstructionId,
		did: &IdentityId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<MediatorAffirmationStatus> {
		Ok(self
			.get_storage_double_map(
				SETTLEMENT,
				"InstructionMediatorsAffirmations",
				instruction,
				did,
				at_block,
			)?
			.unwrap_or_default())
	}

	fn storage_version(&self, at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(self.get_storage_value(SETTLEMENT, "StorageVersion", at_block)?.unwrap_or_default())
	}
}
