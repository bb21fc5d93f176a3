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

use crate::{pallet_settlement::PalletSettlementApi, ApiResult};
use pcp_types::{
	portfolio::PortfolioId,
	settlement::{
		AffirmationStatus, Instruction, InstructionId, InstructionStatus, Leg, LegId, LegStatus,
		MediatorAffirmationStatus, Venue, VenueDetails, VenueId,
	},
	AccountId, AssetId, Hash, IdentityId, Memo,
};
use std::collections::HashMap;

/// In-memory stand-in for the settlement query surface, for unit tests of
/// components that read instructions without a node.
#[derive(Default)]
pub struct PalletSettlementApiMock {
	venues: HashMap<VenueId, Venue>,
	instructions: HashMap<InstructionId, Instruction>,
	legs: HashMap<(InstructionId, LegId), Leg>,
	affirmations: HashMap<(InstructionId, PortfolioId), AffirmationStatus>,
}

impl PalletSettlementApiMock {
	pub fn with_venues(mut self, venues: Vec<(VenueId, Venue)>) -> Self {
		self.venues.extend(venues);
		self
	}

	pub fn with_instructions(mut self, instructions: Vec<Instruction>) -> Self {
		self.instructions
			.extend(instructions.into_iter().map(|i| (i.instruction_id, i)));
		self
	}

	pub fn with_legs(mut self, legs: Vec<(InstructionId, LegId, Leg)>) -> Self {
		self.legs.extend(legs.into_iter().map(|(i, l, leg)| ((i, l), leg)));
		self
	}

	pub fn with_affirmations(
		mut self,
		affirmations: Vec<(InstructionId, PortfolioId, AffirmationStatus)>,
	) -> Self {
		self.affirmations
			.extend(affirmations.into_iter().map(|(i, p, s)| ((i, p), s)));
		self
	}
}

impl PalletSettlementApi for PalletSettlementApiMock {
	type Hash = Hash;

	fn venue_info(
		&self,
		venue: &VenueId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Venue>> {
		Ok(self.venues.get(venue).cloned())
	}

	fn details(&self, _venue: &VenueId, _at_block: Option<Self::Hash>) -> ApiResult<VenueDetails> {
		Ok(VenueDetails::default())
	}

	fn venue_instructions(
		&self,
		venue: &VenueId,
		instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self
			.instructions
			.get(instruction)
			.map(|i| i.venue_id == Some(*venue))
			.unwrap_or(false))
	}

	fn venue_signers(
		&self,
		_venue: &VenueId,
		_signer: &AccountId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(false)
	}

	fn user_venues(
		&self,
		_did: &IdentityId,
		venue: &VenueId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(self.venues.contains_key(venue))
	}

	fn instruction_details(
		&self,
		instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<Instruction> {
		Ok(self.instructions.get(instruction).cloned().unwrap_or_default())
	}

	fn instruction_leg_status(
		&self,
		_instruction: &InstructionId,
		_leg: &LegId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<LegStatus> {
		Ok(LegStatus::default())
	}

	fn instruction_affirms_pending(
		&self,
		instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<u64> {
		Ok(self
			.affirmations
			.iter()
			.filter(|((i, _), s)| i == instruction && **s == AffirmationStatus::Pending)
			.count() as u64)
	}

	fn affirms_received(
		&self,
		instruction: &InstructionId,
		portfolio: &PortfolioId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		Ok(self
			.affirmations
			.get(&(*instruction, *portfolio))
			.copied()
			.unwrap_or_default())
	}

	fn user_affirmations(
		&self,
		portfolio: &PortfolioId,
		instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		self.affirms_received(instruction, portfolio, None)
	}

	fn receipts_used(
		&self,
		_signer: &AccountId,
		_receipt_uid: &u64,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(false)
	}

	fn venue_filtering(
		&self,
		_asset_id: &AssetId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(false)
	}

	fn venue_allow_list(
		&self,
		_asset_id: &AssetId,
		_venue: &VenueId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<bool> {
		Ok(false)
	}

	fn venue_counter(&self, _at_block: Option<Self::Hash>) -> ApiResult<VenueId> {
		Ok(VenueId(self.venues.len() as u64 + 1))
	}

	fn instruction_counter(&self, _at_block: Option<Self::Hash>) -> ApiResult<InstructionId> {
		Ok(InstructionId(self.instructions.len() as u64 + 1))
	}

	fn instruction_memos(
		&self,
		_instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Memo>> {
		Ok(None)
	}

	fn instruction_statuses(
		&self,
		instruction: &InstructionId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<InstructionStatus> {
		Ok(if self.instructions.contains_key(instruction) {
			InstructionStatus::Pending
		} else {
			InstructionStatus::Unknown
		})
	}

	fn instruction_legs(
		&self,
		instruction: &InstructionId,
		leg: &LegId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Leg>> {
		Ok(self.legs.get(&(*instruction, *leg)).cloned())
	}

	fn off_chain_affirmations(
		&self,
		_instruction: &InstructionId,
		_leg: &LegId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<AffirmationStatus> {
		Ok(AffirmationStatus::default())
	}

	fn number_of_venue_signers(
		&self,
		_venue: &VenueId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(0)
	}

	fn instruction_mediators_affirmations(
		&self,
		_instruction: &InstructionId,
		_did: &IdentityId,
		_at_block: Option<Self::Hash>,
	) -> ApiResult<MediatorAffirmationStatus> {
		Ok(MediatorAffirmationStatus::default())
	}

	fn storage_version(&self, _at_block: Option<Self::Hash>) -> ApiResult<u8> {
		Ok(3)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pcp_types::settlement::SettlementType;

	fn instruction(id: u64) -> Instruction {
		Instruction {
			instruction_id: InstructionId(id),
			venue_id: Some(VenueId(1)),
			settlement_type: SettlementType::SettleOnAffirmation,
			created_at: Some(1),
			trade_date: None,
			value_date: None,
		}
	}

	#[test]
	fn mock_tracks_instructions_and_affirmations() {
		let did = IdentityId([1u8; 32]);
		let portfolio = PortfolioId::default_portfolio(did);
		let api = PalletSettlementApiMock::default()
			.with_instructions(vec![instruction(1)])
			.with_affirmations(vec![(InstructionId(1), portfolio, AffirmationStatus::Pending)]);

		assert_eq!(api.instruction_details(&InstructionId(1), None).unwrap(), instruction(1));
		assert_eq!(api.instruction_affirms_pending(&InstructionId(1), None).unwrap(), 1);
		assert_eq!(
			api.affirms_received(&InstructionId(1), &portfolio, None).unwrap(),
			AffirmationStatus::Pending
		);
		// unknown ids read as chain defaults
		assert_eq!(
			api.instruction_statuses(&InstructionId(9), None).unwrap(),
			InstructionStatus::Unknown
		);
		assert_eq!(
			api.affirms_received(&InstructionId(9), &portfolio, None).unwrap(),
			AffirmationStatus::Unknown
		);
	}
}
