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

//! Extension traits for the session-keeping pallets: `Session`, `ImOnline`
//! and `Offences`.

use crate::ApiResult;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{staking::Exposure, AccountId, BlockNumber, Hash, SessionKeys};
use sp_core::{crypto::KeyTypeId, sr25519};
use sp_staking::offence::OffenceDetails;

pub const SESSION: &str = "Session";
pub const IM_ONLINE: &str = "ImOnline";
pub const OFFENCES: &str = "Offences";

pub type SessionIndex = u32;
/// 16-byte tag the offences pallet indexes report kinds by.
pub type Kind = [u8; 16];

/// ApiClient extension for the `Session` pallet storage queries.
pub trait PalletSessionApi {
	type Hash;

	fn validators(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<AccountId>>;
	fn current_index(&self, at_block: Option<Self::Hash>) -> ApiResult<SessionIndex>;
	fn queued_changed(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
	fn queued_keys(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AccountId, SessionKeys)>>;
	fn disabled_validators(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<u32>>;
	fn next_keys(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SessionKeys>>;
	fn key_owner(
		&self,
		key: &(KeyTypeId, Vec<u8>),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountId>>;
}

impl<RuntimeConfig, Client> PalletSessionApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn validators(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<AccountId>> {
		Ok(self.get_storage_value(SESSION, "Validators", at_block)?.unwrap_or_default())
	}

	fn current_index(&self, at_block: Option<Self::Hash>) -> ApiResult<SessionIndex> {
		Ok(self.get_storage_value(SESSION, "CurrentIndex", at_block)?.unwrap_or_default())
	}

	fn queued_changed(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_value(SESSION, "QueuedChanged", at_block)?.unwrap_or_default())
	}

	fn queued_keys(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<(AccountId, SessionKeys)>> {
		Ok(self.get_storage_value(SESSION, "QueuedKeys", at_block)?.unwrap_or_default())
	}

	fn disabled_validators(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<u32>> {
		Ok(self.get_storage_value(SESSION, "DisabledValidators", at_block)?.unwrap_or_default())
	}

	fn next_keys(
		&self,
		account: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<SessionKeys>> {
		self.get_storage_map(SESSION, "NextKeys", account, at_block)
	}

	fn key_owner(
		&self,
		key: &(KeyTypeId, Vec<u8>),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<AccountId>> {
		self.get_storage_map(SESSION, "KeyOwner", key, at_block)
	}
}

/// ApiClient extension for the `ImOnline` pallet storage queries.
///
/// Received heartbeats are stored behind an opaque length-prefixed wrapper,
/// so they surface as raw bytes.
pub trait PalletImOnlineApi {
	type Hash;

	fn heartbeat_after(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber>;
	fn keys(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<sr25519::Public>>;
	fn received_heartbeats(
		&self,
		session: &SessionIndex,
		auth_index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>>;
	fn authored_blocks(
		&self,
		session: &SessionIndex,
		validator: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32>;
}

impl<RuntimeConfig, Client> PalletImOnlineApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn heartbeat_after(&self, at_block: Option<Self::Hash>) -> ApiResult<BlockNumber> {
		Ok(self.get_storage_value(IM_ONLINE, "HeartbeatAfter", at_block)?.unwrap_or_default())
	}

	fn keys(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<sr25519::Public>> {
		Ok(self.get_storage_value(IM_ONLINE, "Keys", at_block)?.unwrap_or_default())
	}

	fn received_heartbeats(
		&self,
		session: &SessionIndex,
		auth_index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>> {
		self.get_storage_double_map(IM_ONLINE, "ReceivedHeartbeats", session, auth_index, at_block)
	}

	fn authored_blocks(
		&self,
		session: &SessionIndex,
		validator: &AccountId,
		at_block: Option<Self::Hash>,
	) -> ApiResult<u32> {
		Ok(self
			.get_storage_double_map(IM_ONLINE, "AuthoredBlocks", session, validator, at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `Offences` pallet storage queries.
pub trait PalletOffencesApi {
	type Hash;

	fn reports(
		&self,
		report_id: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<OffenceDetails<AccountId, (AccountId, Exposure)>>>;
	fn concurrent_reports_index(
		&self,
		kind: &Kind,
		time_slot: &Vec<u8>,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Hash>>;
	fn reports_by_kind_index(
		&self,
		kind: &Kind,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<u8>>;
}

impl<RuntimeConfig, Client> PalletOffencesApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn reports(
		&self,
		report_id: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<OffenceDetails<AccountId, (AccountId, Exposure)>>> {
		self.get_storage_map(OFFENCES, "Reports", report_id, at_block)
	}

	fn concurrent_reports_index(
		&self,
		kind: &Kind,
		time_slot: &Vec<u8>,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Hash>> {
		Ok(self
			.get_storage_double_map(OFFENCES, "ConcurrentReportsIndex", kind, time_slot, at_block)?
			.unwrap_or_default())
	}

	fn reports_by_kind_index(
		&self,
		kind: &Kind,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<u8>> {
		Ok(self
			.get_storage_map(OFFENCES, "ReportsByKindIndex", kind, at_block)?
			.unwrap_or_default())
	}
}
