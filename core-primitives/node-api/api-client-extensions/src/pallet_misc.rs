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

//! Extension traits for the small frame utility pallets that expose only a
//! handful of storage items: `Timestamp`, `Sudo`, `Indices`, `Utility`,
//! `TransactionPayment`, `RandomnessCollectiveFlip`, `Authorship`,
//! `Preimage`, `Scheduler` and `StateTrieMigration`.

use crate::ApiResult;
use codec::Decode;
use pcp_api_client_types::{traits::GetStorage, Api, Config, Request};
use pcp_types::{
	preimage::RequestStatus,
	state_trie_migration::{MigrationLimits, MigrationTask},
	AccountId, Balance, BlockNumber, Hash, Moment, TransactionPaymentReleases,
};

pub const TIMESTAMP: &str = "Timestamp";
pub const SUDO: &str = "Sudo";
pub const INDICES: &str = "Indices";
pub const UTILITY: &str = "Utility";
pub const TRANSACTION_PAYMENT: &str = "TransactionPayment";
pub const RANDOMNESS_COLLECTIVE_FLIP: &str = "RandomnessCollectiveFlip";
pub const AUTHORSHIP: &str = "Authorship";
pub const PREIMAGE: &str = "Preimage";
pub const SCHEDULER: &str = "Scheduler";
pub const STATE_TRIE_MIGRATION: &str = "StateTrieMigration";

/// ApiClient extension for the `Timestamp` pallet storage queries.
pub trait PalletTimestampApi {
	type Hash;

	fn now(&self, at_block: Option<Self::Hash>) -> ApiResult<Moment>;
	fn did_update(&self, at_block: Option<Self::Hash>) -> ApiResult<bool>;
}

impl<RuntimeConfig, Client> PalletTimestampApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn now(&self, at_block: Option<Self::Hash>) -> ApiResult<Moment> {
		Ok(self.get_storage_value(TIMESTAMP, "Now", at_block)?.unwrap_or_default())
	}

	fn did_update(&self, at_block: Option<Self::Hash>) -> ApiResult<bool> {
		Ok(self.get_storage_value(TIMESTAMP, "DidUpdate", at_block)?.unwrap_or_default())
	}
}

/// ApiClient extension for the `Sudo` pallet storage queries.
pub trait PalletSudoApi {
	type Hash;

	fn key(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>>;
}

impl<RuntimeConfig, Client> PalletSudoApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn key(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>> {
		self.get_storage_value(SUDO, "Key", at_block)
	}
}

/// ApiClient extension for the `Indices` pallet storage queries.
pub trait PalletIndicesApi {
	type Hash;

	fn accounts(
		&self,
		index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(AccountId, Balance, bool)>>;
}

impl<RuntimeConfig, Client> PalletIndicesApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn accounts(
		&self,
		index: &u32,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(AccountId, Balance, bool)>> {
		self.get_storage_map(INDICES, "Accounts", index, at_block)
	}
}

/// ApiClient extension for the `Utility` pallet storage queries.
pub trait PalletUtilityApi {
	type Hash;

	fn nonces(&self, account: &AccountId, at_block: Option<Self::Hash>) -> ApiResult<u64>;
}

impl<RuntimeConfig, Client> PalletUtilityApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn nonces(&self, account: &AccountId, at_block: Option<Self::Hash>) -> ApiResult<u64> {
		Ok(self.get_storage_map(UTILITY, "Nonces", account, at_block)?.unwrap_or_default())
	}
}

/// ApiClient extension for the `TransactionPayment` pallet storage queries.
pub trait PalletTransactionPaymentApi {
	type Hash;

	fn next_fee_multiplier(&self, at_block: Option<Self::Hash>) -> ApiResult<u128>;
	fn storage_version(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<TransactionPaymentReleases>;
}

impl<RuntimeConfig, Client> PalletTransactionPaymentApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn next_fee_multiplier(&self, at_block: Option<Self::Hash>) -> ApiResult<u128> {
		Ok(self
			.get_storage_value(TRANSACTION_PAYMENT, "NextFeeMultiplier", at_block)?
			.unwrap_or_default())
	}

	fn storage_version(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<TransactionPaymentReleases> {
		Ok(self
			.get_storage_value(TRANSACTION_PAYMENT, "StorageVersion", at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `RandomnessCollectiveFlip` pallet storage queries.
pub trait PalletRandomnessCollectiveFlipApi {
	type Hash;

	fn random_material(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<Hash>>;
}

impl<RuntimeConfig, Client> PalletRandomnessCollectiveFlipApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn random_material(&self, at_block: Option<Self::Hash>) -> ApiResult<Vec<Hash>> {
		Ok(self
			.get_storage_value(RANDOMNESS_COLLECTIVE_FLIP, "RandomMaterial", at_block)?
			.unwrap_or_default())
	}
}

/// ApiClient extension for the `Authorship` pallet storage queries.
pub trait PalletAuthorshipApi {
	type Hash;

	fn author(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>>;
}

impl<RuntimeConfig, Client> PalletAuthorshipApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn author(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<AccountId>> {
		self.get_storage_value(AUTHORSHIP, "Author", at_block)
	}
}

/// ApiClient extension for the `Preimage` pallet storage queries.
pub trait PalletPreimageApi {
	type Hash;

	fn status_for(
		&self,
		preimage: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<RequestStatus>>;
	fn preimage_for(
		&self,
		key: &(Hash, u32),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>>;
}

impl<RuntimeConfig, Client> PalletPreimageApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn status_for(
		&self,
		preimage: &Hash,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<RequestStatus>> {
		self.get_storage_map(PREIMAGE, "StatusFor", preimage, at_block)
	}

	fn preimage_for(
		&self,
		key: &(Hash, u32),
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<Vec<u8>>> {
		self.get_storage_map(PREIMAGE, "PreimageFor", key, at_block)
	}
}

/// ApiClient extension for the `Scheduler` pallet storage queries. Scheduled
/// entries embed a runtime call and origin, so `agenda` is generic over the
/// caller's entry type.
pub trait PalletSchedulerApi {
	type Hash;

	fn incomplete_since(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<BlockNumber>>;
	fn agenda<Scheduled: Decode>(
		&self,
		when: &BlockNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Option<Scheduled>>>;
	fn lookup(
		&self,
		id: &[u8; 32],
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(BlockNumber, u32)>>;
}

impl<RuntimeConfig, Client> PalletSchedulerApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn incomplete_since(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<BlockNumber>> {
		self.get_storage_value(SCHEDULER, "IncompleteSince", at_block)
	}

	fn agenda<Scheduled: Decode>(
		&self,
		when: &BlockNumber,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Vec<Option<Scheduled>>> {
		Ok(self.get_storage_map(SCHEDULER, "Agenda", when, at_block)?.unwrap_or_default())
	}

	fn lookup(
		&self,
		id: &[u8; 32],
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<(BlockNumber, u32)>> {
		self.get_storage_map(SCHEDULER, "Lookup", id, at_block)
	}
}

/// ApiClient extension for the `StateTrieMigration` pallet storage queries.
pub trait PalletStateTrieMigrationApi {
	type Hash;

	fn migration_process(&self, at_block: Option<Self::Hash>) -> ApiResult<MigrationTask>;
	fn auto_limits(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<MigrationLimits>>;
	fn signed_migration_max_limits(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<MigrationLimits>>;
}

impl<RuntimeConfig, Client> PalletStateTrieMigrationApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn migration_process(&self, at_block: Option<Self::Hash>) -> ApiResult<MigrationTask> {
		Ok(self
			.get_storage_value(STATE_TRIE_MIGRATION, "MigrationProcess", at_block)?
			.unwrap_or_default())
	}

	fn auto_limits(&self, at_block: Option<Self::Hash>) -> ApiResult<Option<MigrationLimits>> {
		// Stored as `Option<MigrationLimits>` under a value query.
		Ok(self
			.get_storage_value(STATE_TRIE_MIGRATION, "AutoLimits", at_block)?
			.unwrap_or_default())
	}

	fn signed_migration_max_limits(
		&self,
		at_block: Option<Self::Hash>,
	) -> ApiResult<Option<MigrationLimits>> {
		self.get_storage_value(STATE_TRIE_MIGRATION, "SignedMigrationMaxLimits", at_block)
	}
}
