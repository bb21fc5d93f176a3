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
use pcp_types::{protocol_fee::ProtocolOp, Balance, PosRatio};

pub const PROTOCOL_FEE: &str = "ProtocolFee";

/// ApiClient extension for the `ProtocolFee` pallet storage queries.
pub trait PalletProtocolFeeApi {
	type Hash;

	fn base_fees(&self, op: &ProtocolOp, at_block: Option<Self::Hash>) -> ApiResult<Balance>;
	fn coefficient(&self, at_block: Option<Self::Hash>) -> ApiResult<PosRatio>;
}

impl<RuntimeConfig, Client> PalletProtocolFeeApi for Api<RuntimeConfig, Client>
where
	RuntimeConfig: Config,
	Client: Request,
{
	type Hash = RuntimeConfig::Hash;

	fn base_fees(&self, op: &ProtocolOp, at_block: Option<Self::Hash>) -> ApiResult<Balance> {
		Ok(self.get_storage_map(PROTOCOL_FEE, "BaseFees", op, at_block)?.unwrap_or_default())
	}

	fn coefficient(&self, at_block: Option<Self::Hash>) -> ApiResult<PosRatio> {
		Ok(self.get_storage_value(PROTOCOL_FEE, "Coefficient", at_block)?.unwrap_or_default())
	}
}
