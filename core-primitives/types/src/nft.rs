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

//! Value types of the `Nft` pallet storage.

use crate::AssetId;
use codec::{Decode, Encode};

pub type NFTCount = u64;

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NFTId(pub u64);

#[derive(Encode, Decode, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NFTCollectionId(pub u64);

/// An NFT collection and the asset it is bound to.
#[derive(Encode, Decode, Clone, Default, PartialEq, Eq, Debug)]
pub struct NFTCollection {
	pub id: NFTCollectionId,
	pub asset_id: AssetId,
}
