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

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("No storage proof supplied")]
	NoProofSupplied,
	#[error("Supplied storage value does not match the value from the proof")]
	WrongValue,
	#[error("Invalid storage proof: StorageRootMismatch")]
	StorageRootMismatch,
	#[error("Storage value unavailable")]
	StorageValueUnavailable,
	#[error(transparent)]
	Codec(#[from] codec::Error),
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Sync + Send + 'static>),
}

// `codec::Error` does not implement `std::error::Error` in `no-std`, so the
// no-std rendition is a plain enum.
#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	NoProofSupplied,
	/// Supplied storage value does not match the value from the proof.
	WrongValue,
	StorageRootMismatch,
	StorageValueUnavailable,
	Codec(codec::Error),
}

#[cfg(not(feature = "std"))]
impl From<codec::Error> for Error {
	fn from(error: codec::Error) -> Self {
		Self::Codec(error)
	}
}

#[cfg(feature = "std")]
impl PartialEq for Error {
	fn eq(&self, other: &Self) -> bool {
		use Error::*;
		matches!(
			(self, other),
			(NoProofSupplied, NoProofSupplied) |
				(WrongValue, WrongValue) |
				(StorageRootMismatch, StorageRootMismatch) |
				(StorageValueUnavailable, StorageValueUnavailable)
		)
	}
}
