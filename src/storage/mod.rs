// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod browser;
mod memory;

pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

use crate::ticket::{Draft, Field};
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StorageError {
	#[error("local storage is not available")]
	Unavailable,
	#[error("local storage rejected the value for `{key}`: {message}")]
	Rejected { key: String, message: String },
}

/// String key-value storage the form draft is mirrored to
pub trait DraftStorage {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

	fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads a draft from storage. Fields with nothing stored are left empty.
pub fn load_draft<S: DraftStorage + ?Sized>(storage: &S) -> Result<Draft, StorageError> {
	let mut draft = Draft::default();
	for field in Field::ALL {
		if let Some(value) = storage.load(field.storage_key())? {
			draft.set(field, value);
		}
	}
	Ok(draft)
}

/// Writes every field of the draft to storage
pub fn save_draft<S: DraftStorage + ?Sized>(storage: &S, draft: &Draft) -> Result<(), StorageError> {
	for field in Field::ALL {
		storage.save(field.storage_key(), draft.get(field))?;
	}
	Ok(())
}
