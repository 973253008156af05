// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{DraftStorage, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
	entries: Arc<RwLock<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
	pub fn len(&self) -> usize {
		self.entries.read().map(|entries| entries.len()).unwrap()
	}
}

impl DraftStorage for MemoryStorage {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		let entries = self.entries.read().map_err(|_| StorageError::Unavailable)?;
		Ok(entries.get(key).cloned())
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut entries = self.entries.write().map_err(|_| StorageError::Unavailable)?;
		entries.insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}
