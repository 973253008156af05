// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{DraftStorage, StorageError};

/// The browser's `localStorage`.
///
/// Only the hydrated client has a window to talk to. Everywhere else loads find nothing and saves are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
	web_sys::window()
		.and_then(|window| window.local_storage().ok().flatten())
		.ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn rejection(key: &str, error: wasm_bindgen::JsValue) -> StorageError {
	StorageError::Rejected {
		key: key.to_owned(),
		message: error.as_string().unwrap_or_else(|| format!("{:?}", error)),
	}
}

impl DraftStorage for BrowserStorage {
	#[cfg(feature = "hydrate")]
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		local_storage()?.get_item(key).map_err(|error| rejection(key, error))
	}

	#[cfg(not(feature = "hydrate"))]
	fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
		Ok(None)
	}

	#[cfg(feature = "hydrate")]
	fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
		local_storage()?.set_item(key, value).map_err(|error| rejection(key, error))
	}

	#[cfg(not(feature = "hydrate"))]
	fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
		Ok(())
	}
}
