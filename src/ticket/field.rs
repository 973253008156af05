// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// One of the inputs on the ticket form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
	FullName,
	Email,
	AvatarUrl,
}

impl Field {
	/// All fields, in the order they appear on the form
	pub const ALL: [Field; 3] = [Field::FullName, Field::Email, Field::AvatarUrl];

	pub fn name(self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Email => "email",
			Self::AvatarUrl => "avatarUrl",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::FullName => "Full Name",
			Self::Email => "Email Address",
			Self::AvatarUrl => "Avatar URL",
		}
	}

	/// The key the field's value is kept under in local storage.
	///
	/// The avatar is stored as `avatar` so that drafts saved by earlier versions of the page still load.
	pub fn storage_key(self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Email => "email",
			Self::AvatarUrl => "avatar",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn storage_keys_are_distinct() {
		let mut keys: Vec<&str> = Field::ALL.iter().map(|field| field.storage_key()).collect();
		keys.sort_unstable();
		keys.dedup();
		assert_eq!(keys.len(), Field::ALL.len());
	}

	#[test]
	fn displays_wire_name() {
		assert_eq!(Field::AvatarUrl.to_string(), "avatarUrl");
		assert_eq!(Field::FullName.to_string(), "fullName");
	}
}
