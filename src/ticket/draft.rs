// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::Field;

/// The in-progress values of the ticket form, as typed
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Draft {
	pub full_name: String,
	pub email: String,
	pub avatar_url: String,
}

impl Draft {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::FullName => &self.full_name,
			Field::Email => &self.email,
			Field::AvatarUrl => &self.avatar_url,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		let slot = match field {
			Field::FullName => &mut self.full_name,
			Field::Email => &mut self.email,
			Field::AvatarUrl => &mut self.avatar_url,
		};
		*slot = value;
	}
}
