// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::draft::Draft;
use super::field::Field;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

static IMAGE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?i-u:https?)://.+\.(?i-u:jpg|jpeg|png|gif|svg)$").expect("image URL pattern is valid")
});

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
	#[error("Full Name is required")]
	FullNameRequired,
	#[error("Enter a valid email address")]
	InvalidEmail,
	#[error("Enter a valid image URL")]
	InvalidImageUrl,
}

/// Validation errors for a draft, at most one per field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorMap {
	errors: BTreeMap<Field, ValidationError>,
}

impl ErrorMap {
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn get(&self, field: Field) -> Option<ValidationError> {
		self.errors.get(&field).copied()
	}

	pub fn contains(&self, field: Field) -> bool {
		self.errors.contains_key(&field)
	}

	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.errors.keys().copied()
	}
}

pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
	// Byte order marks count as blank too, as they do for browser string trimming.
	let trimmed = full_name.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
	if trimmed.is_empty() {
		Err(ValidationError::FullNameRequired)
	} else {
		Ok(())
	}
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
	if EMAIL_PATTERN.is_match(email) {
		Ok(())
	} else {
		Err(ValidationError::InvalidEmail)
	}
}

pub fn validate_avatar_url(avatar_url: &str) -> Result<(), ValidationError> {
	if IMAGE_URL_PATTERN.is_match(avatar_url) {
		Ok(())
	} else {
		Err(ValidationError::InvalidImageUrl)
	}
}

/// Checks every field of the draft and collects the failures
pub fn validate_draft(draft: &Draft) -> ErrorMap {
	let mut errors = BTreeMap::new();
	for field in Field::ALL {
		let value = draft.get(field);
		let result = match field {
			Field::FullName => validate_full_name(value),
			Field::Email => validate_email(value),
			Field::AvatarUrl => validate_avatar_url(value),
		};
		if let Err(error) = result {
			errors.insert(field, error);
		}
	}
	ErrorMap { errors }
}
