// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::draft::Draft;
use super::field::Field;
use super::validation::{ErrorMap, ValidationError, validate_draft};
use crate::storage::{DraftStorage, StorageError, load_draft, save_draft};

/// A snapshot of a draft that passed validation when it was submitted
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ticket {
	full_name: String,
	email: String,
	avatar_url: String,
}

impl Ticket {
	pub fn full_name(&self) -> &str {
		&self.full_name
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn avatar_url(&self) -> &str {
		&self.avatar_url
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormState {
	/// The form is being filled in. Errors are the ones found by the last submission, if any.
	Editing { errors: ErrorMap },
	Submitted { ticket: Ticket },
}

impl Default for FormState {
	fn default() -> Self {
		Self::Editing {
			errors: ErrorMap::default(),
		}
	}
}

/// Controller for the ticket form: owns the draft, the form state and the storage the draft is mirrored to.
#[derive(Clone, Debug)]
pub struct TicketForm<S> {
	storage: S,
	draft: Draft,
	state: FormState,
}

impl<S: DraftStorage> TicketForm<S> {
	/// Makes a form with an empty draft without touching storage
	pub fn new(storage: S) -> Self {
		Self {
			storage,
			draft: Draft::default(),
			state: FormState::default(),
		}
	}

	/// Makes a form with its draft seeded from storage
	pub fn load(storage: S) -> Result<Self, StorageError> {
		let draft = load_draft(&storage)?;
		Ok(Self {
			storage,
			draft,
			state: FormState::default(),
		})
	}

	/// Replaces the draft with whatever storage holds and goes back to editing
	pub fn restore(&mut self) -> Result<(), StorageError> {
		self.draft = load_draft(&self.storage)?;
		self.state = FormState::default();
		Ok(())
	}

	pub fn draft(&self) -> &Draft {
		&self.draft
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn is_submitted(&self) -> bool {
		matches!(self.state, FormState::Submitted { .. })
	}

	pub fn ticket(&self) -> Option<&Ticket> {
		match &self.state {
			FormState::Submitted { ticket } => Some(ticket),
			FormState::Editing { .. } => None,
		}
	}

	pub fn error(&self, field: Field) -> Option<ValidationError> {
		match &self.state {
			FormState::Editing { errors } => errors.get(field),
			FormState::Submitted { .. } => None,
		}
	}

	/// Updates one field of the draft and writes the draft to storage.
	///
	/// Editing a submitted form discards its ticket. The in-memory draft keeps the new value even if the write fails.
	pub fn set_field(&mut self, field: Field, value: String) -> Result<(), StorageError> {
		if self.draft.get(field) == value {
			return Ok(());
		}

		self.draft.set(field, value);
		if self.is_submitted() {
			self.state = FormState::default();
		}
		save_draft(&self.storage, &self.draft)
	}

	/// Validates the draft; on success the form becomes submitted with a ticket made from the draft.
	pub fn submit(&mut self) -> Result<&Ticket, &ErrorMap> {
		let errors = validate_draft(&self.draft);
		if errors.is_empty() {
			let ticket = Ticket {
				full_name: self.draft.full_name.clone(),
				email: self.draft.email.clone(),
				avatar_url: self.draft.avatar_url.clone(),
			};
			tracing::debug!("Ticket generated");
			self.state = FormState::Submitted { ticket };
		} else {
			tracing::debug!(invalid_fields = errors.len(), "Ticket form failed validation");
			self.state = FormState::Editing { errors };
		}

		match &self.state {
			FormState::Submitted { ticket } => Ok(ticket),
			FormState::Editing { errors } => Err(errors),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStorage;
	use proptest::prelude::*;
	use std::cell::Cell;
	use std::io;
	use std::sync::{Arc, Mutex};

	fn fill_valid(form: &mut TicketForm<MemoryStorage>) {
		form.set_field(Field::FullName, String::from("Ada Lovelace")).unwrap();
		form.set_field(Field::Email, String::from("ada@example.com")).unwrap();
		form.set_field(Field::AvatarUrl, String::from("https://example.com/a.jpg")).unwrap();
	}

	#[test]
	fn starts_editing_without_errors() {
		let form = TicketForm::new(MemoryStorage::default());
		assert_eq!(form.state(), &FormState::default());
		assert_eq!(form.draft(), &Draft::default());
		assert!(form.ticket().is_none());
	}

	#[test]
	fn valid_submission_produces_ticket() {
		let mut form = TicketForm::new(MemoryStorage::default());
		fill_valid(&mut form);

		let ticket = form.submit().unwrap().clone();
		assert_eq!(ticket.full_name(), "Ada Lovelace");
		assert_eq!(ticket.email(), "ada@example.com");
		assert_eq!(ticket.avatar_url(), "https://example.com/a.jpg");
		assert!(form.is_submitted());
		assert_eq!(form.ticket(), Some(&ticket));
		for field in Field::ALL {
			assert_eq!(form.error(field), None);
		}
	}

	#[test]
	fn invalid_submission_reports_failing_fields_only() {
		let mut form = TicketForm::new(MemoryStorage::default());
		fill_valid(&mut form);
		form.set_field(Field::AvatarUrl, String::from("ftp://x/pic.png")).unwrap();

		let errors = form.submit().unwrap_err().clone();
		assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::AvatarUrl]);
		assert!(!form.is_submitted());
		assert!(form.ticket().is_none());
		assert_eq!(form.error(Field::AvatarUrl), Some(ValidationError::InvalidImageUrl));
		assert_eq!(form.error(Field::Email), None);
	}

	#[test]
	fn errors_stay_until_next_submit() {
		let mut form = TicketForm::new(MemoryStorage::default());
		assert!(form.submit().is_err());

		form.set_field(Field::FullName, String::from("Ada")).unwrap();
		assert_eq!(form.error(Field::FullName), Some(ValidationError::FullNameRequired));

		assert!(form.submit().is_err());
		assert_eq!(form.error(Field::FullName), None);
		assert_eq!(form.error(Field::Email), Some(ValidationError::InvalidEmail));
	}

	#[test]
	fn editing_after_submission_drops_ticket() {
		let mut form = TicketForm::new(MemoryStorage::default());
		fill_valid(&mut form);
		assert!(form.submit().is_ok());

		form.set_field(Field::FullName, String::from("Grace Hopper")).unwrap();
		assert!(!form.is_submitted());
		assert!(form.ticket().is_none());
		assert_eq!(form.state(), &FormState::default());

		let ticket = form.submit().unwrap();
		assert_eq!(ticket.full_name(), "Grace Hopper");
	}

	#[test]
	fn unchanged_value_keeps_ticket() {
		let mut form = TicketForm::new(MemoryStorage::default());
		fill_valid(&mut form);
		assert!(form.submit().is_ok());

		form.set_field(Field::Email, String::from("ada@example.com")).unwrap();
		assert!(form.is_submitted());
	}

	#[test]
	fn reload_repopulates_last_written_draft() {
		let storage = MemoryStorage::default();
		let mut form = TicketForm::load(storage.clone()).unwrap();
		fill_valid(&mut form);
		form.set_field(Field::Email, String::from("ada@lovelace.dev")).unwrap();
		drop(form);

		let reloaded = TicketForm::load(storage).unwrap();
		assert_eq!(reloaded.draft().full_name, "Ada Lovelace");
		assert_eq!(reloaded.draft().email, "ada@lovelace.dev");
		assert_eq!(reloaded.draft().avatar_url, "https://example.com/a.jpg");
		assert!(!reloaded.is_submitted());
	}

	#[test]
	fn restore_reads_storage_into_existing_form() {
		let storage = MemoryStorage::default();
		storage.save("fullName", "Ada Lovelace").unwrap();
		storage.save("avatar", "https://example.com/a.png").unwrap();

		let mut form = TicketForm::new(storage);
		assert_eq!(form.draft(), &Draft::default());

		form.restore().unwrap();
		assert_eq!(form.draft().full_name, "Ada Lovelace");
		assert_eq!(form.draft().email, "");
		assert_eq!(form.draft().avatar_url, "https://example.com/a.png");
	}

	#[derive(Default)]
	struct FailingStorage {
		writes: Cell<usize>,
	}

	impl DraftStorage for FailingStorage {
		fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
			Err(StorageError::Unavailable)
		}

		fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
			self.writes.set(self.writes.get() + 1);
			Err(StorageError::Rejected {
				key: key.to_owned(),
				message: String::from("QuotaExceededError"),
			})
		}
	}

	#[test]
	fn storage_failures_surface_but_keep_edits() {
		assert!(matches!(
			TicketForm::load(FailingStorage::default()),
			Err(StorageError::Unavailable)
		));

		let mut form = TicketForm::new(FailingStorage::default());
		let result = form.set_field(Field::FullName, String::from("Ada"));
		assert!(matches!(result, Err(StorageError::Rejected { .. })));
		assert_eq!(form.draft().full_name, "Ada");
		assert_eq!(form.storage().writes.get(), 1);
	}

	#[derive(Clone, Default)]
	struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

	impl io::Write for CapturedLogs {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn submission_logs_leave_out_ticket_details() {
		let logs = CapturedLogs::default();
		let subscriber = tracing_subscriber::fmt()
			.with_max_level(tracing::Level::TRACE)
			.with_ansi(false)
			.with_writer({
				let logs = logs.clone();
				move || logs.clone()
			})
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			let mut form = TicketForm::new(MemoryStorage::default());
			fill_valid(&mut form);
			assert!(form.submit().is_ok());
		});

		let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
		assert!(output.contains("Ticket generated"));
		assert!(!output.contains("ada@example.com"));
		assert!(!output.contains("Ada Lovelace"));
	}

	proptest! {
		#[test]
		fn reload_matches_draft_after_any_edits(
			edits in prop::collection::vec((prop::sample::select(Field::ALL.to_vec()), ".{0,16}"), 0..24),
			submit_midway in any::<bool>(),
		) {
			let storage = MemoryStorage::default();
			let mut form = TicketForm::load(storage.clone()).unwrap();
			let midpoint = edits.len() / 2;
			for (index, (field, value)) in edits.into_iter().enumerate() {
				if submit_midway && index == midpoint {
					let _ = form.submit();
				}
				form.set_field(field, value).unwrap();
			}

			let reloaded = TicketForm::load(storage.clone()).unwrap();
			prop_assert_eq!(reloaded.draft(), form.draft());
			prop_assert!(!reloaded.is_submitted());
		}
	}
}
