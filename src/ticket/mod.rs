// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod draft;
mod field;
mod form;
mod validation;

pub use draft::Draft;
pub use field::Field;
pub use form::{FormState, Ticket, TicketForm};
pub use validation::{
	ErrorMap, ValidationError, validate_avatar_url, validate_draft, validate_email, validate_full_name,
};
