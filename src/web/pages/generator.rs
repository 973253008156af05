// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::preview::TicketPreview;
use crate::storage::BrowserStorage;
use crate::ticket::{Field, TicketForm};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

type FormSignal = RwSignal<TicketForm<BrowserStorage>>;

#[component]
pub fn TicketGenerator() -> impl IntoView {
	// The server has no local storage, so the draft starts empty on both sides and the saved one is loaded once
	// the page has hydrated.
	let form: FormSignal = RwSignal::new(TicketForm::new(BrowserStorage));

	Effect::new(move |_| {
		form.update(|form| {
			if let Err(error) = form.restore() {
				tracing::warn!(source = ?error, "Failed to restore the saved ticket draft");
			}
		});
	});

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		form.update(|form| match form.submit() {
			Ok(_) => tracing::info!("Generated a ticket"),
			Err(errors) => tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Ticket form has errors"),
		});
	};

	view! {
		<main id="ticket_generator">
			<h1>"Conference Ticket Generator"</h1>
			<form id="ticket_form" novalidate=true on:submit=form_submit>
				<FieldInput form field=Field::FullName input_type="text" />
				<FieldInput form field=Field::Email input_type="email" />
				<FieldInput
					form
					field=Field::AvatarUrl
					input_type="text"
					placeholder="Enter Cloudinary or image URL"
				/>
				<button type="submit" class="ticket_form_submit">
					"Generate Ticket"
				</button>
			</form>
			{move || form.with(|form| form.ticket().cloned()).map(|ticket| view! { <TicketPreview ticket /> })}
		</main>
	}
}

#[component]
fn FieldInput(
	form: FormSignal,
	field: Field,
	input_type: &'static str,
	#[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
	let value = move || form.with(|form| form.draft().get(field).to_owned());
	let error = move || form.with(|form| form.error(field));

	let field_input = move |event: Event| {
		let value = event_target_value(&event);
		form.update(|form| {
			if let Err(error) = form.set_field(field, value) {
				tracing::warn!(source = ?error, field = %field, "Failed to save the ticket draft");
			}
		});
	};

	view! {
		<div class="ticket_form_field">
			<label>
				<span class="ticket_form_label">{field.label()}</span>
				<input
					type=input_type
					name=field.name()
					class="ticket_form_input"
					placeholder=placeholder
					prop:value=value
					on:input=field_input
				/>
			</label>
			{move || error().map(|error| view! { <p class="ticket_form_error">{error.to_string()}</p> })}
		</div>
	}
}
