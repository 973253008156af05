// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ticket::Ticket;
use leptos::prelude::*;

/// Shows a generated ticket. The avatar URL is used as-is; an unreachable image shows the browser's placeholder.
#[component]
pub fn TicketPreview(ticket: Ticket) -> impl IntoView {
	view! {
		<section id="ticket_preview">
			<h2>"Your Ticket"</h2>
			<p class="ticket_preview_line">
				<strong>"Name:"</strong>
				" "
				{ticket.full_name().to_owned()}
			</p>
			<p class="ticket_preview_line">
				<strong>"Email:"</strong>
				" "
				{ticket.email().to_owned()}
			</p>
			<img class="ticket_preview_avatar" src=ticket.avatar_url().to_owned() alt="Avatar" />
		</section>
	}
}
