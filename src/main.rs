// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use ticket_generator::config::parse_config;
use ticket_generator::web::server::run_server;

#[tokio::main]
async fn main() -> miette::Result<()> {
	let config = parse_config("config.kdl").await?;

	tracing_subscriber::fmt().with_max_level(config.log_level).init();
	tracing::debug!(?config, "Loaded configuration");

	run_server(Arc::new(config)).await
}
