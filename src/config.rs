// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use std::net::SocketAddr;
use tokio::fs::read_to_string;
use tracing::Level;

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log_level: Level,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path)
		.await
		.into_diagnostic()
		.wrap_err_with(|| format!("Failed to read config file {}", config_path))?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse().into_diagnostic()?;

	let web = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("Config is missing the `web` block"))?;
	let bind_addr = string_value(web, "bind_addr")?.ok_or_else(|| miette!("Config is missing `web.bind_addr`"))?;
	let bind_addr = bind_addr
		.parse::<SocketAddr>()
		.into_diagnostic()
		.wrap_err_with(|| format!("`web.bind_addr` is not a socket address: {}", bind_addr))?;

	let log_level = match string_value(&document, "log_level")? {
		Some(level) => level
			.parse::<Level>()
			.map_err(|_| miette!("`log_level` must be one of trace, debug, info, warn, error; got {}", level))?,
		None => Level::INFO,
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		log_level,
	})
}

fn string_value<'a>(document: &'a KdlDocument, name: &str) -> Result<Option<&'a str>> {
	match document.get_arg(name) {
		Some(value) => value
			.as_string()
			.map(Some)
			.ok_or_else(|| miette!("`{}` must be a string", name)),
		None => Ok(None),
	}
}
