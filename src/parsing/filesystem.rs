/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use anyhow::{anyhow, Context, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only access to the files this tool consumes. Nothing is ever written.
pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	pub fn open(&self, file_path: &str) -> Result<BufReader<File>, Error> {
		let path = Path::new(file_path);
		let file = File::open(path)
			.with_context(|| format!("failed to open {}", file_path))?;
		Ok(BufReader::new(file))
	}

	/// Fetches the config from the given path, or default path if none.
	///
	/// A missing file at the default location just means no config; a
	/// missing file at a path the user named is an error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			None => match Filesystem::default_config_path() {
				Some(p) => p,
				None => return Ok(Config::default()),
			},
			Some(p) => PathBuf::from(p),
		};

		if !config_path.exists() && custom_config_path.is_none() {
			debug!(path = %config_path.display(), "no config file found");
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path).with_context(|| {
			format!("failed to read config {}", config_path.display())
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		debug!(path = %config_path.display(), "loaded config");
		Ok(config)
	}

	fn default_config_path() -> Option<PathBuf> {
		home_dir().map(|home| home.join(".config/tbal/config.toml"))
	}
}
