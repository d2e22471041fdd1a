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
use crate::gl::filter::OutputFormat;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub report: Option<Report>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
	/// Used when no format is given on the command line.
	pub format: Option<OutputFormat>,

	/// Snapshot file to report on when -f is not given.
	pub ledger: Option<String>,
}

impl Config {
	pub fn default_format(&self) -> Option<OutputFormat> {
		self.report.as_ref().and_then(|r| r.format)
	}

	pub fn default_ledger(&self) -> Option<&String> {
		self.report.as_ref().and_then(|r| r.ledger.as_ref())
	}
}
