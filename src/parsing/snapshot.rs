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
use crate::gl::ledger::Ledger;
use crate::parsing::filesystem::Filesystem;
use anyhow::{Context, Error};
use std::io::Read;
use tracing::debug;

/// Loads the ledger snapshot at file_path. The snapshot is a JSON object
/// holding "accounts" and "journalEntries" arrays.
pub fn load(fs: &Filesystem, file_path: &str) -> Result<Ledger, Error> {
	let reader = fs.open(file_path)?;
	let ledger = parse(reader)
		.with_context(|| format!("failed to parse snapshot {}", file_path))?;

	debug!(
		accounts = ledger.accounts().len(),
		journal_entries = ledger.journal_entries().len(),
		"loaded ledger snapshot"
	);

	Ok(ledger)
}

pub fn parse<R: Read>(reader: R) -> Result<Ledger, Error> {
	Ok(serde_json::from_reader(reader)?)
}
