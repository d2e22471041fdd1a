/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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

use crate::gl::account::{Account, AccountCode};
use crate::gl::journal::JournalEntry;
use crate::util::date::Date;
use serde::Deserialize;
use std::collections::BTreeSet;

/// The read-only state this tool reports on: the chart of accounts and the
/// journal entries posted against it, as loaded by whatever system keeps the
/// books.
///
/// Accounts keep the order they were given in, which is the order trial
/// balance rows appear in. Journal entries are not assumed to be sorted.
#[derive(Debug, Default, Deserialize)]
pub struct Ledger {
	#[serde(default)]
	accounts: Vec<Account>,
	#[serde(rename = "journalEntries", default)]
	journal_entries: Vec<JournalEntry>,
}

impl Ledger {
	pub fn new(
		accounts: Vec<Account>,
		journal_entries: Vec<JournalEntry>,
	) -> Self {
		Self {
			accounts,
			journal_entries,
		}
	}

	pub fn accounts(&self) -> &[Account] {
		&self.accounts
	}

	pub fn journal_entries(&self) -> &[JournalEntry] {
		&self.journal_entries
	}

	pub fn is_empty(&self) -> bool {
		self.accounts.is_empty() || self.journal_entries.is_empty()
	}

	pub fn last_account(&self) -> Option<&AccountCode> {
		self.accounts.last().map(|a| &a.code)
	}

	/// The earliest period any entry was posted in. Entries are scanned rather
	/// than trusting the first one, since nothing guarantees their order.
	pub fn first_period(&self) -> Option<Date> {
		self.journal_entries.iter().map(|e| e.period).min()
	}

	// ------------
	// -- CHECKS --
	// ------------

	/// Codes that appear again after their first declaration, once per extra
	/// occurrence, in ledger order.
	pub fn duplicate_accounts(&self) -> Vec<&AccountCode> {
		let mut seen = BTreeSet::new();
		self.accounts
			.iter()
			.map(|a| &a.code)
			.filter(|code| !seen.insert(*code))
			.collect()
	}

	/// Looks for data that is accepted but probably wrong, and returns one
	/// human-readable line per finding. Nothing here stops a report from
	/// being produced.
	pub fn check(&self) -> Vec<String> {
		let mut warnings: Vec<String> = self
			.duplicate_accounts()
			.into_iter()
			.map(|code| format!("[{}] account declared more than once", code))
			.collect();

		let known: BTreeSet<&AccountCode> =
			self.accounts.iter().map(|a| &a.code).collect();

		for entry in &self.journal_entries {
			if !known.contains(&entry.account) {
				warnings.push(format!(
					"[{}] entry on {} references an unknown account",
					entry.account, entry.period
				));
			}

			if entry.debit < 0.0 || entry.credit < 0.0 {
				warnings.push(format!(
					"[{}] entry on {} has a negative amount (debit {}, credit {})",
					entry.account, entry.period, entry.debit, entry.credit
				));
			}
		}

		warnings
	}
}
