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
use crate::gl::account::AccountCode;
use crate::gl::filter::FilterCriteria;
use crate::gl::journal::JournalEntry;
use crate::gl::ledger::Ledger;
use crate::util::date::Date;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One line of the trial balance, for a single account.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceRow {
	pub account: AccountCode,
	pub description: String,
	pub debit: f64,
	pub credit: f64,
	pub balance: f64,
}

/// The ranges a report was actually computed over, after defaults were
/// applied. Account ends stay None when the range is open on that side.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveRange {
	pub start_account: Option<AccountCode>,
	pub end_account: Option<AccountCode>,
	pub start_period: Date,
	pub end_period: Date,
}

/// A computed trial balance. A report that is not ready has no range, no
/// rows and zero totals; that is the normal answer to incomplete input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
	range: Option<EffectiveRange>,
	rows: Vec<BalanceRow>,
	total_debit: f64,
	total_credit: f64,
}

impl Report {
	pub fn empty() -> Self {
		Default::default()
	}

	/// Runs the trial balance over the ledger for the given filter.
	///
	/// Entries are first filtered on both ranges and grouped by account, then
	/// accounts are walked in ledger order and each one with a group gets a
	/// row. Accounts in range with no matching entry produce no row.
	pub fn calculate(ledger: &Ledger, filter: &FilterCriteria) -> Self {
		let Some(range) = Report::resolve_range(ledger, filter) else {
			debug!("trial balance not ready; returning empty report");
			return Report::empty();
		};

		debug!(
			start_account = ?range.start_account,
			end_account = ?range.end_account,
			start_period = %range.start_period,
			end_period = %range.end_period,
			"calculating trial balance"
		);

		for code in ledger.duplicate_accounts() {
			warn!(
				account = %code,
				"account listed more than once; its row is repeated"
			);
		}

		let start = range.start_account.as_ref();
		let end = range.end_account.as_ref();

		let mut matched: BTreeMap<&AccountCode, Vec<&JournalEntry>> =
			BTreeMap::new();
		for entry in ledger.journal_entries() {
			if entry.is_within_periods(&range.start_period, &range.end_period)
				&& entry.account.is_within(start, end)
			{
				matched.entry(&entry.account).or_default().push(entry);
			}
		}

		debug!(
			accounts = matched.len(),
			entries = matched.values().map(Vec::len).sum::<usize>(),
			"matched journal entries"
		);

		let rows: Vec<BalanceRow> = ledger
			.accounts()
			.iter()
			.filter(|account| account.code.is_within(start, end))
			.filter_map(|account| {
				let entries = matched.get(&account.code)?;
				let debit: f64 = entries.iter().map(|e| e.debit).sum();
				let credit: f64 = entries.iter().map(|e| e.credit).sum();

				Some(BalanceRow {
					account: account.code.clone(),
					description: account.label.clone(),
					debit,
					credit,
					balance: debit - credit,
				})
			})
			.collect();

		let total_debit = rows.iter().map(|r| r.debit).sum();
		let total_credit = rows.iter().map(|r| r.credit).sum();

		Self {
			range: Some(range),
			rows,
			total_debit,
			total_credit,
		}
	}

	/// Applies defaults to the filter, or returns None when the input is not
	/// complete enough to report on.
	fn resolve_range(
		ledger: &Ledger,
		filter: &FilterCriteria,
	) -> Option<EffectiveRange> {
		filter.format?;
		let end_period = filter.end_period?;

		if ledger.is_empty() {
			return None;
		}

		let end_account = filter
			.end_account
			.clone()
			.or_else(|| ledger.last_account().cloned());

		let start_period = filter
			.start_period
			.valid_date()
			.or_else(|| ledger.first_period())?;

		Some(EffectiveRange {
			start_account: filter.start_account.clone(),
			end_account,
			start_period,
			end_period,
		})
	}

	pub fn is_ready(&self) -> bool {
		self.range.is_some()
	}

	pub fn range(&self) -> Option<&EffectiveRange> {
		self.range.as_ref()
	}

	pub fn rows(&self) -> &[BalanceRow] {
		&self.rows
	}

	pub fn total_debit(&self) -> f64 {
		self.total_debit
	}

	pub fn total_credit(&self) -> f64 {
		self.total_credit
	}
}
