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
use crate::gl::balance::Report;
use crate::gl::filter::{FilterCriteria, OutputFormat, PeriodInput};
use crate::gl::ledger::Ledger;
use crate::reports::table::Table;
use anyhow::{anyhow, Error};
use maud::html;

const COLUMNS: [&str; 5] =
	["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"];

/// Presents a computed trial balance in the format the filter asks for.
///
/// Build it with from_state() to compute and present in one go, which is what
/// should happen whenever the ledger or the user's input changes.
pub struct BalanceReporter {
	report: Report,
	filter: FilterCriteria,
}

impl BalanceReporter {
	pub fn new(report: Report, filter: FilterCriteria) -> Self {
		Self { report, filter }
	}

	pub fn from_state(ledger: &Ledger, filter: FilterCriteria) -> Self {
		let report = Report::calculate(ledger, &filter);
		Self::new(report, filter)
	}

	pub fn report(&self) -> &Report {
		&self.report
	}

	/// Returns None when there is nothing to show yet: no format, no start
	/// period or no end period. Otherwise exactly one representation is
	/// produced, chosen by the format.
	pub fn render(&self) -> Result<Option<String>, Error> {
		let Some(format) = self.filter.format else {
			return Ok(None);
		};
		if self.filter.end_period.is_none()
			|| !self.filter.start_period.is_set()
		{
			return Ok(None);
		}

		let output = match format {
			OutputFormat::Csv => self.render_csv()?,
			OutputFormat::Html => self.render_html(),
		};

		Ok(Some(output))
	}

	// ---------------
	// -- SUMMARIES --
	// ---------------

	fn totals_line(&self) -> String {
		format!(
			"Total Debit: {} Total Credit: {}",
			self.report.total_debit(),
			self.report.total_credit()
		)
	}

	/// Account ends print as given, or "*" when the user left them open,
	/// even if a default was applied for the calculation.
	fn range_line(&self) -> String {
		let account = |code: &Option<AccountCode>| {
			code.as_ref().map_or("*".to_string(), |c| c.to_string())
		};

		let end_period = self
			.filter
			.end_period
			.map(|d| d.to_string())
			.unwrap_or_default();

		format!(
			"Balance from account {} to {} from period {} to {}",
			account(&self.filter.start_account),
			account(&self.filter.end_account),
			self.start_period_label(),
			end_period
		)
	}

	/// A start period that did not parse is shown as the period it fell back
	/// to, or as typed when there was nothing to fall back to.
	fn start_period_label(&self) -> String {
		match &self.filter.start_period {
			PeriodInput::Date(date) => date.to_string(),
			PeriodInput::Invalid(raw) => self
				.report
				.range()
				.map(|r| r.start_period.to_string())
				.unwrap_or_else(|| raw.clone()),
			PeriodInput::Unset => String::new(),
		}
	}

	// -------------
	// -- FORMATS --
	// -------------

	fn render_csv(&self) -> Result<String, Error> {
		let mut writer = csv::WriterBuilder::new()
			.terminator(csv::Terminator::Any(b'\n'))
			.from_writer(vec![]);

		writer.write_record(COLUMNS)?;
		for row in self.report.rows() {
			let (debit, credit, balance) = (
				row.debit.to_string(),
				row.credit.to_string(),
				row.balance.to_string(),
			);
			writer.write_record([
				row.account.as_str(),
				row.description.as_str(),
				debit.as_str(),
				credit.as_str(),
				balance.as_str(),
			])?;
		}

		let bytes = writer
			.into_inner()
			.map_err(|e| anyhow!("failed to write CSV: {}", e))?;

		Ok(format!(
			"{}\n{}\n\n{}",
			self.totals_line(),
			self.range_line(),
			String::from_utf8(bytes)?.trim_end()
		))
	}

	fn render_html(&self) -> String {
		let mut table = Table::new(COLUMNS.len());
		table.class("table");
		table.row_headers();
		table.add_header(COLUMNS.to_vec());

		for row in self.report.rows() {
			table.add_row(vec![
				row.account.as_str(),
				&row.description,
				&row.debit.to_string(),
				&row.credit.to_string(),
				&row.balance.to_string(),
			]);
		}

		html! {
			div class="output" {
				p {
					(self.totals_line())
					br;
					(self.range_line())
				}
				(table)
			}
		}
		.into_string()
	}
}
