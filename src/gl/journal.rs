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
use crate::util::date::Date;
use serde::Deserialize;

/// One posted line against an account. Debit and credit are both carried as
/// non-negative amounts; normally only one of them is nonzero.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JournalEntry {
	#[serde(rename = "ACCOUNT")]
	pub account: AccountCode,
	#[serde(rename = "PERIOD")]
	pub period: Date,
	#[serde(rename = "DEBIT", default)]
	pub debit: f64,
	#[serde(rename = "CREDIT", default)]
	pub credit: f64,
}

impl JournalEntry {
	pub fn new(account: &str, period: Date, debit: f64, credit: f64) -> Self {
		Self {
			account: AccountCode::new(account),
			period,
			debit,
			credit,
		}
	}

	pub fn is_within_periods(&self, start: &Date, end: &Date) -> bool {
		&self.period >= start && &self.period <= end
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_defaults_missing_amounts() {
		let entry: JournalEntry = serde_json::from_str(
			r#"{"ACCOUNT": 100, "PERIOD": "2024-01-15", "DEBIT": 50}"#,
		)
		.unwrap();
		assert_eq!(
			entry,
			JournalEntry::new(
				"100",
				Date::from_str("2024-01-15").unwrap(),
				50.0,
				0.0
			)
		);
	}

	#[test]
	fn test_rejects_bad_period() {
		let result = serde_json::from_str::<JournalEntry>(
			r#"{"ACCOUNT": "100", "PERIOD": "15/01/2024", "DEBIT": 50}"#,
		);
		assert!(result.is_err());
	}

	#[test]
	fn test_period_bounds_are_inclusive() {
		let start = Date::from_str("2024-01-01").unwrap();
		let end = Date::from_str("2024-01-31").unwrap();

		let on_start = JournalEntry::new("100", start, 1.0, 0.0);
		let on_end = JournalEntry::new("100", end, 1.0, 0.0);
		let after = JournalEntry::new(
			"100",
			Date::from_str("2024-02-01").unwrap(),
			1.0,
			0.0,
		);

		assert!(on_start.is_within_periods(&start, &end));
		assert!(on_end.is_within_periods(&start, &end));
		assert!(!after.is_within_periods(&start, &end));
	}
}
