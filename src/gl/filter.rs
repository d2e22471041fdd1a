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
use clap::ValueEnum;
use serde::Deserialize;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	Csv,
	Html,
}

/// The start of the period range as the user gave it. A value that was typed
/// but does not parse is kept apart from one that was never given, because
/// only the latter hides the report.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PeriodInput {
	#[default]
	Unset,
	Invalid(String),
	Date(Date),
}

impl PeriodInput {
	/// Never fails; unparseable text becomes Invalid.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw {
			None => PeriodInput::Unset,
			Some(s) => match Date::from_str(s) {
				Ok(date) => PeriodInput::Date(date),
				Err(_) => PeriodInput::Invalid(s.to_string()),
			},
		}
	}

	pub fn is_set(&self) -> bool {
		!matches!(self, PeriodInput::Unset)
	}

	pub fn valid_date(&self) -> Option<Date> {
		match self {
			PeriodInput::Date(date) => Some(*date),
			_ => None,
		}
	}
}

/// What the user asked the trial balance to cover and how to show it. Every
/// field may be missing; missing fields either take a default from the
/// ledger or leave the report in its "not ready" state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
	pub start_account: Option<AccountCode>,
	pub end_account: Option<AccountCode>,
	pub start_period: PeriodInput,
	pub end_period: Option<Date>,
	pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_period_input_parse() {
		assert_eq!(PeriodInput::parse(None), PeriodInput::Unset);
		assert_eq!(
			PeriodInput::parse(Some("2024-02-01")),
			PeriodInput::Date(Date::from_str("2024-02-01").unwrap())
		);
		assert_eq!(
			PeriodInput::parse(Some("not a date")),
			PeriodInput::Invalid("not a date".to_string())
		);
	}

	#[test]
	fn test_period_input_is_set() {
		assert!(!PeriodInput::Unset.is_set());
		assert!(PeriodInput::Invalid("x".to_string()).is_set());
		assert!(PeriodInput::parse(Some("2024-02-01")).is_set());
		assert_eq!(PeriodInput::Invalid("x".to_string()).valid_date(), None);
	}

	#[test]
	fn test_format_from_config_text() {
		#[derive(Deserialize)]
		struct Wrapper {
			format: OutputFormat,
		}
		let w: Wrapper = toml::from_str(r#"format = "csv""#).unwrap();
		assert_eq!(w.format, OutputFormat::Csv);
		assert!(toml::from_str::<Wrapper>(r#"format = "pdf""#).is_err());
	}
}
