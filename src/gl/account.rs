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
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// The code identifying a ledger account, e.g. "100" or "4000-SALES".
///
/// Codes made only of digits compare numerically, so that "900" sorts before
/// "1000" the way a chart of accounts reads. They all sort ahead of codes
/// with any other character, which compare as plain text. Snapshots may carry
/// codes as JSON strings or as integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawCode")]
pub struct AccountCode(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
	Text(String),
	Number(u64),
}

impl From<RawCode> for AccountCode {
	fn from(raw: RawCode) -> Self {
		match raw {
			RawCode::Text(s) => AccountCode::new(&s),
			RawCode::Number(n) => AccountCode(n.to_string()),
		}
	}
}

impl AccountCode {
	pub fn new(code: &str) -> Self {
		Self(code.trim().to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	fn is_numeric(&self) -> bool {
		!self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
	}

	/// Compares two digit strings by value without parsing them, so codes of
	/// any length work.
	fn cmp_numeric(a: &str, b: &str) -> Ordering {
		let a = a.trim_start_matches('0');
		let b = b.trim_start_matches('0');
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	}

	/// True iff this code lies within the inclusive range, where a missing
	/// end means the range is open on that side.
	pub fn is_within(
		&self,
		start: Option<&AccountCode>,
		end: Option<&AccountCode>,
	) -> bool {
		start.map_or(true, |s| self >= s) && end.map_or(true, |e| self <= e)
	}
}

impl PartialOrd for AccountCode {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for AccountCode {
	fn cmp(&self, other: &Self) -> Ordering {
		// mixing the two rules per pair would not be transitive
		match (self.is_numeric(), other.is_numeric()) {
			// "0100" and "100" are equal in value but not the same code
			(true, true) => AccountCode::cmp_numeric(&self.0, &other.0)
				.then_with(|| self.0.cmp(&other.0)),
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			(false, false) => self.0.cmp(&other.0),
		}
	}
}

impl fmt::Display for AccountCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A ledger account as held by the chart of accounts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Account {
	#[serde(rename = "ACCOUNT")]
	pub code: AccountCode,
	#[serde(rename = "LABEL", default)]
	pub label: String,
}

impl Account {
	pub fn new(code: &str, label: &str) -> Self {
		Self {
			code: AccountCode::new(code),
			label: label.to_string(),
		}
	}
}
