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
use crate::config::config_file::Config;
use crate::gl::account::AccountCode;
use crate::gl::filter::{FilterCriteria, OutputFormat, PeriodInput};
use crate::gl::ledger::Ledger;
use crate::parsing::filesystem::Filesystem;
use crate::parsing::snapshot;
use crate::reports::balance_reporter::BalanceReporter;
use crate::util::date::Date;
use anyhow::{anyhow, Context, Error};
use clap::{Parser, ValueEnum};
use tracing::debug;

mod config;
mod gl;
mod parsing;
mod reports;
mod util;

#[derive(Parser)]
#[command(
	name = "tbal",
	version = "1.0",
	about = "Trial balance reports over a ledger snapshot"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the ledger snapshot (JSON)
	#[arg(short)]
	file: Option<String>,

	/// First account to include
	#[arg(long = "from")]
	start_account: Option<String>,

	/// Last account to include (default: last account in the ledger)
	#[arg(long = "to")]
	end_account: Option<String>,

	/// Ignore entries prior to this date (YYYY-MM-DD). If this is not a valid
	/// date, the earliest period in the ledger is used instead
	#[arg(short, long)]
	begin: Option<String>,

	/// Ignore entries after this date (YYYY-MM-DD)
	#[arg(short, long)]
	end: Option<String>,

	/// Output format
	#[arg(long, value_enum)]
	format: Option<OutputFormat>,

	/// Custom config file location (default: ~/.config/tbal/config.toml)
	#[arg(long)]
	config: Option<String>,
}

impl Cli {
	/// Flags win over config values.
	fn filter(&self, config: &Config) -> Result<FilterCriteria, Error> {
		let end_period = self
			.end
			.as_deref()
			.map(Date::from_str)
			.transpose()
			.context("invalid end date")?;

		Ok(FilterCriteria {
			start_account: self.start_account.as_deref().map(AccountCode::new),
			end_account: self.end_account.as_deref().map(AccountCode::new),
			start_period: PeriodInput::parse(self.begin.as_deref()),
			end_period,
			format: self.format.or(config.default_format()),
		})
	}

	fn ledger_path<'a>(&'a self, config: &'a Config) -> Result<&'a str, Error> {
		self.file
			.as_ref()
			.or(config.default_ledger())
			.map(String::as_str)
			.ok_or_else(|| {
				anyhow!("No ledger specified (use -f or report.ledger in config)")
			})
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Tb, // trial balance

	Check, // find possible data integrity concerns
}

fn main() -> Result<(), Error> {
	util::logging::init_tracing();

	let args = Cli::parse();
	let fs = Filesystem::new();

	let config = fs.get_config(args.config.as_ref())?;
	let ledger = snapshot::load(&fs, args.ledger_path(&config)?)?;

	match args.command {
		Directive::Tb => trial_balance(&ledger, args.filter(&config)?)?,
		Directive::Check => {
			for warning in ledger.check() {
				println!("{}", warning);
			}
			println!("Done");
		},
	}

	Ok(())
}

fn trial_balance(ledger: &Ledger, filter: FilterCriteria) -> Result<(), Error> {
	let reporter = BalanceReporter::from_state(ledger, filter);

	debug!(rows = reporter.report().rows().len(), "trial balance computed");

	match reporter.render()? {
		Some(output) => println!("{}", output),
		None => debug!("report input incomplete; nothing to show"),
	}

	Ok(())
}
