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
use std::fs;
use std::process::Command;

/// An empty config, so only the flags given here shape the report.
const CONFIG: &str = "tests/test_data/config.toml";

/// Dynamically collects test cases from a given directory.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.json") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_in.json", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	test_cases
}

#[test]
fn test_integration_html() {
	let test_cases = collect_test_cases("html");
	execute(
		"html",
		test_cases,
		true,
		"tb",
		vec![
			"--from", "100", "-b", "2024-01-01", "-e", "2024-12-31",
			"--format", "html",
		],
	);
}

#[test]
fn test_integration_csv() {
	let test_cases = collect_test_cases("csv");
	execute(
		"csv",
		test_cases,
		true,
		"tb",
		vec![
			"--from", "100", "-b", "2024-01-01", "-e", "2024-12-31",
			"--format", "csv",
		],
	);
}

#[test]
fn test_integration_start_period_fallback() {
	let test_cases = collect_test_cases("fallback");
	execute(
		"fallback",
		test_cases,
		true,
		"tb",
		vec![
			"--from", "100", "--to", "200", "-b", "soon", "-e", "2024-12-31",
			"--format", "csv",
		],
	);
}

#[test]
fn test_integration_incomplete_input() {
	let test_cases = collect_test_cases("incomplete");
	execute(
		"incomplete",
		test_cases,
		true,
		"tb",
		vec![
			"--from", "100", "-e", "2024-12-31", "--format", "html",
		],
	);
}

#[test]
fn test_integration_check() {
	let test_cases = collect_test_cases("check");
	execute("check", test_cases, true, "check", vec![]);
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute(
		"failures",
		test_cases,
		false,
		"tb",
		vec![
			"-b", "2024-01-01", "-e", "2024-12-31", "--format", "csv",
		],
	);
}

#[test]
fn test_integration_invalid_end_date() {
	let test_cases = collect_test_cases("badend");
	execute(
		"badend",
		test_cases,
		false,
		"tb",
		vec![
			"-b", "2024-01-01", "-e", "2024-13-01", "--format", "csv",
		],
	);
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	should_succeed: bool,
	cmd: &str,
	args: Vec<&str>,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		// the user's own config must not leak into the run
		let all_args = [
			vec!["run", "--", "-f", loc.as_str(), "--config", CONFIG, cmd],
			args.clone(),
		]
		.concat();

		let output = Command::new("cargo")
			.args(all_args)
			.output()
			.expect("Failed to execute process");

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);

			// each line of the expected file must show up in the error
			let stderr = String::from_utf8_lossy(&output.stderr);
			for line in expected_output.lines().filter(|l| !l.is_empty()) {
				assert!(
					stderr.contains(line),
					"Error for {} did not mention {:?}; got:\n{}",
					input_file,
					line,
					stderr
				);
			}
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}