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
use maud::{html, Markup, Render};

/// HTML table builder for reports that list one object per row.
///
/// Header rows go into the thead and data rows into the tbody, in the order
/// they were added. Cell text is escaped by the markup renderer.
pub struct Table {
	column_count: usize,
	class: Option<String>,
	row_headers: bool,
	rows: Vec<Row>,
}

pub enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			class: None,
			row_headers: false,
			rows: Vec::new(),
		}
	}

	/// Sets the class attribute of the table element.
	pub fn class(&mut self, class: &str) {
		self.class = Some(class.to_string());
	}

	/// Renders the first cell of each data row as a row header.
	pub fn row_headers(&mut self) {
		self.row_headers = true;
	}

	/// Adds a header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		let cells = self.pad(row);
		self.rows.push(Row::Header(cells));
	}

	/// Adds a data row.
	pub fn add_row(&mut self, row: Vec<&str>) {
		let cells = self.pad(row);
		self.rows.push(Row::Data(cells));
	}

	/// Short rows are filled with empty cells and long ones cut, so every
	/// rendered row has the same number of columns.
	fn pad(&self, row: Vec<&str>) -> Vec<String> {
		let mut cells: Vec<String> = row
			.into_iter()
			.take(self.column_count)
			.map(|s| s.to_string())
			.collect();
		cells.resize(self.column_count, String::new());
		cells
	}

	fn has_header(&self) -> bool {
		self.rows.iter().any(|r| matches!(r, Row::Header(_)))
	}
}

impl Render for Table {
	fn render(&self) -> Markup {
		html! {
			table class=[self.class.as_deref()] {
				@if self.has_header() {
					thead {
						@for row in &self.rows {
							@if let Row::Header(cells) = row {
								tr {
									@for cell in cells {
										th { (cell) }
									}
								}
							}
						}
					}
				}
				tbody {
					@for row in &self.rows {
						@if let Row::Data(cells) = row {
							tr {
								@for (i, cell) in cells.iter().enumerate() {
									@if i == 0 && self.row_headers {
										th scope="row" { (cell) }
									} @else {
										td { (cell) }
									}
								}
							}
						}
					}
				}
			}
		}
	}
}
