//! Screen and table renderers.
//!
//! Both renderers borrow a [`Model`] and produce the aligned text block
//! through their `Display` impls. Rendering is a pure pull over the model:
//! it never fails, never mutates, and yields the same output on every call.

use std::fmt;

use crate::model::{Column, Model};
use crate::util::pad;

/// Default string placed between adjacent columns.
pub const DEFAULT_SPACER: &str = "  ";

/// Renders a model's data rows as aligned columns.
///
/// Each cell is padded to its column's width according to the column's
/// alignment, cells are joined with the spacer, and rows are joined with
/// newlines. Trailing whitespace produced by the padding is preserved.
///
/// # Example
///
/// ```rust
/// use colfmt::{AlignSpec, Model, Screen};
///
/// let model = Model::from_rows(
///     vec![vec!["a", "10"], vec!["bbb", "5"]],
///     false,
///     AlignSpec::Auto,
/// )
/// .unwrap();
///
/// assert_eq!(Screen::new(&model).to_string(), "a    10\nbbb   5");
/// ```
pub struct Screen<'a> {
    model: &'a Model,
    spacer: String,
}

impl<'a> Screen<'a> {
    /// Create a renderer over `model` with the default two-space spacer.
    pub fn new(model: &'a Model) -> Self {
        Screen {
            model,
            spacer: DEFAULT_SPACER.to_string(),
        }
    }

    /// Replace the inter-column spacer.
    pub fn spacer(mut self, spacer: impl Into<String>) -> Self {
        self.spacer = spacer.into();
        self
    }

    /// Append one padded line per data row to `lines`.
    fn data_lines(&self, widths: &[usize], lines: &mut Vec<String>) {
        for row in 0..self.model.row_count() {
            let line = self
                .model
                .columns()
                .iter()
                .zip(widths)
                .map(|(column, &width)| pad(&column.data()[row], width, column.align()))
                .collect::<Vec<_>>()
                .join(&self.spacer);
            lines.push(line);
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = column_widths(self.model);
        let mut lines = Vec::new();
        self.data_lines(&widths, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}

/// Renders a model with a heading line and an optional dash separator
/// above the data rows.
///
/// Composes a [`Screen`] for the data rows rather than duplicating the
/// padding logic. The heading line is always emitted (headings default to
/// the empty string); the separator is one `-` run per column, sized to
/// the column width, and is on by default.
///
/// # Example
///
/// ```rust
/// use colfmt::{Alignment, AlignSpec, Model, Table};
///
/// let model = Model::from_rows(
///     vec![vec!["Name", "Age"], vec!["Alice", "25"], vec!["Bob", "30"]],
///     true,
///     AlignSpec::PerColumn(vec![Alignment::Left, Alignment::Right]),
/// )
/// .unwrap();
///
/// assert_eq!(
///     Table::new(&model).to_string(),
///     "Name   Age\n\
///      -----  ---\n\
///      Alice   25\n\
///      Bob     30"
/// );
/// ```
pub struct Table<'a> {
    screen: Screen<'a>,
    show_separator: bool,
}

impl<'a> Table<'a> {
    /// Create a renderer over `model` with the default spacer and the
    /// separator line enabled.
    pub fn new(model: &'a Model) -> Self {
        Table {
            screen: Screen::new(model),
            show_separator: true,
        }
    }

    /// Replace the inter-column spacer.
    pub fn spacer(mut self, spacer: impl Into<String>) -> Self {
        self.screen = self.screen.spacer(spacer);
        self
    }

    /// Emit or suppress the dash separator line under the headings.
    pub fn show_separator(mut self, show: bool) -> Self {
        self.show_separator = show;
        self
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.screen.model;
        if model.column_count() == 0 {
            return Ok(());
        }

        let widths = column_widths(model);
        let spacer = &self.screen.spacer;
        let mut lines = Vec::new();

        let heading_line = model
            .columns()
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(column.heading().unwrap_or(""), width, column.align()))
            .collect::<Vec<_>>()
            .join(spacer);
        lines.push(heading_line);

        if self.show_separator {
            let separator = widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join(spacer);
            lines.push(separator);
        }

        self.screen.data_lines(&widths, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}

fn column_widths(model: &Model) -> Vec<usize> {
    model.columns().iter().map(Column::width).collect()
}
