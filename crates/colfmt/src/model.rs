//! Tabular data model: columns, headings, and the constructors that
//! assemble them from row-major, column-major, or delimited input.

use std::io;

use crate::align::{AlignSpec, Alignment};
use crate::error::ModelError;
use crate::util::display_width;

/// A single vertical slice of a table: cell data, an optional heading, and
/// the alignment applied when its cells are padded.
///
/// Columns are created by the [`Model`] constructors; the alignment is
/// resolved there and is never "auto" on a built column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    data: Vec<String>,
    heading: Option<String>,
    align: Alignment,
}

impl Column {
    fn new(data: Vec<String>, heading: Option<String>, align: Alignment) -> Self {
        Column {
            data,
            heading,
            align,
        }
    }

    /// The cell values, in row order.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// The heading, when one was attached.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// The alignment resolved at model construction.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Display width of the column: the longest of the heading and every
    /// cell. Recomputed on each call, never cached. An empty column without
    /// a heading has width 0.
    pub fn width(&self) -> usize {
        let data_width = self
            .data
            .iter()
            .map(|cell| display_width(cell))
            .max()
            .unwrap_or(0);
        let heading_width = self.heading.as_deref().map_or(0, display_width);
        data_width.max(heading_width)
    }
}

/// The full table: an ordered collection of [`Column`]s with a uniform row
/// count.
///
/// A model is immutable once built. [`Model::with_aligns`] returns a new
/// model sharing the same cell data rather than mutating in place, so a
/// model can be rendered while derived models exist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    columns: Vec<Column>,
}

impl Model {
    /// Build a model from row-major data.
    ///
    /// When `headers` is set, the first row becomes the column headings and
    /// is not part of the data. Rows must all have the same length.
    ///
    /// # Errors
    ///
    /// [`ModelError::Shape`] when a row's length disagrees with the first
    /// row's, [`ModelError::AlignCount`] when an explicit alignment list
    /// does not match the column count.
    pub fn from_rows<R, C, S>(rows: R, headers: bool, align: AlignSpec) -> Result<Model, ModelError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let expected = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ModelError::Shape {
                    index,
                    found: row.len(),
                    expected,
                });
            }
        }

        let headings = (headers && !rows.is_empty()).then(|| rows.remove(0));

        let mut columns: Vec<Vec<String>> = (0..expected)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for row in rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        Self::build(columns, headings, align)
    }

    /// Build a model from column-major data: each inner sequence is one
    /// column, no transposition happens.
    ///
    /// # Errors
    ///
    /// [`ModelError::Shape`] when column lengths differ,
    /// [`ModelError::HeadingCount`] when a headings list does not cover
    /// every column, [`ModelError::AlignCount`] as in [`Model::from_rows`].
    pub fn from_columns<C, R, S>(
        columns: C,
        headings: Option<Vec<String>>,
        align: AlignSpec,
    ) -> Result<Model, ModelError>
    where
        C: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<Vec<String>> = columns
            .into_iter()
            .map(|column| column.into_iter().map(Into::into).collect())
            .collect();
        Self::build(columns, headings, align)
    }

    /// Build a model from delimited text, one record per line.
    ///
    /// Blank lines are ignored. A record whose field count disagrees with
    /// the first record's surfaces as [`ModelError::Parse`]; no partial
    /// model is returned.
    pub fn from_csv<R: io::Read>(
        reader: R,
        delimiter: u8,
        headers: bool,
        align: AlignSpec,
    ) -> Result<Model, ModelError> {
        let rows = read_records(reader, delimiter)?;
        Self::from_rows(rows, headers, align)
    }

    /// Build a model from comma-delimited text. Convenience alias for
    /// [`Model::from_csv`] with a `,` delimiter.
    pub fn from_stream<R: io::Read>(
        reader: R,
        headers: bool,
        align: AlignSpec,
    ) -> Result<Model, ModelError> {
        Self::from_csv(reader, b',', headers, align)
    }

    /// Build a model from column-wise delimited text: each input line is
    /// one column, split on `delimiter`. When `headers` is set, the first
    /// field of each line is that column's heading.
    pub fn from_column_lines<R: io::Read>(
        reader: R,
        delimiter: u8,
        headers: bool,
        align: AlignSpec,
    ) -> Result<Model, ModelError> {
        let records = read_records(reader, delimiter)?;

        let mut columns = Vec::with_capacity(records.len());
        let mut headings = headers.then(|| Vec::with_capacity(records.len()));
        for mut record in records {
            if let Some(headings) = &mut headings {
                headings.push(if record.is_empty() {
                    String::new()
                } else {
                    record.remove(0)
                });
            }
            columns.push(record);
        }

        Self::build(columns, headings, align)
    }

    /// Return a new model with identical data and headings but replaced
    /// per-column alignments. The source model is untouched.
    ///
    /// # Errors
    ///
    /// [`ModelError::AlignCount`] when `aligns` does not cover every column.
    pub fn with_aligns(&self, aligns: &[Alignment]) -> Result<Model, ModelError> {
        if aligns.len() != self.columns.len() {
            return Err(ModelError::AlignCount {
                found: aligns.len(),
                expected: self.columns.len(),
            });
        }
        let columns = self
            .columns
            .iter()
            .zip(aligns)
            .map(|(column, align)| {
                Column::new(column.data.clone(), column.heading.clone(), *align)
            })
            .collect();
        Ok(Model { columns })
    }

    /// The columns, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows. Uniform across columns by construction.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.data.len())
    }

    /// Whether the model carries headings.
    pub fn has_headings(&self) -> bool {
        self.columns.iter().any(|column| column.heading.is_some())
    }

    /// Shared tail of every constructor: enforce the uniform row count,
    /// attach headings, and resolve alignments.
    fn build(
        columns: Vec<Vec<String>>,
        headings: Option<Vec<String>>,
        align: AlignSpec,
    ) -> Result<Model, ModelError> {
        let expected = columns.first().map_or(0, Vec::len);
        for (index, column) in columns.iter().enumerate() {
            if column.len() != expected {
                return Err(ModelError::Shape {
                    index,
                    found: column.len(),
                    expected,
                });
            }
        }

        if let Some(headings) = &headings {
            if headings.len() != columns.len() {
                return Err(ModelError::HeadingCount {
                    found: headings.len(),
                    expected: columns.len(),
                });
            }
        }

        let aligns = align.resolve(&columns)?;
        let headings: Vec<Option<String>> = match headings {
            Some(headings) => headings.into_iter().map(Some).collect(),
            None => vec![None; columns.len()],
        };

        let columns = columns
            .into_iter()
            .zip(headings)
            .zip(aligns)
            .map(|((data, heading), align)| Column::new(data, heading, align))
            .collect();
        Ok(Model { columns })
    }
}

/// Read delimited records through the csv reader. Field counts must agree
/// with the first record; blank lines yield no record.
fn read_records<R: io::Read>(reader: R, delimiter: u8) -> Result<Vec<Vec<String>>, ModelError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // --- from_rows tests ---

    #[test]
    fn from_rows_transposes() {
        let model = Model::from_rows(
            vec![vec!["a", "1"], vec!["b", "2"], vec!["c", "3"]],
            false,
            AlignSpec::default(),
        )
        .unwrap();

        assert_eq!(model.column_count(), 2);
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.columns()[0].data(), &["a", "b", "c"]);
        assert_eq!(model.columns()[1].data(), &["1", "2", "3"]);
        assert!(!model.has_headings());
    }

    #[test]
    fn from_rows_consumes_header_row() {
        let model = Model::from_rows(
            vec![vec!["Name", "Age"], vec!["Alice", "25"]],
            true,
            AlignSpec::default(),
        )
        .unwrap();

        assert_eq!(model.row_count(), 1);
        assert_eq!(model.columns()[0].heading(), Some("Name"));
        assert_eq!(model.columns()[1].heading(), Some("Age"));
        assert_eq!(model.columns()[0].data(), &["Alice"]);
    }

    #[test]
    fn from_rows_header_only_input_keeps_headings() {
        let model = Model::from_rows(vec![vec!["A", "B"]], true, AlignSpec::default()).unwrap();
        assert_eq!(model.column_count(), 2);
        assert_eq!(model.row_count(), 0);
        assert!(model.has_headings());
    }

    #[test]
    fn from_rows_empty_input() {
        let model =
            Model::from_rows(Vec::<Vec<String>>::new(), true, AlignSpec::default()).unwrap();
        assert_eq!(model.column_count(), 0);
        assert_eq!(model.row_count(), 0);
    }

    #[test]
    fn from_rows_ragged_input_fails() {
        let err = Model::from_rows(
            vec![vec!["a", "b"], vec!["c"]],
            false,
            AlignSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::Shape {
                index: 1,
                found: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn from_rows_roundtrips_through_columns() {
        let rows = vec![
            strings(&["a", "1", "x"]),
            strings(&["b", "2", "y"]),
            strings(&["c", "3", "z"]),
        ];
        let model = Model::from_rows(rows.clone(), false, AlignSpec::default()).unwrap();

        // Transposing back must reproduce the original row data exactly.
        let rebuilt: Vec<Vec<String>> = (0..model.row_count())
            .map(|row| {
                model
                    .columns()
                    .iter()
                    .map(|column| column.data()[row].clone())
                    .collect()
            })
            .collect();
        assert_eq!(rebuilt, rows);
    }

    // --- from_columns tests ---

    #[test]
    fn from_columns_keeps_columns_as_given() {
        let model = Model::from_columns(
            vec![vec!["a", "b"], vec!["1", "2"]],
            Some(strings(&["Letter", "Digit"])),
            AlignSpec::default(),
        )
        .unwrap();

        assert_eq!(model.columns()[0].data(), &["a", "b"]);
        assert_eq!(model.columns()[1].heading(), Some("Digit"));
    }

    #[test]
    fn from_columns_ragged_input_fails() {
        let err = Model::from_columns(
            vec![vec!["a", "b"], vec!["1"]],
            None,
            AlignSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Shape { index: 1, .. }));
    }

    #[test]
    fn from_columns_heading_count_mismatch_fails() {
        let err = Model::from_columns(
            vec![vec!["a"], vec!["b"]],
            Some(strings(&["only one"])),
            AlignSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::HeadingCount {
                found: 1,
                expected: 2
            }
        ));
    }

    // --- delimited input tests ---

    #[test]
    fn from_csv_splits_on_delimiter() {
        let model = Model::from_csv(
            "a;1\nb;2\n".as_bytes(),
            b';',
            false,
            AlignSpec::default(),
        )
        .unwrap();
        assert_eq!(model.columns()[0].data(), &["a", "b"]);
        assert_eq!(model.columns()[1].data(), &["1", "2"]);
    }

    #[test]
    fn from_csv_ignores_trailing_blank_lines() {
        let model =
            Model::from_csv("a,1\nb,2\n\n\n".as_bytes(), b',', false, AlignSpec::default())
                .unwrap();
        assert_eq!(model.row_count(), 2);
    }

    #[test]
    fn from_csv_ragged_record_fails_with_parse() {
        let err = Model::from_csv(
            "a,b,c\nd,e\n".as_bytes(),
            b',',
            false,
            AlignSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn from_stream_is_comma_delimited() {
        let model =
            Model::from_stream("x,y\n1,2\n".as_bytes(), true, AlignSpec::default()).unwrap();
        assert_eq!(model.columns()[0].heading(), Some("x"));
        assert_eq!(model.row_count(), 1);
    }

    #[test]
    fn from_column_lines_without_headers() {
        let model = Model::from_column_lines(
            "a,b,c\n1,2,3\n".as_bytes(),
            b',',
            false,
            AlignSpec::default(),
        )
        .unwrap();
        assert_eq!(model.column_count(), 2);
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.columns()[0].data(), &["a", "b", "c"]);
        assert_eq!(model.columns()[1].data(), &["1", "2", "3"]);
    }

    #[test]
    fn from_column_lines_first_field_becomes_heading() {
        let model = Model::from_column_lines(
            "Names,Alice,Bob\nAges,25,30\n".as_bytes(),
            b',',
            true,
            AlignSpec::default(),
        )
        .unwrap();
        assert_eq!(model.columns()[0].heading(), Some("Names"));
        assert_eq!(model.columns()[1].heading(), Some("Ages"));
        assert_eq!(model.columns()[1].data(), &["25", "30"]);
    }

    // --- alignment resolution tests ---

    #[test]
    fn default_alignment_is_left() {
        let model =
            Model::from_rows(vec![vec!["1", "2"]], false, AlignSpec::default()).unwrap();
        assert_eq!(model.columns()[0].align(), Alignment::Left);
        assert_eq!(model.columns()[1].align(), Alignment::Left);
    }

    #[test]
    fn auto_detects_per_column() {
        let model = Model::from_rows(
            vec![vec!["apple", "25"], vec!["pear", "30"]],
            false,
            AlignSpec::Auto,
        )
        .unwrap();
        assert_eq!(model.columns()[0].align(), Alignment::Left);
        assert_eq!(model.columns()[1].align(), Alignment::Right);
    }

    #[test]
    fn auto_detection_excludes_headings() {
        // The heading is text, but the data is numeric: still right-aligned.
        let model = Model::from_rows(
            vec![vec!["Age"], vec!["25"], vec!["30"]],
            true,
            AlignSpec::Auto,
        )
        .unwrap();
        assert_eq!(model.columns()[0].align(), Alignment::Right);
    }

    #[test]
    fn per_column_list_must_match_column_count() {
        let err = Model::from_rows(
            vec![vec!["a", "b"]],
            false,
            AlignSpec::PerColumn(vec![Alignment::Right]),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::AlignCount { .. }));
    }

    // --- with_aligns tests ---

    #[test]
    fn with_aligns_replaces_alignments() {
        let model = Model::from_rows(
            vec![vec!["a", "1"], vec!["b", "2"]],
            false,
            AlignSpec::default(),
        )
        .unwrap();
        let realigned = model
            .with_aligns(&[Alignment::Center, Alignment::Right])
            .unwrap();

        assert_eq!(realigned.columns()[0].align(), Alignment::Center);
        assert_eq!(realigned.columns()[1].align(), Alignment::Right);
        assert_eq!(realigned.columns()[0].data(), model.columns()[0].data());
    }

    #[test]
    fn with_aligns_leaves_source_untouched() {
        let model = Model::from_rows(vec![vec!["a"]], false, AlignSpec::default()).unwrap();
        let before = model.clone();
        let _ = model.with_aligns(&[Alignment::Right]).unwrap();
        assert_eq!(model, before);
    }

    #[test]
    fn with_aligns_length_mismatch_fails() {
        let model =
            Model::from_rows(vec![vec!["a", "b"]], false, AlignSpec::default()).unwrap();
        let err = model.with_aligns(&[Alignment::Right]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::AlignCount {
                found: 1,
                expected: 2
            }
        ));
    }

    // --- width tests ---

    #[test]
    fn width_is_longest_cell() {
        let model = Model::from_rows(
            vec![vec!["a"], vec!["bb"], vec!["ccc"]],
            false,
            AlignSpec::default(),
        )
        .unwrap();
        assert_eq!(model.columns()[0].width(), 3);
    }

    #[test]
    fn width_includes_heading() {
        let model = Model::from_rows(
            vec![vec!["LongHeader"], vec!["a"], vec!["bb"]],
            true,
            AlignSpec::default(),
        )
        .unwrap();
        assert_eq!(model.columns()[0].width(), 10);
    }

    #[test]
    fn empty_column_width_is_zero() {
        let model =
            Model::from_columns(vec![Vec::<String>::new()], None, AlignSpec::default()).unwrap();
        assert_eq!(model.columns()[0].width(), 0);
    }
}
