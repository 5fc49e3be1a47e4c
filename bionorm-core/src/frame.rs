//! Minimal column-oriented table for batches of bios.
//!
//! A [`BioTable`] is an ordered set of named columns of equal length. The
//! pipeline reads text from one column and adds a parallel column; row count
//! and row order never change.

use std::io::{self, Write};

use bionorm_types::{Lemmatizer, PipelineError, StopwordFilter};

use crate::pipeline::{default_normalizer, BioNormalizer};

/// Column holding the raw bio text.
pub const SOURCE_COLUMN: &str = "user_bio";
/// Column written by [`tokenize_bios`].
pub const TOKENS_COLUMN: &str = "tokens";

/// A single table value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// No value.
    Missing,
}

impl Cell {
    /// Borrows the text, if this cell holds text.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value kind, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Cell::Text(_) => "text",
            Cell::Number(_) => "number",
            Cell::Missing => "missing value",
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells in row order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Ordered, named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BioTable {
    columns: Vec<Column>,
    rows: usize,
}

impl BioTable {
    /// Creates an empty table. The first column sets the row count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table with a single [`SOURCE_COLUMN`].
    ///
    /// ```
    /// use bionorm_core::frame::BioTable;
    ///
    /// let table = BioTable::from_bios(["first bio", "second bio"]);
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.column_names(), ["user_bio"]);
    /// ```
    pub fn from_bios<I, S>(bios: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Cell> = bios.into_iter().map(|b| Cell::Text(b.into())).collect();
        Self {
            rows: cells.len(),
            columns: vec![Column {
                name: SOURCE_COLUMN.to_owned(),
                cells,
            }],
        }
    }

    /// Builder form of [`BioTable::insert_column`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        cells: Vec<Cell>,
    ) -> Result<Self, PipelineError> {
        self.insert_column(name, cells)?;
        Ok(self)
    }

    /// Adds a column, replacing any column with the same name in place.
    ///
    /// # Errors
    ///
    /// [`PipelineError::LengthMismatch`] if the table already has columns and
    /// `cells` has a different length.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Cell>,
    ) -> Result<(), PipelineError> {
        let name = name.into();
        if self.columns.is_empty() {
            self.rows = cells.len();
        } else if cells.len() != self.rows {
            return Err(PipelineError::LengthMismatch {
                column: name,
                expected: self.rows,
                actual: cells.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.cells = cells,
            None => self.columns.push(Column { name, cells }),
        }
        Ok(())
    }

    /// Cells of a column.
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
    }

    /// Text of every row of a column.
    ///
    /// # Errors
    ///
    /// [`PipelineError::MissingColumn`] if there is no such column and
    /// [`PipelineError::NotText`] at the first non-text cell.
    pub fn text_column(&self, name: &str) -> Result<Vec<&str>, PipelineError> {
        let cells = self
            .column(name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_owned()))?;

        cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.as_text().ok_or_else(|| PipelineError::NotText {
                    row,
                    column: name.to_owned(),
                    found: cell.kind(),
                })
            })
            .collect()
    }

    /// Maps `f` over the text of a column, producing one output per row in
    /// row order.
    pub fn map_column<F>(&self, source: &str, f: F) -> Result<Vec<String>, PipelineError>
    where
        F: FnMut(&str) -> String,
    {
        Ok(self.text_column(source)?.into_iter().map(f).collect())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Tokenizes every bio with the built-in English resources and prints the
/// report line to stdout.
pub fn tokenize_bios(table: BioTable) -> Result<BioTable, PipelineError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    tokenize_bios_with(default_normalizer(), table, &mut out)
}

/// Reads [`SOURCE_COLUMN`], writes [`TOKENS_COLUMN`] and writes one report
/// line with the number of rows processed to `report`.
///
/// # Errors
///
/// Fails if the source column is absent or holds a non-text cell, or if the
/// report cannot be written. The table is dropped on failure; use
/// [`tokenize_bios_in_place`] to keep it.
pub fn tokenize_bios_with<S, L, W>(
    normalizer: &BioNormalizer<S, L>,
    mut table: BioTable,
    report: &mut W,
) -> Result<BioTable, PipelineError>
where
    S: StopwordFilter,
    L: Lemmatizer,
    W: Write + ?Sized,
{
    tokenize_bios_in_place(normalizer, &mut table, report)?;
    Ok(table)
}

/// [`tokenize_bios_with`] on a borrowed table.
///
/// The report line is written before [`TOKENS_COLUMN`] is added, so on any
/// error the table is left as it was.
pub fn tokenize_bios_in_place<S, L, W>(
    normalizer: &BioNormalizer<S, L>,
    table: &mut BioTable,
    report: &mut W,
) -> Result<(), PipelineError>
where
    S: StopwordFilter,
    L: Lemmatizer,
    W: Write + ?Sized,
{
    let tokens = table.map_column(SOURCE_COLUMN, |bio| normalizer.preprocess_bio(bio))?;
    writeln!(
        report,
        "Complete. Number of bios that have been cleaned and tokenized : {}",
        tokens.len()
    )?;

    let cells = tokens.into_iter().map(Cell::Text).collect();
    table.insert_column(TOKENS_COLUMN, cells)?;
    log::info!("tokenized {} bios", table.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(table: BioTable) -> (Result<BioTable, PipelineError>, String) {
        let mut report = Vec::new();
        let result = tokenize_bios_with(default_normalizer(), table, &mut report);
        (result, String::from_utf8(report).unwrap())
    }

    #[test]
    fn tokens_column_added_in_row_order() {
        let table = BioTable::from_bios(["Running dogs", "", "Loving coding @me"]);
        let (result, report) = run(table);
        let table = result.unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.column_names(), ["user_bio", "tokens"]);
        assert_eq!(
            table.text_column(TOKENS_COLUMN).unwrap(),
            ["run dog", "", "love code"]
        );
        assert_eq!(
            report,
            "Complete. Number of bios that have been cleaned and tokenized : 3\n"
        );
    }

    #[test]
    fn other_columns_untouched() {
        let table = BioTable::from_bios(["coffee lover", "tea drinker"])
            .with_column("id", vec![Cell::Number(1.0), Cell::Number(2.0)])
            .unwrap();
        let (result, _) = run(table.clone());
        let out = result.unwrap();

        assert_eq!(out.column("id"), table.column("id"));
        assert_eq!(out.column(SOURCE_COLUMN), table.column(SOURCE_COLUMN));
        assert_eq!(out.column_names(), ["user_bio", "id", "tokens"]);
        assert_eq!(out.columns()[2].name(), TOKENS_COLUMN);
        assert_eq!(out.columns()[2].cells().len(), 2);
    }

    #[test]
    fn empty_table_reports_zero() {
        let (result, report) = run(BioTable::from_bios(Vec::<String>::new()));
        assert!(result.unwrap().is_empty());
        assert!(report.ends_with(": 0\n"));
    }

    #[test]
    fn non_text_cell_fails() {
        let table = BioTable::new()
            .with_column(
                SOURCE_COLUMN,
                vec![Cell::from("ok bio"), Cell::Missing, Cell::from(3.5)],
            )
            .unwrap();
        let (result, report) = run(table);

        match result.unwrap_err() {
            PipelineError::NotText { row, column, found } => {
                assert_eq!(row, 1);
                assert_eq!(column, SOURCE_COLUMN);
                assert_eq!(found, "missing value");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(report.is_empty());
    }

    #[test]
    fn missing_source_column_fails() {
        let table = BioTable::new()
            .with_column("bio", vec![Cell::from("x")])
            .unwrap();
        let (result, _) = run(table);
        assert!(matches!(
            result.unwrap_err(),
            PipelineError::MissingColumn(name) if name == SOURCE_COLUMN
        ));
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = BioTable::from_bios(["a", "b"])
            .with_column("id", vec![Cell::Number(1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn rerun_replaces_tokens_column() {
        let (first, _) = run(BioTable::from_bios(["Running dogs"]));
        let (second, _) = run(first.unwrap());
        let table = second.unwrap();
        assert_eq!(table.column_names(), ["user_bio", "tokens"]);
        assert_eq!(table.text_column(TOKENS_COLUMN).unwrap(), ["run dog"]);
    }

    #[test]
    fn map_column_preserves_length() {
        let table = BioTable::from_bios(["a", "bb", "ccc"]);
        let lengths = table
            .map_column(SOURCE_COLUMN, |s| s.len().to_string())
            .unwrap();
        assert_eq!(lengths, ["1", "2", "3"]);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_failure_surfaces() {
        let err = tokenize_bios_with(
            default_normalizer(),
            BioTable::from_bios(["bio"]),
            &mut FailingWriter,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Report(_)));
    }

    #[test]
    fn report_failure_keeps_table_in_place() {
        let mut table = BioTable::from_bios(["Running dogs"]);
        let err = tokenize_bios_in_place(default_normalizer(), &mut table, &mut FailingWriter)
            .unwrap_err();

        assert!(matches!(err, PipelineError::Report(_)));
        assert_eq!(table.column_names(), ["user_bio"]);
        assert_eq!(table.text_column(SOURCE_COLUMN).unwrap(), ["Running dogs"]);
    }

    #[test]
    fn in_place_adds_tokens() {
        let mut table = BioTable::from_bios(["Running dogs"]);
        let mut report = Vec::new();
        tokenize_bios_in_place(default_normalizer(), &mut table, &mut report).unwrap();

        assert_eq!(table.text_column(TOKENS_COLUMN).unwrap(), ["run dog"]);
        assert!(report.ends_with(b": 1\n"));
    }

    #[test]
    fn stdout_variant_runs() {
        let table = tokenize_bios(BioTable::from_bios(["Coffee lover"])).unwrap();
        assert_eq!(table.text_column(TOKENS_COLUMN).unwrap(), ["coffee lover"]);
    }
}
