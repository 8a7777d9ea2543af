//! Whitespace-aligned text tables built from column descriptors.
use tabled::{
    builder::Builder,
    settings::{Padding, Style, object::Columns},
};

/// Gap between two columns.
const COLUMN_GAP: usize = 2;

/// A table column: header plus the function extracting a row's cell.
pub struct Column<'a, T> {
    header: &'static str,
    cell: Box<dyn Fn(&T) -> String + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: &'static str, cell: impl Fn(&T) -> String + 'a) -> Self {
        Self {
            header,
            cell: Box::new(cell),
        }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }
}

impl<T> std::fmt::Debug for Column<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Ordered set of columns, rendered uniformly for every row.
#[derive(Debug)]
pub struct Table<'a, T> {
    columns: Vec<Column<'a, T>>,
    nested: bool,
}

impl<'a, T> Table<'a, T> {
    pub fn new() -> Self {
        Self {
            columns: vec![],
            nested: false,
        }
    }

    /// Indent the whole table by one empty leading column, for tables printed below a header line.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn push(&mut self, column: Column<'a, T>) {
        self.columns.push(column);
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::header).collect()
    }

    /// Render header and rows. Every line ends with a newline and carries no trailing whitespace.
    pub fn render<'r, I>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = &'r T>,
        T: 'r,
    {
        let lead = self.nested.then(String::new);

        let mut builder = Builder::default();
        builder.push_record(
            lead.iter()
                .cloned()
                .chain(self.columns.iter().map(|c| c.header.to_uppercase())),
        );
        for row in rows {
            builder.push_record(
                lead.iter()
                    .cloned()
                    .chain(self.columns.iter().map(|c| (c.cell)(row))),
            );
        }

        let mut table = builder.build();
        table
            .with(Style::empty())
            .modify(Columns::new(..), Padding::new(0, COLUMN_GAP, 0, 0));

        let mut out = String::new();
        for line in table.to_string().lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl<T> Default for Table<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a list of broker IDs as `[1 2 3]`.
pub fn id_list(ids: &[i32]) -> String {
    let ids: Vec<_> = ids.iter().map(ToString::to_string).collect();
    format!("[{}]", ids.join(" "))
}
