use crate::reading::Reading;

/// One grid row: a reading's value and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub value:     f64,
    pub timestamp: String,
}

impl From<&Reading> for TableRow {
    fn from(r: &Reading) -> Self {
        Self {
            value:     r.value(),
            timestamp: r.timestamp().to_string(),
        }
    }
}

/// Read-only tabular projection of the rolling buffer, oldest row first.
///
/// Rebuilt from scratch on every tick; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Last `k` rows in original order.  See [`tail`].
    #[must_use]
    pub fn tail(&self, k: usize) -> Table {
        tail(self, k)
    }
}

/// Map each reading of a buffer snapshot to a row, preserving order.
pub fn build_table<'a>(readings: impl IntoIterator<Item = &'a Reading>) -> Table {
    Table {
        rows: readings.into_iter().map(TableRow::from).collect(),
    }
}

/// Last `k` rows of `table` in original order, or every row when the table
/// is shorter than `k`.
pub fn tail(table: &Table, k: usize) -> Table {
    let start = table.rows.len().saturating_sub(k);
    Table {
        rows: table.rows[start..].to_vec(),
    }
}
