//! Column-oriented table of observed variables, the estimator's input.

/// Named numeric columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservedTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ObservedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Returns `false` (and leaves the table untouched) when
    /// the name is already taken or the length disagrees with existing columns.
    pub fn push_column(&mut self, name: &str, values: Vec<f64>) -> bool {
        if self.index_of(name).is_some() {
            return false;
        }
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return false;
            }
        }
        self.names.push(name.to_string());
        self.columns.push(values);
        true
    }

    /// Builder-style variant of [`push_column`](Self::push_column) for tests and fixtures.
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> Self {
        self.push_column(name, values);
        self
    }

    /// Number of observations (rows).
    pub fn n_obs(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn n_vars(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index_of(name).map(|i| self.columns[i].as_slice())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_and_duplicate_columns() {
        let mut table = ObservedTable::new();
        assert!(table.push_column("a", vec![1.0, 2.0]));
        assert!(!table.push_column("b", vec![1.0]));
        assert!(!table.push_column("a", vec![3.0, 4.0]));
        assert_eq!(table.n_vars(), 1);
        assert_eq!(table.n_obs(), 2);
        assert_eq!(table.column("a"), Some(&[1.0, 2.0][..]));
        assert!(table.column("b").is_none());
    }

    #[test]
    fn empty_table_has_no_rows() {
        assert_eq!(ObservedTable::new().n_obs(), 0);
    }
}
