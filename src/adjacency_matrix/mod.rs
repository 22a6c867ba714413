use std::iter;


/// A dense square matrix of optional entries, indexed by `(row, col)`.
///
/// The matrix always has as many rows as columns.  It grows one row and
/// one column at a time, and shrinks by removing a row together with the
/// column of the same index, which shifts every later row and column down
/// by one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix<T> {
    rows: Vec<Vec<Option<T>>>,
}

impl<T> Default for AdjacencyMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AdjacencyMatrix<T> {
    /// Creates a new, empty adjacency matrix.
    pub fn new() -> Self {
        AdjacencyMatrix { rows: Vec::new() }
    }

    /// Creates an empty matrix with room for `size` rows.
    pub fn with_capacity(size: usize) -> Self {
        AdjacencyMatrix {
            rows: Vec::with_capacity(size),
        }
    }

    /// Returns the number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Adds an empty last row and an empty last column.  Returns the index
    /// of the new row.
    pub fn grow(&mut self) -> usize {
        let index = self.rows.len();
        for row in &mut self.rows {
            row.push(None);
        }
        self.rows.push(iter::repeat_with(|| None).take(index + 1).collect());
        index
    }

    /// Removes row `index` and column `index`, returning the number of entries
    /// dropped with them.  Does nothing if `index` is out of range.
    pub fn remove_row_and_column(&mut self, index: usize) -> usize {
        if index >= self.rows.len() {
            return 0;
        }
        let mut dropped = self.rows.remove(index).into_iter().flatten().count();
        for row in &mut self.rows {
            if row.remove(index).is_some() {
                dropped += 1;
            }
        }
        dropped
    }

    /// Gets a reference to the entry at `row` and `col`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Stores `value` at `row` and `col`, returning the previous entry.
    ///
    /// Panics if either index is out of range.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        let size = self.size();
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => slot.replace(value),
            None => panic!("matrix index ({row}, {col}) out of range for size {size}"),
        }
    }

    /// Removes the entry at `row` and `col`, returning it if it existed.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        self.rows.get_mut(row)?.get_mut(col)?.take()
    }

    /// Iterates over the entries in the given row as `(col, value)` pairs.
    pub fn entries_in_row(&self, row: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().enumerate())
            .filter_map(|(col, entry)| entry.as_ref().map(|value| (col, value)))
    }

    /// Iterates over the entries in the given column as `(row, value)` pairs.
    pub fn entries_in_col(&self, col: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(move |(row, r)| r.get(col)?.as_ref().map(|value| (row, value)))
    }

    /// Iterates over all entries in row-major order as `(row, col, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, r)| {
            r.iter()
                .enumerate()
                .filter_map(move |(col, entry)| entry.as_ref().map(|value| (row, col, value)))
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.rows.iter().flatten().filter(|entry| entry.is_some()).count()
    }

    /// Returns `true` if the matrix holds no entries.  A matrix can be empty
    /// and still have a nonzero size.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Removes all rows and columns.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub(crate) fn is_square(&self) -> bool {
        let size = self.size();
        self.rows.iter().all(|row| row.len() == size)
    }
}
