use std::fmt;

use super::MatrixGraph;

/// Displays the adjacency matrix of a [`MatrixGraph`] as a table.
///
/// Absent cells are shown as `0` and edges without a payload as `None`.
/// Other cells show the payload's `Debug` rendering.
pub struct MatrixView<'a, V, E> {
    graph: &'a MatrixGraph<V, E>,
}

impl<'a, V, E> MatrixView<'a, V, E> {
    pub(super) fn new(graph: &'a MatrixGraph<V, E>) -> Self {
        MatrixView { graph }
    }
}

impl<V, E> fmt::Display for MatrixView<'_, V, E>
where
    V: fmt::Display,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.graph.nodes.len();
        let labels: Vec<String> = self
            .graph
            .nodes
            .iter()
            .map(|slot| slot.label.to_string())
            .collect();
        let cells: Vec<Vec<String>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| match self.graph.matrix.get(row, col) {
                        None => "0".to_string(),
                        Some(cell) => match &cell.payload {
                            None => "None".to_string(),
                            Some(payload) => format!("{payload:?}"),
                        },
                    })
                    .collect()
            })
            .collect();
        let width = labels
            .iter()
            .chain(cells.iter().flatten())
            .map(String::len)
            .max()
            .unwrap_or(0);

        write!(f, "{:width$}", "")?;
        for label in &labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;
        for (label, row) in labels.iter().zip(&cells) {
            write!(f, "{label:width$}")?;
            for cell in row {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lists every edge as `(source) --> (target)\tw(source,target) = payload`,
/// one per line, in row-major matrix order.
impl<V, E> fmt::Display for MatrixGraph<V, E>
where
    V: fmt::Display,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, _, cell) in self.matrix.iter() {
            write!(
                f,
                "({}) --> ({})\tw({},{}) = ",
                cell.source, cell.target, cell.source, cell.target
            )?;
            match &cell.payload {
                Some(payload) => writeln!(f, "{payload:?}")?,
                None => writeln!(f, "None")?,
            }
        }
        Ok(())
    }
}
