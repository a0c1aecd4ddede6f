//! Kanban board projection.
//!
//! Requests are placed into the four canonical stage columns by exact label
//! match. A request whose stage is anything else is not placed in any
//! column; the board only counts it in `unplaced_count`.

use serde::Serialize;

use crate::stage::Stage;

/// One stage column.
#[derive(Debug, Serialize)]
pub struct KanbanColumn<T> {
    pub stage: &'static str,
    pub cards: Vec<T>,
}

/// The full board, columns in lifecycle order.
#[derive(Debug, Serialize)]
pub struct KanbanBoard<T> {
    pub columns: Vec<KanbanColumn<T>>,
    pub unplaced_count: usize,
}

impl<T> KanbanBoard<T> {
    /// Cards in the column for `stage`.
    pub fn column(&self, stage: Stage) -> &[T] {
        self.columns
            .iter()
            .find(|c| c.stage == stage.as_str())
            .map(|c| c.cards.as_slice())
            .unwrap_or_default()
    }

    /// Total number of cards across all columns.
    pub fn placed_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

/// Partition `items` into stage columns, preserving input order within
/// each column.
pub fn partition<T, F>(items: impl IntoIterator<Item = T>, stage_of: F) -> KanbanBoard<T>
where
    F: Fn(&T) -> &str,
{
    let mut columns: Vec<KanbanColumn<T>> = Stage::ALL
        .iter()
        .map(|s| KanbanColumn {
            stage: s.as_str(),
            cards: Vec::new(),
        })
        .collect();
    let mut unplaced_count = 0;

    for item in items {
        let slot = Stage::from_label(stage_of(&item))
            .and_then(|stage| Stage::ALL.iter().position(|s| *s == stage));
        match slot {
            Some(index) => columns[index].cards.push(item),
            None => unplaced_count += 1,
        }
    }

    KanbanBoard {
        columns,
        unplaced_count,
    }
}
