//! Process-local sheet used for local development and tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{SheetClient, StoreError};

/// Holds one tab's cells in memory and understands the subset of A1 notation
/// the flight store uses (`Sheet1!A:E`, `Sheet1!A1:E1`). The sheet name in a
/// range is ignored.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
    failing: AtomicBool,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self {
            rows: Mutex::new(rows),
            failing: AtomicBool::new(false),
        }
    }

    /// Snapshot of every stored row.
    #[cfg(test)]
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.lock().clone()
    }

    /// While set, every operation fails with [`StoreError::Unavailable`].
    #[cfg(test)]
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory sheet is set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SheetClient for MemorySheet {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, StoreError> {
        self.check()?;
        let range = A1Range::parse(range)?;
        let rows = self.lock();

        let first = range.first_row.unwrap_or(0);
        let last = range.last_row.unwrap_or(usize::MAX);
        let mut values: Vec<Vec<String>> = rows
            .iter()
            .enumerate()
            .filter(|(index, _)| *index >= first && *index <= last)
            .map(|(_, row)| {
                let mut cells: Vec<String> = row
                    .iter()
                    .skip(range.first_col)
                    .take(range.last_col - range.first_col + 1)
                    .cloned()
                    .collect();
                trim_trailing(&mut cells, String::is_empty);
                cells
            })
            .collect();
        trim_trailing(&mut values, Vec::is_empty);
        Ok(values)
    }

    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError> {
        self.check()?;
        let range = A1Range::parse(range)?;
        let mut stored = self.lock();

        trim_trailing(&mut stored, |row| row.iter().all(String::is_empty));
        for row in rows {
            let mut padded = vec![String::new(); range.first_col];
            padded.extend(row);
            stored.push(padded);
        }
        Ok(())
    }

    async fn update_values(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), StoreError> {
        self.check()?;
        let range = A1Range::parse(range)?;
        let mut stored = self.lock();

        let top = range.first_row.unwrap_or(0);
        for (offset, row) in rows.into_iter().enumerate() {
            let target_row = top + offset;
            if stored.len() <= target_row {
                stored.resize(target_row + 1, Vec::new());
            }
            let target = &mut stored[target_row];
            for (col_offset, value) in row.into_iter().enumerate() {
                let col = range.first_col + col_offset;
                if target.len() <= col {
                    target.resize(col + 1, String::new());
                }
                target[col] = value;
            }
        }
        Ok(())
    }
}

fn trim_trailing<T>(items: &mut Vec<T>, empty: impl Fn(&T) -> bool) {
    while items.last().is_some_and(&empty) {
        items.pop();
    }
}

/// Zero-based bounds of an A1 range. Row bounds are absent for whole-column
/// ranges such as `A:E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct A1Range {
    first_col: usize,
    last_col: usize,
    first_row: Option<usize>,
    last_row: Option<usize>,
}

impl A1Range {
    fn parse(range: &str) -> Result<Self, StoreError> {
        let invalid = || StoreError::InvalidRange(range.to_string());
        let cells = range.rsplit_once('!').map_or(range, |(_, cells)| cells);
        let (start, end) = cells.split_once(':').unwrap_or((cells, cells));
        let (first_col, first_row) = parse_cell(start).ok_or_else(invalid)?;
        let (last_col, last_row) = parse_cell(end).ok_or_else(invalid)?;
        if last_col < first_col {
            return Err(invalid());
        }
        Ok(Self {
            first_col,
            last_col,
            first_row,
            last_row,
        })
    }
}

/// `"E1"` → `(4, Some(0))`, `"E"` → `(4, None)`.
fn parse_cell(cell: &str) -> Option<(usize, Option<usize>)> {
    let split = cell.find(|c: char| c.is_ascii_digit()).unwrap_or(cell.len());
    let (letters, digits) = cell.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let col = letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
        - 1;
    let row = if digits.is_empty() {
        None
    } else {
        let n: usize = digits.parse().ok()?;
        Some(n.checked_sub(1)?)
    };
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_column_and_cell_ranges() {
        assert_eq!(
            A1Range::parse("Sheet1!A:E").unwrap(),
            A1Range { first_col: 0, last_col: 4, first_row: None, last_row: None }
        );
        assert_eq!(
            A1Range::parse("Sheet1!A1:E1").unwrap(),
            A1Range { first_col: 0, last_col: 4, first_row: Some(0), last_row: Some(0) }
        );
        assert_eq!(parse_cell("AA10"), Some((26, Some(9))));
        assert!(A1Range::parse("Sheet1!1:2").is_err());
        assert!(A1Range::parse("Sheet1!E:A").is_err());
    }

    #[actix_web::test]
    async fn get_trims_trailing_cells_and_rows() {
        let sheet = MemorySheet::with_rows(vec![
            vec!["a", "b", ""],
            vec!["c", "", "", "", "", "overflow"],
            vec![],
        ]);
        let values = sheet.get_values("Sheet1!A:E").await.unwrap();
        assert_eq!(values, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[actix_web::test]
    async fn update_writes_at_range_origin() {
        let sheet = MemorySheet::new();
        sheet
            .update_values("Sheet1!A1:B1", vec![vec!["x".into(), "y".into()]])
            .await
            .unwrap();
        assert_eq!(sheet.get_values("Sheet1!A1:E1").await.unwrap(), vec![vec!["x", "y"]]);
    }

    #[actix_web::test]
    async fn append_goes_after_last_non_empty_row() {
        let sheet = MemorySheet::with_rows(vec![vec!["h"], vec![""]]);
        sheet
            .append_values("Sheet1!A:E", vec![vec!["r".into()]])
            .await
            .unwrap();
        assert_eq!(sheet.rows(), vec![vec!["h"], vec!["r"]]);
    }
}
