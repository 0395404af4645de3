//! Tab-separated record model shared by the normalization passes.

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    cells: Vec<String>,
}

impl Record {
    pub fn from_line(line: &str) -> Self {
        Record {
            cells: line.split('\t').map(str::to_string).collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// A cell is blank when its trimmed content is empty. Out-of-range
    /// indices count as blank so ragged rows never panic.
    pub fn is_blank(&self, index: usize) -> bool {
        self.cell(index).map(|c| c.trim().is_empty()).unwrap_or(true)
    }

    pub fn set_cell(&mut self, index: usize, value: String) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }

    pub fn map_cell<F>(&mut self, index: usize, f: F)
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = f(cell);
        }
    }

    pub fn to_line(&self) -> String {
        self.cells.join("\t")
    }
}
