/// Row-selection bookkeeping for checkbox tables.
///
/// Keeps the selected row keys and the header "all selected" flag in one
/// place, so every list page shares the same rules for keeping them in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<String>,
    all_checked: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preselected rows, e.g. restored from a saved view
    pub fn with_selected(keys: Vec<String>, total_rows: usize) -> Self {
        let all_checked = !keys.is_empty() && keys.len() == total_rows;
        Self {
            selected: keys,
            all_checked,
        }
    }

    /// Header checkbox: select every row or clear the selection
    pub fn set_all(&mut self, checked: bool, all_keys: &[String]) {
        self.all_checked = checked;
        self.selected = if checked { all_keys.to_vec() } else { Vec::new() };
    }

    /// Row checkbox; re-derives the header flag from the new selection
    pub fn toggle_row(&mut self, key: &str, checked: bool, total_rows: usize) {
        if checked {
            if !self.is_selected(key) {
                self.selected.push(key.to_string());
            }
        } else if let Some(pos) = self.selected.iter().position(|k| k == key) {
            self.selected.remove(pos);
        }
        self.all_checked = total_rows > 0 && self.selected.len() == total_rows;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|k| k == key)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn all_checked(&self) -> bool {
        self.all_checked
    }
}
