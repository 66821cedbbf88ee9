use chrono::NaiveDate;

/// Search-bar state shared by the list pages: keyword, status filter and an
/// optional date range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub status: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl SearchParams {
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_string();
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    /// An inverted range is normalized rather than rejected
    pub fn set_date_range(&mut self, range: Option<(NaiveDate, NaiveDate)>) {
        self.date_range = range.map(|(from, to)| if from <= to { (from, to) } else { (to, from) });
    }

    /// Reset button: back to the blank form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
