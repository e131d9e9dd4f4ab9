// Dashboard overview domain models
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Delta shown under the value, e.g. "+12%" or "-2"
    pub change: String,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, change: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTone {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub action: String,
    pub time: String,
    pub status: ActivityTone,
}

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneProgress {
    pub title: String,
    pub date: NaiveDate,
    /// 0-100
    pub progress: u8,
}
