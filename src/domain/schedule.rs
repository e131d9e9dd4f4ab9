// Project schedule domain models
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::material::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
}

impl TaskStatus {
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "hsl(142 76% 36%)",
            TaskStatus::InProgress => "hsl(221.2 83.2% 53.3%)",
            TaskStatus::Delayed => "hsl(0 84.2% 60.2%)",
            TaskStatus::NotStarted => "hsl(215.4 16.3% 46.9%)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0-100
    pub progress: u8,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Upcoming,
    Scheduled,
}

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub name: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

/// Padded Gantt timeline span derived from the task list
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
}

/// Earliest start minus a week to latest end plus a week.
/// Returns None for an empty task list.
pub fn schedule_window(tasks: &[ScheduleTask]) -> Option<ScheduleWindow> {
    let earliest = tasks.iter().map(|t| t.start_date).min()?;
    let latest = tasks.iter().map(|t| t.end_date).max()?;

    let start = earliest - chrono::Duration::days(7);
    let end = latest + chrono::Duration::days(7);

    Some(ScheduleWindow {
        start,
        end,
        total_days: (end - start).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> ScheduleTask {
        ScheduleTask {
            id: id.to_string(),
            name: id.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            progress: 0,
            status: TaskStatus::NotStarted,
            dependencies: vec![],
            assignee: None,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_window_pads_one_week_each_side() {
        let tasks = vec![
            task("a", (2024, 1, 15), (2024, 2, 15)),
            task("b", (2024, 2, 1), (2024, 3, 30)),
        ];
        let window = schedule_window(&tasks).unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 4, 6).unwrap());
        assert_eq!(window.total_days, 89);
    }

    #[test]
    fn test_window_empty_tasks() {
        assert!(schedule_window(&[]).is_none());
    }
}
