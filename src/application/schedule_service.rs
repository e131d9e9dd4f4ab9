// Project schedule service - Gantt timeline and milestone tracking
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::schedule::{schedule_window, Milestone, ScheduleTask, ScheduleWindow, TaskStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub total_days: i64,
    pub days_remaining: i64,
    pub completed_tasks: usize,
    pub at_risk_tasks: usize,
}

/// Gantt task plus the bar color derived from its status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: ScheduleTask,
    pub status_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub stats: ScheduleStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ScheduleWindow>,
    pub tasks: Vec<TaskRow>,
    pub milestones: Vec<Milestone>,
}

#[derive(Clone)]
pub struct ScheduleService {
    repository: Arc<dyn ProcurementRepository>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn schedule(&self) -> anyhow::Result<SchedulePayload> {
        let tasks = self.repository.schedule_tasks().await?;
        let milestones = self.repository.milestones().await?;
        let window = schedule_window(&tasks);

        let today = Utc::now().date_naive();
        let days_remaining = window
            .map(|w| (w.end - today).num_days().max(0))
            .unwrap_or(0);

        let stats = ScheduleStats {
            total_days: window.map(|w| w.total_days).unwrap_or(0),
            days_remaining,
            completed_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            at_risk_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Delayed)
                .count(),
        };

        let rows = tasks
            .into_iter()
            .map(|task| TaskRow {
                status_color: task.status.color(),
                task,
            })
            .collect();

        Ok(SchedulePayload {
            stats,
            window,
            tasks: rows,
            milestones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed_catalog::SeedCatalog;

    #[tokio::test]
    async fn test_schedule_window_spans_all_tasks() {
        let service = ScheduleService::new(Arc::new(SeedCatalog::new()));
        let payload = service.schedule().await.unwrap();

        let window = payload.window.unwrap();
        for row in &payload.tasks {
            assert!(window.start <= row.task.start_date);
            assert!(window.end >= row.task.end_date);
        }
        assert_eq!(payload.stats.total_days, window.total_days);
        assert!(payload.stats.days_remaining >= 0);
    }

    #[tokio::test]
    async fn test_schedule_counts_match_task_statuses() {
        let service = ScheduleService::new(Arc::new(SeedCatalog::new()));
        let payload = service.schedule().await.unwrap();

        let completed = payload
            .tasks
            .iter()
            .filter(|r| r.task.status == TaskStatus::Completed)
            .count();
        assert_eq!(payload.stats.completed_tasks, completed);
        assert!(!payload.milestones.is_empty());
    }

    #[tokio::test]
    async fn test_task_rows_colored_by_status() {
        let service = ScheduleService::new(Arc::new(SeedCatalog::new()));
        let payload = service.schedule().await.unwrap();

        for row in &payload.tasks {
            assert_eq!(row.status_color, row.task.status.color());
        }
        let delayed = payload
            .tasks
            .iter()
            .find(|r| r.task.status == TaskStatus::Delayed)
            .unwrap();
        assert_eq!(delayed.status_color, TaskStatus::Delayed.color());
    }
}
