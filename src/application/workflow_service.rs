// Workflow tracker service - Approval pipeline and open requests
use std::sync::Arc;

use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::workflow::{ProcurementRequest, WorkflowStep};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub open_requests: usize,
    pub pending_value: f64,
    pub average_days_open: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayload {
    pub steps: Vec<WorkflowStep>,
    pub requests: Vec<ProcurementRequest>,
    pub summary: WorkflowSummary,
}

#[derive(Clone)]
pub struct WorkflowService {
    repository: Arc<dyn ProcurementRepository>,
}

impl WorkflowService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn workflow(&self) -> anyhow::Result<WorkflowPayload> {
        let steps = self.repository.workflow_steps().await?;
        let requests = self.repository.requests().await?;

        let average_days_open = if requests.is_empty() {
            0.0
        } else {
            requests.iter().map(|r| r.days_open as f64).sum::<f64>() / requests.len() as f64
        };

        let summary = WorkflowSummary {
            open_requests: requests.len(),
            pending_value: requests.iter().map(|r| r.value).sum(),
            average_days_open,
        };

        Ok(WorkflowPayload {
            steps,
            requests,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::StepState;
    use crate::infrastructure::seed_catalog::SeedCatalog;

    #[tokio::test]
    async fn test_workflow_has_six_steps_one_current() {
        let service = WorkflowService::new(Arc::new(SeedCatalog::new()));
        let payload = service.workflow().await.unwrap();

        assert_eq!(payload.steps.len(), 6);
        let current = payload
            .steps
            .iter()
            .filter(|s| s.state == StepState::Current)
            .count();
        assert_eq!(current, 1);
    }

    #[tokio::test]
    async fn test_workflow_summary() {
        let service = WorkflowService::new(Arc::new(SeedCatalog::new()));
        let payload = service.workflow().await.unwrap();

        assert_eq!(payload.summary.open_requests, payload.requests.len());
        let total: f64 = payload.requests.iter().map(|r| r.value).sum();
        assert!((payload.summary.pending_value - total).abs() < 1e-9);
        assert!(payload.summary.average_days_open > 0.0);
    }
}
