// Repository trait for procurement data access
use async_trait::async_trait;

use crate::domain::budget::BudgetLine;
use crate::domain::material::Material;
use crate::domain::plan::PlanCategory;
use crate::domain::schedule::{Milestone, ScheduleTask};
use crate::domain::vendor::Vendor;
use crate::domain::workflow::{ProcurementRequest, WorkflowStep};

#[async_trait]
pub trait ProcurementRepository: Send + Sync {
    /// Forecasted material requirements
    async fn materials(&self) -> anyhow::Result<Vec<Material>>;

    /// All registered vendors
    async fn vendors(&self) -> anyhow::Result<Vec<Vendor>>;

    /// A single vendor by id, None if unknown
    async fn vendor(&self, id: &str) -> anyhow::Result<Option<Vendor>>;

    /// Per-category budget lines
    async fn budget_lines(&self) -> anyhow::Result<Vec<BudgetLine>>;

    /// Gantt tasks for the project schedule
    async fn schedule_tasks(&self) -> anyhow::Result<Vec<ScheduleTask>>;

    /// Key delivery checkpoints
    async fn milestones(&self) -> anyhow::Result<Vec<Milestone>>;

    /// Approval pipeline state
    async fn workflow_steps(&self) -> anyhow::Result<Vec<WorkflowStep>>;

    /// Open procurement requests
    async fn requests(&self) -> anyhow::Result<Vec<ProcurementRequest>>;

    /// Procurement plan categories with line items
    async fn plan_categories(&self) -> anyhow::Result<Vec<PlanCategory>>;
}
