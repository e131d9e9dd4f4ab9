// Procurement workflow domain models
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::material::Priority;

/// The fixed approval pipeline every request moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStage {
    RequestSubmitted,
    ManagerApproval,
    FinanceApproval,
    VendorSelection,
    PurchaseOrder,
    Delivery,
}

impl WorkflowStage {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStage::RequestSubmitted => "Request Submitted",
            WorkflowStage::ManagerApproval => "Manager Approval",
            WorkflowStage::FinanceApproval => "Finance Approval",
            WorkflowStage::VendorSelection => "Vendor Selection",
            WorkflowStage::PurchaseOrder => "Purchase Order",
            WorkflowStage::Delivery => "Delivery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub stage: WorkflowStage,
    pub name: &'static str,
    pub state: StepState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl WorkflowStep {
    pub fn new(stage: WorkflowStage, state: StepState, date: Option<NaiveDate>) -> Self {
        Self {
            stage,
            name: stage.label(),
            state,
            date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequest {
    pub id: String,
    pub material: String,
    pub requestor: String,
    pub value: f64,
    pub stage: WorkflowStage,
    pub priority: Priority,
    pub days_open: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        assert_eq!(WorkflowStage::FinanceApproval.label(), "Finance Approval");
        assert_eq!(WorkflowStage::Delivery.label(), "Delivery");
    }

    #[test]
    fn test_stage_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&WorkflowStage::PurchaseOrder).unwrap(),
            "\"purchase-order\""
        );
    }
}
