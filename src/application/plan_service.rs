// Procurement plan service - Category breakdown and budget tracking
use std::sync::Arc;

use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::analytics::{budget_totals, monthly_spend_trend, BudgetTotals, TrendPoint};
use crate::domain::budget::BudgetLine;
use crate::domain::plan::{PlanCategory, RiskLevel};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_value: f64,
    pub total_items: usize,
    pub category_count: usize,
    pub high_risk_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: PlanCategory,
    pub total_value: f64,
    pub item_count: usize,
}

/// Budget line plus its derived utilization and status color
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    #[serde(flatten)]
    pub line: BudgetLine,
    pub utilization_percent: f64,
    pub status_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSection {
    pub totals: BudgetTotals,
    pub lines: Vec<BudgetRow>,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub summary: PlanSummary,
    pub categories: Vec<CategoryRow>,
    pub budget: BudgetSection,
}

#[derive(Clone)]
pub struct PlanService {
    repository: Arc<dyn ProcurementRepository>,
}

impl PlanService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn plan(&self) -> anyhow::Result<PlanPayload> {
        let categories = self.repository.plan_categories().await?;
        let budget_lines = self.repository.budget_lines().await?;

        let summary = PlanSummary {
            total_value: categories.iter().map(|c| c.total_value()).sum(),
            total_items: categories.iter().map(|c| c.items.len()).sum(),
            category_count: categories.len(),
            high_risk_count: categories
                .iter()
                .filter(|c| c.risk_level == RiskLevel::High)
                .count(),
        };

        let rows = categories
            .into_iter()
            .map(|category| CategoryRow {
                total_value: category.total_value(),
                item_count: category.items.len(),
                category,
            })
            .collect();

        let totals = budget_totals(&budget_lines);
        let trend = monthly_spend_trend(&totals);
        let lines = budget_lines
            .into_iter()
            .map(|line| BudgetRow {
                utilization_percent: line.utilization_percent(),
                status_color: line.status.color(),
                line,
            })
            .collect();

        Ok(PlanPayload {
            summary,
            categories: rows,
            budget: BudgetSection {
                totals,
                lines,
                trend,
            },
        })
    }
}
