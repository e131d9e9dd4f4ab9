// Dashboard overview service - Stat cards, recent activity, milestone progress
use std::sync::Arc;

use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::analytics::budget_totals;
use crate::domain::overview::{Activity, ActivityTone, MilestoneProgress, StatCard};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPayload {
    pub stats: Vec<StatCard>,
    pub activities: Vec<Activity>,
    pub milestones: Vec<MilestoneProgress>,
}

#[derive(Clone)]
pub struct OverviewService {
    repository: Arc<dyn ProcurementRepository>,
}

impl OverviewService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn overview(&self) -> anyhow::Result<OverviewPayload> {
        let materials = self.repository.materials().await?;
        let vendors = self.repository.vendors().await?;
        let requests = self.repository.requests().await?;
        let budget = budget_totals(&self.repository.budget_lines().await?);

        let stats = vec![
            StatCard::new("Predicted Materials", materials.len().to_string(), "+12%"),
            StatCard::new("Active Vendors", vendors.len().to_string(), "+3"),
            StatCard::new("Pending Approvals", requests.len().to_string(), "-2"),
            StatCard::new(
                "Total Budget",
                format_millions(budget.allocated),
                "+5.2%",
            ),
        ];

        let activities = vec![
            Activity {
                action: "Material forecast updated".to_string(),
                time: "2 min ago".to_string(),
                status: ActivityTone::Success,
            },
            Activity {
                action: "Vendor approval pending".to_string(),
                time: "15 min ago".to_string(),
                status: ActivityTone::Warning,
            },
            Activity {
                action: "Delivery scheduled".to_string(),
                time: "1 hour ago".to_string(),
                status: ActivityTone::Info,
            },
            Activity {
                action: "Budget approved".to_string(),
                time: "2 hours ago".to_string(),
                status: ActivityTone::Success,
            },
        ];

        // In-progress tasks double as the upcoming milestone cards
        let milestones = self
            .repository
            .schedule_tasks()
            .await?
            .into_iter()
            .filter(|t| t.progress < 100)
            .take(3)
            .map(|t| MilestoneProgress {
                title: t.name,
                date: t.end_date,
                progress: t.progress,
            })
            .collect();

        Ok(OverviewPayload {
            stats,
            activities,
            milestones,
        })
    }
}

/// Headline budget notation, e.g. 2800000 -> "₹2.8M"
fn format_millions(value: f64) -> String {
    format!("₹{:.1}M", value / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed_catalog::SeedCatalog;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(2_800_000.0), "₹2.8M");
        assert_eq!(format_millions(562_500.0), "₹0.6M");
    }

    #[tokio::test]
    async fn test_overview_stats_reflect_catalog() {
        let service = OverviewService::new(Arc::new(SeedCatalog::new()));
        let overview = service.overview().await.unwrap();

        assert_eq!(overview.stats.len(), 4);
        assert_eq!(overview.stats[0].value, "5");
        assert_eq!(overview.stats[1].value, "6");
        assert_eq!(overview.stats[3].value, "₹2.8M");
        assert_eq!(overview.milestones.len(), 3);
        for milestone in &overview.milestones {
            assert!(milestone.progress < 100);
        }
    }
}
