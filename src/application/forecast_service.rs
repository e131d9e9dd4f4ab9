// Material forecasting service - Builds the materials page payload
use std::sync::Arc;

use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::analytics::{
    cost_by_category, monthly_forecast, priority_distribution, CategoryCost, MonthBucket,
    PriorityBucket,
};
use crate::domain::material::Material;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInsights {
    pub total_items: usize,
    pub total_cost: f64,
    pub category_count: usize,
    pub urgent_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialForecast {
    pub insights: ForecastInsights,
    pub cost_by_category: Vec<CategoryCost>,
    pub priority_distribution: Vec<PriorityBucket>,
    pub monthly_forecast: Vec<MonthBucket>,
    pub materials: Vec<Material>,
}

#[derive(Clone)]
pub struct ForecastService {
    repository: Arc<dyn ProcurementRepository>,
}

impl ForecastService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn material_forecast(&self) -> anyhow::Result<MaterialForecast> {
        let materials = self.repository.materials().await?;

        let cost_by_category = cost_by_category(&materials);
        let insights = ForecastInsights {
            total_items: materials.len(),
            total_cost: materials.iter().map(|m| m.total_cost).sum(),
            category_count: cost_by_category.len(),
            urgent_count: materials.iter().filter(|m| m.priority.is_urgent()).count(),
        };

        Ok(MaterialForecast {
            insights,
            cost_by_category,
            priority_distribution: priority_distribution(&materials),
            monthly_forecast: monthly_forecast(&materials),
            materials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed_catalog::SeedCatalog;

    #[tokio::test]
    async fn test_forecast_conserves_costs() {
        let service = ForecastService::new(Arc::new(SeedCatalog::new()));
        let forecast = service.material_forecast().await.unwrap();

        let table_total: f64 = forecast.materials.iter().map(|m| m.total_cost).sum();
        let chart_total: f64 = forecast.cost_by_category.iter().map(|b| b.cost).sum();
        assert!((table_total - chart_total).abs() < 1e-9);
        assert!((forecast.insights.total_cost - table_total).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_forecast_insights() {
        let service = ForecastService::new(Arc::new(SeedCatalog::new()));
        let forecast = service.material_forecast().await.unwrap();

        assert_eq!(forecast.insights.total_items, forecast.materials.len());
        assert_eq!(
            forecast.insights.category_count,
            forecast.cost_by_category.len()
        );
        // Seed data carries two critical and two high priority materials
        assert_eq!(forecast.insights.urgent_count, 4);
    }
}
