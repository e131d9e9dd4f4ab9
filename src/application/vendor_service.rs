// Vendor directory service - Listing, analytics and single-vendor lookup
use std::sync::Arc;

use serde::Serialize;

use crate::application::procurement_repository::ProcurementRepository;
use crate::domain::analytics::{average_rating, vendor_categories, CategoryShare};
use crate::domain::vendor::Vendor;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub total_vendors: usize,
    pub average_rating: f64,
    pub total_projects: u32,
    pub total_value: f64,
}

/// One row of the performance comparison chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub name: String,
    pub full_name: String,
    pub quality: u8,
    pub delivery: u8,
    pub cost: u8,
    pub service: u8,
    pub rating: f64,
    pub projects: u32,
}

/// Vendor record plus the avatar initials shown on its card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCard {
    #[serde(flatten)]
    pub vendor: Vendor,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDirectory {
    pub summary: VendorSummary,
    pub categories: Vec<CategoryShare>,
    pub performance: Vec<PerformanceRow>,
    pub vendors: Vec<VendorCard>,
}

#[derive(Clone)]
pub struct VendorService {
    repository: Arc<dyn ProcurementRepository>,
}

impl VendorService {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn directory(&self) -> anyhow::Result<VendorDirectory> {
        let vendors = self.repository.vendors().await?;

        let summary = VendorSummary {
            total_vendors: vendors.len(),
            average_rating: average_rating(&vendors),
            total_projects: vendors.iter().map(|v| v.projects).sum(),
            total_value: vendors.iter().map(|v| v.total_value).sum(),
        };

        let performance = vendors
            .iter()
            .map(|v| PerformanceRow {
                name: v.short_name().to_string(),
                full_name: v.name.clone(),
                quality: v.performance.quality,
                delivery: v.performance.delivery,
                cost: v.performance.cost,
                service: v.performance.service,
                rating: v.rating,
                projects: v.projects,
            })
            .collect();

        let categories = vendor_categories(&vendors);
        let cards = vendors
            .into_iter()
            .map(|vendor| VendorCard {
                initials: vendor.initials(),
                vendor,
            })
            .collect();

        Ok(VendorDirectory {
            summary,
            categories,
            performance,
            vendors: cards,
        })
    }

    pub async fn profile(&self, id: &str) -> anyhow::Result<Option<Vendor>> {
        self.repository.vendor(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed_catalog::SeedCatalog;

    #[tokio::test]
    async fn test_directory_summary() {
        let service = VendorService::new(Arc::new(SeedCatalog::new()));
        let directory = service.directory().await.unwrap();

        assert_eq!(directory.summary.total_vendors, directory.vendors.len());
        assert_eq!(directory.performance.len(), directory.vendors.len());
        assert!(directory.summary.average_rating > 4.0);
        assert!(directory.summary.average_rating <= 5.0);

        let grouped_value: f64 = directory.categories.iter().map(|c| c.total_value).sum();
        assert!((grouped_value - directory.summary.total_value).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_cards_carry_avatar_initials() {
        let service = VendorService::new(Arc::new(SeedCatalog::new()));
        let directory = service.directory().await.unwrap();

        let techcorp = directory
            .vendors
            .iter()
            .find(|c| c.vendor.id == "1")
            .unwrap();
        assert_eq!(techcorp.initials, "TI");
        for card in &directory.vendors {
            assert_eq!(card.initials, card.vendor.initials());
        }
    }

    #[tokio::test]
    async fn test_profile_lookup() {
        let service = VendorService::new(Arc::new(SeedCatalog::new()));
        let vendor = service.profile("3").await.unwrap();
        assert_eq!(vendor.unwrap().name, "ElectroPro Systems");

        assert!(service.profile("999").await.unwrap().is_none());
    }
}
