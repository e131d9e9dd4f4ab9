// Procurement plan domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub item: String,
    pub vendor: String,
    pub quantity: String,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub lead_time_days: u32,
    pub risk_mitigation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCategory {
    pub id: String,
    pub name: String,
    pub risk_level: RiskLevel,
    /// Display window, e.g. "14-21 days"
    pub lead_time: String,
    pub items: Vec<PlanItem>,
}

impl PlanCategory {
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| i.total_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value_sums_items() {
        let category = PlanCategory {
            id: "civil".to_string(),
            name: "Civil & Construction".to_string(),
            risk_level: RiskLevel::Low,
            lead_time: "3-7 days".to_string(),
            items: vec![
                PlanItem {
                    item: "Cement".to_string(),
                    vendor: "BuildMax Co.".to_string(),
                    quantity: "1250 bags".to_string(),
                    unit_cost: 450.0,
                    total_cost: 562_500.0,
                    lead_time_days: 3,
                    risk_mitigation: String::new(),
                },
                PlanItem {
                    item: "Steel".to_string(),
                    vendor: "MetalCorp Ltd".to_string(),
                    quantity: "8500 kg".to_string(),
                    unit_cost: 65.0,
                    total_cost: 552_500.0,
                    lead_time_days: 5,
                    risk_mitigation: String::new(),
                },
            ],
        };
        assert_eq!(category.total_value(), 1_115_000.0);
    }
}
