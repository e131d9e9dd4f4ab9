// Budget line domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
    UnderBudget,
    AtRisk,
}

impl BudgetStatus {
    pub fn color(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "hsl(142 76% 36%)",
            BudgetStatus::OverBudget => "hsl(0 84.2% 60.2%)",
            BudgetStatus::UnderBudget => "hsl(221.2 83.2% 53.3%)",
            BudgetStatus::AtRisk => "hsl(47.9 95.8% 53.1%)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    pub committed: f64,
    pub remaining: f64,
    /// Percent deviation from plan, negative means under
    pub variance: f64,
    pub status: BudgetStatus,
}

impl BudgetLine {
    /// (spent + committed) / allocated, as a percentage
    pub fn utilization_percent(&self) -> f64 {
        if self.allocated == 0.0 {
            return 0.0;
        }
        (self.spent + self.committed) / self.allocated * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_percent() {
        let line = BudgetLine {
            category: "Electrical".to_string(),
            allocated: 1000.0,
            spent: 400.0,
            committed: 100.0,
            remaining: 500.0,
            variance: 0.0,
            status: BudgetStatus::OnTrack,
        };
        assert!((line.utilization_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_utilization_with_zero_allocation() {
        let line = BudgetLine {
            category: "Misc".to_string(),
            allocated: 0.0,
            spent: 0.0,
            committed: 0.0,
            remaining: 0.0,
            variance: 0.0,
            status: BudgetStatus::OnTrack,
        };
        assert_eq!(line.utilization_percent(), 0.0);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BudgetStatus::OnTrack).unwrap(),
            "\"on-track\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetStatus::AtRisk).unwrap(),
            "\"at-risk\""
        );
    }
}
