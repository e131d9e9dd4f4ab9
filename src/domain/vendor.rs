// Vendor domain model
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub category: String,
    pub location: String,
    pub rating: f64,
    pub experience: String,
    pub certifications: Vec<String>,
    pub services: Vec<String>,
    pub contact: Contact,
    pub projects: u32,
    pub response_time: String,
    pub total_value: f64,
    pub performance: Performance,
    pub orders: Vec<MonthlyOrders>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// Four 0-100 scores shown on the vendor performance radar
#[derive(Debug, Clone, Serialize)]
pub struct Performance {
    pub quality: u8,
    pub delivery: u8,
    pub cost: u8,
    pub service: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOrders {
    pub month: String,
    pub value: f64,
    pub orders: u32,
}

impl Vendor {
    /// Avatar initials, e.g. "TechCorp Industries" -> "TI"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// First word of the vendor name, used as a short chart label
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str) -> Vendor {
        Vendor {
            id: "1".to_string(),
            name: name.to_string(),
            specialization: String::new(),
            category: "Electrical".to_string(),
            location: String::new(),
            rating: 4.8,
            experience: String::new(),
            certifications: vec![],
            services: vec![],
            contact: Contact {
                phone: String::new(),
                email: String::new(),
            },
            projects: 0,
            response_time: String::new(),
            total_value: 0.0,
            performance: Performance {
                quality: 0,
                delivery: 0,
                cost: 0,
                service: 0,
            },
            orders: vec![],
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(vendor("TechCorp Industries").initials(), "TI");
        assert_eq!(vendor("BuildMax Co.").initials(), "BC");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(vendor("ElectroPro Systems").short_name(), "ElectroPro");
    }
}
