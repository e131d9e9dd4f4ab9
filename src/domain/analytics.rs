// Chart aggregation routines
//
// Pure functions that group flat records by a key field and reduce to summary
// statistics for chart consumption. Grouping accumulates into a Vec keyed by
// first occurrence, so output order is the insertion order of first occurrence;
// the monthly forecast additionally sorts chronologically.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::budget::BudgetLine;
use super::material::{Material, Priority};
use super::vendor::Vendor;

const DEFAULT_COLOR: &str = "hsl(215.4 16.3% 46.9%)";

/// Chart color for a category. Unknown categories fall back silently.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "Electrical" => "hsl(221.2 83.2% 53.3%)",
        "Civil" => "hsl(262.1 83.3% 57.8%)",
        "Mechanical" => "hsl(142.1 76.2% 36.3%)",
        "Safety" => "hsl(47.9 95.8% 53.1%)",
        _ => DEFAULT_COLOR,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCost {
    pub category: String,
    pub cost: f64,
    pub count: usize,
    pub color: &'static str,
}

pub fn cost_by_category(materials: &[Material]) -> Vec<CategoryCost> {
    let mut buckets: Vec<CategoryCost> = Vec::new();
    for material in materials {
        match buckets.iter_mut().find(|b| b.category == material.category) {
            Some(bucket) => {
                bucket.cost += material.total_cost;
                bucket.count += 1;
            }
            None => buckets.push(CategoryCost {
                category: material.category.clone(),
                cost: material.total_cost,
                count: 1,
                color: category_color(&material.category),
            }),
        }
    }
    buckets
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityBucket {
    pub priority: Priority,
    pub count: usize,
    pub cost: f64,
    pub color: &'static str,
}

pub fn priority_distribution(materials: &[Material]) -> Vec<PriorityBucket> {
    let mut buckets: Vec<PriorityBucket> = Vec::new();
    for material in materials {
        match buckets.iter_mut().find(|b| b.priority == material.priority) {
            Some(bucket) => {
                bucket.count += 1;
                bucket.cost += material.total_cost;
            }
            None => buckets.push(PriorityBucket {
                priority: material.priority,
                count: 1,
                cost: material.total_cost,
                color: material.priority.color(),
            }),
        }
    }
    buckets
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    /// Display label, e.g. "Jan 2024"
    pub month: String,
    pub cost: f64,
    pub quantity: f64,
    #[serde(skip)]
    pub date: NaiveDate,
}

/// Group materials by delivery month, chronological order.
pub fn monthly_forecast(materials: &[Material]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    for material in materials {
        let month_start = material
            .delivery_date
            .with_day(1)
            .unwrap_or(material.delivery_date);
        match buckets.iter_mut().find(|b| b.date == month_start) {
            Some(bucket) => {
                bucket.cost += material.total_cost;
                bucket.quantity += material.quantity;
            }
            None => buckets.push(MonthBucket {
                month: material.delivery_date.format("%b %Y").to_string(),
                cost: material.total_cost,
                quantity: material.quantity,
                date: month_start,
            }),
        }
    }
    buckets.sort_by_key(|b| b.date);
    buckets
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub total_value: f64,
    pub color: &'static str,
}

pub fn vendor_categories(vendors: &[Vendor]) -> Vec<CategoryShare> {
    let mut buckets: Vec<CategoryShare> = Vec::new();
    for vendor in vendors {
        match buckets.iter_mut().find(|b| b.category == vendor.category) {
            Some(bucket) => {
                bucket.count += 1;
                bucket.total_value += vendor.total_value;
            }
            None => buckets.push(CategoryShare {
                category: vendor.category.clone(),
                count: 1,
                total_value: vendor.total_value,
                color: category_color(&vendor.category),
            }),
        }
    }
    buckets
}

/// Mean rating across vendors, 0.0 for an empty list
pub fn average_rating(vendors: &[Vendor]) -> f64 {
    if vendors.is_empty() {
        return 0.0;
    }
    vendors.iter().map(|v| v.rating).sum::<f64>() / vendors.len() as f64
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub allocated: f64,
    pub spent: f64,
    pub committed: f64,
    pub remaining: f64,
    pub utilization_percent: f64,
}

pub fn budget_totals(lines: &[BudgetLine]) -> BudgetTotals {
    let allocated: f64 = lines.iter().map(|l| l.allocated).sum();
    let spent: f64 = lines.iter().map(|l| l.spent).sum();
    let committed: f64 = lines.iter().map(|l| l.committed).sum();
    let remaining: f64 = lines.iter().map(|l| l.remaining).sum();
    let utilization_percent = if allocated == 0.0 {
        0.0
    } else {
        (spent + committed) / allocated * 100.0
    };
    BudgetTotals {
        allocated,
        spent,
        committed,
        remaining,
        utilization_percent,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub budget: f64,
    pub actual: f64,
    pub forecast: f64,
}

// Cumulative spend fractions per month of the project window
const TREND_FRACTIONS: [(&str, f64, f64); 6] = [
    ("Oct", 0.10, 0.12),
    ("Nov", 0.25, 0.28),
    ("Dec", 0.45, 0.48),
    ("Jan", 0.68, 0.72),
    ("Feb", 0.88, 0.92),
    ("Mar", 1.00, 1.05),
];

/// Monthly spending trend against an even budget split over six months.
pub fn monthly_spend_trend(totals: &BudgetTotals) -> Vec<TrendPoint> {
    let monthly_budget = totals.allocated / TREND_FRACTIONS.len() as f64;
    TREND_FRACTIONS
        .iter()
        .map(|&(month, actual, forecast)| TrendPoint {
            month,
            budget: monthly_budget,
            actual: totals.spent * actual,
            forecast: totals.spent * forecast,
        })
        .collect()
}
