//! Repair estimate line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, CostLineId, Money};

/// Estimate line category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Labor,
    Parts,
    Paint,
    Supplies,
    Custom,
}

/// One line item of a repair estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLine {
    pub id: CostLineId,
    pub claim_id: ClaimId,
    pub category: CostCategory,
    pub description: String,
    pub amount: Money,
    /// Hours worked, for labor-style lines
    pub hours: Option<Decimal>,
    /// Hourly rate, for labor-style lines
    pub rate: Option<Money>,
}

/// Insert data for a cost line
#[derive(Debug, Clone)]
pub struct NewCostLine {
    pub claim_id: ClaimId,
    pub category: CostCategory,
    pub description: String,
    pub amount: Money,
    pub hours: Option<Decimal>,
    pub rate: Option<Money>,
}

impl CostLine {
    /// Materializes an insert with a fresh identifier
    pub fn new(insert: NewCostLine) -> Self {
        Self {
            id: CostLineId::new_v7(),
            claim_id: insert.claim_id,
            category: insert.category,
            description: insert.description,
            amount: insert.amount,
            hours: insert.hours,
            rate: insert.rate,
        }
    }

    /// Checks the amount against hours x rate when both are present
    ///
    /// Lines without both components are vacuously consistent.
    pub fn is_consistent(&self) -> bool {
        match (self.hours, self.rate) {
            (Some(hours), Some(rate)) => {
                Money::from_hours(hours, rate).map(|expected| expected == self.amount).unwrap_or(false)
            }
            _ => true,
        }
    }
}
