//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money};
use domain_claims::{
    ConfidenceTier, CostCategory, NewClaim, NewCostLine, Priority,
};

/// Builder for claim intake data
pub struct ClaimIntakeBuilder {
    claim_number: String,
    policyholder_name: String,
    vehicle_info: String,
    vin: String,
    incident_date: NaiveDate,
    incident_description: String,
    priority: Priority,
    ai_confidence: Option<ConfidenceTier>,
    total_estimate: Option<Money>,
    assigned_agent: Option<String>,
}

impl Default for ClaimIntakeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimIntakeBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_number: crate::fixtures::claim_number(1),
            policyholder_name: Name().fake(),
            vehicle_info: "2022 Toyota Camry".to_string(),
            vin: "4T1C11AK*N*123456".to_string(),
            incident_date: crate::fixtures::incident_date(),
            incident_description: "Parking lot collision".to_string(),
            priority: Priority::Medium,
            ai_confidence: None,
            total_estimate: Some(crate::fixtures::standard_estimate()),
            assigned_agent: None,
        }
    }

    /// Sets the claim number
    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim_number = number.into();
        self
    }

    /// Sets the policyholder name
    pub fn with_policyholder(mut self, name: impl Into<String>) -> Self {
        self.policyholder_name = name.into();
        self
    }

    /// Sets the vehicle description
    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle_info = vehicle.into();
        self
    }

    /// Sets the review priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the AI confidence tier
    pub fn with_confidence(mut self, tier: ConfidenceTier) -> Self {
        self.ai_confidence = Some(tier);
        self
    }

    /// Clears the AI confidence tier (no analysis ran)
    pub fn without_confidence(mut self) -> Self {
        self.ai_confidence = None;
        self
    }

    /// Sets the total estimate
    pub fn with_estimate(mut self, estimate: Money) -> Self {
        self.total_estimate = Some(estimate);
        self
    }

    /// Clears the total estimate
    pub fn without_estimate(mut self) -> Self {
        self.total_estimate = None;
        self
    }

    /// Sets the assigned agent
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.assigned_agent = Some(agent.into());
        self
    }

    /// Builds the intake data
    pub fn build(self) -> NewClaim {
        NewClaim {
            claim_number: self.claim_number,
            policyholder_name: self.policyholder_name,
            vehicle_info: self.vehicle_info,
            vin: self.vin,
            incident_date: self.incident_date,
            incident_description: self.incident_description,
            priority: self.priority,
            ai_confidence: self.ai_confidence,
            total_estimate: self.total_estimate,
            assigned_agent: self.assigned_agent,
        }
    }
}

/// Builder for cost breakdown lines
pub struct CostLineBuilder {
    claim_id: ClaimId,
    category: CostCategory,
    description: String,
    amount: Money,
    hours: Option<Decimal>,
    rate: Option<Money>,
}

impl CostLineBuilder {
    /// Creates a builder for a parts line on the given claim
    pub fn new(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            category: CostCategory::Parts,
            description: "Front bumper assembly".to_string(),
            amount: Money::from_cents(148_500),
            hours: None,
            rate: None,
        }
    }

    /// Switches to a labor line with consistent hours x rate
    pub fn labor(mut self, hours: Decimal, rate: Money) -> Self {
        self.category = CostCategory::Labor;
        self.description = "Labor".to_string();
        self.amount = Money::from_hours(hours, rate).expect("non-negative labor amount");
        self.hours = Some(hours);
        self.rate = Some(rate);
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: CostCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the insert data
    pub fn build(self) -> NewCostLine {
        NewCostLine {
            claim_id: self.claim_id,
            category: self.category,
            description: self.description,
            amount: self.amount,
            hours: self.hours,
            rate: self.rate,
        }
    }
}
