//! Pre-built Test Fixtures
//!
//! Deterministic, predictable test data shared across the suite.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{ClaimId, Money, ShopId};

/// A deterministic claim id for tests that need a stable identifier
pub fn known_claim_id() -> ClaimId {
    ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
}

/// A claim id guaranteed not to exist in any store built by these helpers
pub fn missing_claim_id() -> ClaimId {
    ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440099").unwrap())
}

/// Sequential test claim numbers: `CLM-TEST-0001`, `CLM-TEST-0002`, ...
pub fn claim_number(n: u32) -> String {
    format!("CLM-TEST-{n:04}")
}

/// Standard incident date used across tests
pub fn incident_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// A fixed instant for entries that need an explicit timestamp
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// The featured seed claim's estimate
pub fn standard_estimate() -> Money {
    Money::new(dec!(2847.00)).unwrap()
}

/// A small estimate for low-value claims
pub fn small_estimate() -> Money {
    Money::new(dec!(689.20)).unwrap()
}

/// Standard repair shop for send-to-shop tests
pub fn repair_shop() -> ShopId {
    ShopId::new("shop-1")
}
