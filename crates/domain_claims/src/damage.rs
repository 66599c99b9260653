//! AI-identified damage regions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, DamageItemId};

/// Damage severity as graded by the detection pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

/// Bounding box for damage highlighting, as percentages of the image extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: Decimal,
    pub y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

/// One AI-identified damage region on a claim's vehicle
///
/// Owned exclusively by its claim; created at intake and appended or edited
/// by agent adjustment, never independently deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageItem {
    pub id: DamageItemId,
    pub claim_id: ClaimId,
    /// Damage classification slug, e.g. "paint_scratches"
    pub damage_type: String,
    pub severity: Severity,
    /// Location tag, e.g. "front_bumper"
    pub location: String,
    pub description: String,
    /// Area measurement as reported, e.g. "12\" x 4\""
    pub area: Option<String>,
    pub depth: Option<String>,
    pub repair_type: Option<String>,
    /// Detection confidence, 0-100
    pub confidence: Decimal,
    pub coordinates: BoundingBox,
}

/// Insert data for a damage item
#[derive(Debug, Clone)]
pub struct NewDamageItem {
    pub claim_id: ClaimId,
    pub damage_type: String,
    pub severity: Severity,
    pub location: String,
    pub description: String,
    pub area: Option<String>,
    pub depth: Option<String>,
    pub repair_type: Option<String>,
    pub confidence: Decimal,
    pub coordinates: BoundingBox,
}

impl DamageItem {
    /// Materializes an insert with a fresh identifier
    pub fn new(insert: NewDamageItem) -> Self {
        Self {
            id: DamageItemId::new_v7(),
            claim_id: insert.claim_id,
            damage_type: insert.damage_type,
            severity: insert.severity,
            location: insert.location,
            description: insert.description,
            area: insert.area,
            depth: insert.depth,
            repair_type: insert.repair_type,
            confidence: insert.confidence,
            coordinates: insert.coordinates,
        }
    }
}
