//! Canonical seed dataset
//!
//! The demo-reset operation restores exactly this dataset. Claim numbers
//! are the stable contract; identifiers are freshly generated on every
//! seed. CLM-2024-001847 carries the full child-record set (damage items,
//! photos, cost breakdown, audit history); the remaining claims spread
//! across confidence tiers so batch approval and send-to-shop are
//! exercisable against a fresh store.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money};
use domain_claims::{
    AuditAction, BoundingBox, Claim, ClaimStatus, ConfidenceTier, CostCategory, NewCostLine,
    NewDamageItem, NewPhoto, Priority, Severity,
};
use domain_claims::store::ClaimStore;

use crate::store::MemoryStore;

/// Populates an empty store with the canonical seed dataset
pub(crate) fn populate(store: &mut MemoryStore) {
    let now = Utc::now();

    let featured = seed_claim(SeedClaim {
        claim_number: "CLM-2024-001847",
        policyholder_name: "Michael Rodriguez",
        vehicle_info: "2022 Toyota Camry",
        vin: "4T1C11AK*N*123456",
        incident_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        incident_description: "Parking lot collision",
        status: ClaimStatus::PendingReview,
        priority: Priority::High,
        ai_confidence: Some(ConfidenceTier::High),
        submitted_hours_ago: 2,
        total_estimate: dec!(2847.00),
        assigned_agent: Some("Sarah Johnson"),
    });
    let featured_id = featured.id;
    store.insert_claim(featured);
    seed_featured_children(store, featured_id);

    let submitted_claims = [
        (
            seed_claim(SeedClaim {
                claim_number: "CLM-2024-001848",
                policyholder_name: "Emily Watson",
                vehicle_info: "2021 Honda Accord",
                vin: "1HGCV1F3*M*204917",
                incident_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
                incident_description: "Rear-end collision at low speed",
                status: ClaimStatus::PendingReview,
                priority: Priority::Medium,
                ai_confidence: Some(ConfidenceTier::High),
                submitted_hours_ago: 5,
                total_estimate: dec!(1263.50),
                assigned_agent: Some("Sarah Johnson"),
            }),
            "Emily Watson",
        ),
        (
            seed_claim(SeedClaim {
                claim_number: "CLM-2024-001849",
                policyholder_name: "James Park",
                vehicle_info: "2019 Ford F-150",
                vin: "1FTEW1E5*K*771204",
                incident_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                incident_description: "Hail damage across hood and roof",
                status: ClaimStatus::PendingReview,
                priority: Priority::Medium,
                ai_confidence: Some(ConfidenceTier::Medium),
                submitted_hours_ago: 26,
                total_estimate: dec!(4512.75),
                assigned_agent: Some("Sarah Johnson"),
            }),
            "James Park",
        ),
        (
            seed_claim(SeedClaim {
                claim_number: "CLM-2024-001850",
                policyholder_name: "Dana Whitfield",
                vehicle_info: "2023 Subaru Outback",
                vin: "4S4BTANC*P*318856",
                incident_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
                incident_description: "Shopping cart impact on rear quarter panel",
                status: ClaimStatus::PendingReview,
                priority: Priority::Low,
                ai_confidence: Some(ConfidenceTier::Low),
                submitted_hours_ago: 8,
                total_estimate: dec!(689.20),
                assigned_agent: None,
            }),
            "Dana Whitfield",
        ),
    ];

    for (claim, policyholder) in submitted_claims {
        let claim_id = claim.id;
        let submitted_at = claim.submitted_at;
        store.insert_claim(claim);
        store.append_audit_at(
            claim_id,
            AuditAction::ClaimSubmitted {},
            policyholder,
            submitted_at,
        );
    }

    // One claim already through review, ready for send-to-shop
    let mut approved = seed_claim(SeedClaim {
        claim_number: "CLM-2024-001851",
        policyholder_name: "Priya Natarajan",
        vehicle_info: "2020 Mazda CX-5",
        vin: "JM3KFBDM*L*640112",
        incident_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        incident_description: "Side-swipe on highway merge",
        status: ClaimStatus::Approved,
        priority: Priority::High,
        ai_confidence: Some(ConfidenceTier::High),
        submitted_hours_ago: 49,
        total_estimate: dec!(3105.40),
        assigned_agent: Some("Sarah Johnson"),
    });
    approved.agent_notes = Some("Damage consistent with reported incident".to_string());
    let approved_id = approved.id;
    let approved_submitted_at = approved.submitted_at;
    let approved_estimate = approved.total_estimate;
    store.insert_claim(approved);
    store.append_audit_at(
        approved_id,
        AuditAction::ClaimSubmitted {},
        "Priya Natarajan",
        approved_submitted_at,
    );
    store.append_audit_at(
        approved_id,
        AuditAction::ClaimApproved {
            notes: Some("Damage consistent with reported incident".to_string()),
            estimate_amount: approved_estimate,
        },
        "Sarah Johnson",
        now - Duration::hours(20),
    );
}

struct SeedClaim {
    claim_number: &'static str,
    policyholder_name: &'static str,
    vehicle_info: &'static str,
    vin: &'static str,
    incident_date: NaiveDate,
    incident_description: &'static str,
    status: ClaimStatus,
    priority: Priority,
    ai_confidence: Option<ConfidenceTier>,
    submitted_hours_ago: i64,
    total_estimate: Decimal,
    assigned_agent: Option<&'static str>,
}

fn seed_claim(seed: SeedClaim) -> Claim {
    // Seed estimates are non-negative literals; Money::new cannot fail here
    let estimate = Money::new(seed.total_estimate).ok();
    Claim {
        id: ClaimId::new_v7(),
        claim_number: seed.claim_number.to_string(),
        policyholder_name: seed.policyholder_name.to_string(),
        vehicle_info: seed.vehicle_info.to_string(),
        vin: seed.vin.to_string(),
        incident_date: seed.incident_date,
        incident_description: seed.incident_description.to_string(),
        status: seed.status,
        priority: seed.priority,
        ai_confidence: seed.ai_confidence,
        submitted_at: Utc::now() - Duration::hours(seed.submitted_hours_ago),
        total_estimate: estimate,
        agent_notes: None,
        adjuster_notes: None,
        assigned_agent: seed.assigned_agent.map(str::to_string),
        assigned_shop_id: None,
    }
}

/// Child records and audit history for the featured claim
fn seed_featured_children(store: &mut MemoryStore, claim_id: ClaimId) {
    let now = Utc::now();

    let damage_items = [
        NewDamageItem {
            claim_id,
            damage_type: "paint_scratches".to_string(),
            severity: Severity::Moderate,
            location: "front_bumper".to_string(),
            description: "Paint Scratches".to_string(),
            area: Some("12\" x 4\"".to_string()),
            depth: Some("Surface level".to_string()),
            repair_type: Some("Paint & buff".to_string()),
            confidence: dec!(87.00),
            coordinates: bounding_box(35, 45, 25, 15),
        },
        NewDamageItem {
            claim_id,
            damage_type: "structural_dent".to_string(),
            severity: Severity::Severe,
            location: "front_bumper".to_string(),
            description: "Structural Dent".to_string(),
            area: Some("8\" x 6\"".to_string()),
            depth: Some("2.5\" deep".to_string()),
            repair_type: Some("Panel replacement".to_string()),
            confidence: dec!(94.00),
            coordinates: bounding_box(20, 60, 15, 10),
        },
        NewDamageItem {
            claim_id,
            damage_type: "surface_abrasion".to_string(),
            severity: Severity::Minor,
            location: "headlight_housing".to_string(),
            description: "Minor Scuff".to_string(),
            area: Some("3\" x 1\"".to_string()),
            depth: Some("Surface only".to_string()),
            repair_type: Some("Polish/compound".to_string()),
            confidence: dec!(76.00),
            coordinates: bounding_box(45, 35, 10, 8),
        },
    ];
    for item in damage_items {
        store.create_damage_item(item);
    }

    let photos = [
        NewPhoto {
            claim_id,
            category: "front_bumper".to_string(),
            url: unsplash("photo-1449965408869-eaa3f722e40d", 800, 600),
            thumbnail_url: Some(unsplash("photo-1449965408869-eaa3f722e40d", 200, 150)),
            is_primary: true,
        },
        NewPhoto {
            claim_id,
            category: "front_bumper".to_string(),
            url: unsplash("photo-1603584173870-7f23fdae1b7a", 800, 600),
            thumbnail_url: Some(unsplash("photo-1603584173870-7f23fdae1b7a", 200, 150)),
            is_primary: false,
        },
        NewPhoto {
            claim_id,
            category: "side_panel".to_string(),
            url: unsplash("photo-1609244314066-f69aae9f7f82", 800, 600),
            thumbnail_url: Some(unsplash("photo-1609244314066-f69aae9f7f82", 200, 150)),
            is_primary: false,
        },
    ];
    for photo in photos {
        store.create_photo(photo);
    }

    let cost_lines = [
        NewCostLine {
            claim_id,
            category: CostCategory::Labor,
            description: "Labor".to_string(),
            amount: Money::from_cents(102_000),
            hours: Some(dec!(12.00)),
            rate: Some(Money::from_cents(8_500)),
        },
        NewCostLine {
            claim_id,
            category: CostCategory::Parts,
            description: "Front bumper assembly".to_string(),
            amount: Money::from_cents(148_500),
            hours: None,
            rate: None,
        },
        NewCostLine {
            claim_id,
            category: CostCategory::Paint,
            description: "Paint & Materials".to_string(),
            amount: Money::from_cents(28_500),
            hours: None,
            rate: None,
        },
        NewCostLine {
            claim_id,
            category: CostCategory::Supplies,
            description: "Shop Supplies".to_string(),
            amount: Money::from_cents(5_700),
            hours: None,
            rate: None,
        },
    ];
    for line in cost_lines {
        store.create_cost_line(line);
    }

    store.append_audit_at(
        claim_id,
        AuditAction::ClaimSubmitted {},
        "Michael Rodriguez",
        now - Duration::hours(3),
    );
    store.append_audit_at(
        claim_id,
        AuditAction::PhotosUploaded {
            photo_count: 9,
            processed_by_cv: true,
        },
        "system",
        now - Duration::hours(2),
    );
    store.append_audit_at(
        claim_id,
        AuditAction::AiAnalysisCompleted {
            confidence_pct: dec!(87.00),
            areas_identified: 3,
        },
        "system",
        now - Duration::hours(2),
    );
}

fn bounding_box(x: i64, y: i64, width: i64, height: i64) -> BoundingBox {
    BoundingBox {
        x: Decimal::new(x, 0),
        y: Decimal::new(y, 0),
        width: Decimal::new(width, 0),
        height: Decimal::new(height, 0),
    }
}

fn unsplash(photo: &str, w: u32, h: u32) -> String {
    format!("https://images.unsplash.com/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w={w}&h={h}")
}
