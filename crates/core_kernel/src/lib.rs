//! Core Kernel - Foundational types for the claims-review system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money with precise decimal arithmetic
//! - Strongly-typed entity identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{
    AuditEntryId, ClaimId, CostLineId, DamageItemId, PhotoId, ShopId,
};
pub use money::{Money, MoneyError};
