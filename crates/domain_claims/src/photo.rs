//! Claim photos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PhotoId};

/// One image associated with a claim and category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub claim_id: ClaimId,
    /// Category slug, e.g. "front_bumper"
    pub category: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    /// At most one primary per category by convention; not enforced
    pub is_primary: bool,
    pub uploaded_at: DateTime<Utc>,
}

/// Insert data for a photo
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub claim_id: ClaimId,
    pub category: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub is_primary: bool,
}

impl Photo {
    /// Materializes an insert with a fresh identifier and upload time
    pub fn new(insert: NewPhoto) -> Self {
        Self {
            id: PhotoId::new_v7(),
            claim_id: insert.claim_id,
            category: insert.category,
            url: insert.url,
            thumbnail_url: insert.thumbnail_url,
            is_primary: insert.is_primary,
            uploaded_at: Utc::now(),
        }
    }
}
