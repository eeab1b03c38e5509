//! Immutable per-cycle account snapshot.
//!
//! One snapshot is produced by the fetcher each poll cycle and discarded
//! after it. All time fields are absolute unix timestamps; the fetcher
//! converts Torn's seconds-remaining values at the boundary, so a value in
//! the past always means "already elapsed".

use rust_decimal::Decimal;

/// A current/maximum pair such as energy or nerve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bar {
    pub current: u32,
    pub maximum: u32,
}

impl Bar {
    #[must_use]
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Full means at (or over, after a refill bonus) the cap.
    /// A zero cap never counts as full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.maximum > 0 && self.current >= self.maximum
    }
}

/// Travel leg in progress, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Travel {
    pub destination: String,
    /// Arrival time; `None` when not in the air.
    pub arrives_at: Option<i64>,
    pub departed_at: Option<i64>,
}

impl Travel {
    /// In the air right now. An arrival time in the past counts as landed.
    #[must_use]
    pub fn is_traveling(&self, now: i64) -> bool {
        self.arrives_at.is_some_and(|t| t > now)
    }

    /// Heading somewhere other than home. The return leg to Torn is still
    /// a flight, but not one worth alerting on.
    #[must_use]
    pub fn is_outbound(&self) -> bool {
        !self.destination.eq_ignore_ascii_case("torn")
    }
}

/// Active education course, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Education {
    pub course_id: Option<u32>,
    pub ends_at: Option<i64>,
}

/// Consumable cooldowns as absolute end times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldowns {
    pub drug_until: Option<i64>,
    pub booster_until: Option<i64>,
}

/// Lifetime crime counts per offense category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriminalRecord {
    pub selling_illegal_products: u32,
    pub theft: u32,
    pub auto_theft: u32,
    pub drug_deals: u32,
    pub computer_crimes: u32,
    pub fraud_crimes: u32,
    pub murder: u32,
    pub other: u32,
}

/// One poll cycle's view of the account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub level: u32,
    pub cash_on_hand: Decimal,
    pub energy: Bar,
    pub nerve: Bar,
    /// Hospital release time; `None` when not hospitalized.
    pub hospital_until: Option<i64>,
    pub travel: Travel,
    pub education: Education,
    pub cooldowns: Cooldowns,
    pub inbox_unread: u32,
    /// Timestamp of the newest account event, if any were returned.
    pub latest_event_ts: Option<i64>,
    pub criminal_record: CriminalRecord,
}

impl Snapshot {
    /// In hospital right now. A release time in the past counts as released.
    #[must_use]
    pub fn in_hospital(&self, now: i64) -> bool {
        self.hospital_until.is_some_and(|t| t > now)
    }
}
