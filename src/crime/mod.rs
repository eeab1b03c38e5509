//! Effective Arsons (EA) crime-progression calculator.
//!
//! EA is a community metric estimating hidden crime experience from the
//! public criminal record: each offense category contributes its count
//! times a fixed multiplier. The aggregate score maps onto an ordered tier
//! ladder and drives a per-category safety classification, all from static
//! tables. Pure lookups, no external calls.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::CriminalRecord;

/// Offense categories tracked by the Torn criminal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrimeCategory {
    SellingIllegalProducts,
    Theft,
    AutoTheft,
    DrugDeals,
    ComputerCrimes,
    FraudCrimes,
    Murder,
    Other,
}

impl CrimeCategory {
    pub const ALL: [Self; 8] = [
        Self::SellingIllegalProducts,
        Self::Theft,
        Self::AutoTheft,
        Self::DrugDeals,
        Self::ComputerCrimes,
        Self::FraudCrimes,
        Self::Murder,
        Self::Other,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SellingIllegalProducts => "Selling Illegal Products",
            Self::Theft => "Theft",
            Self::AutoTheft => "Auto Theft",
            Self::DrugDeals => "Drug Deals",
            Self::ComputerCrimes => "Computer Crimes",
            Self::FraudCrimes => "Fraud Crimes",
            Self::Murder => "Murder",
            Self::Other => "Other",
        }
    }
}

/// EA gained per committed crime, by category (TornStats community data).
const EA_MULTIPLIERS: [(CrimeCategory, Decimal); 8] = [
    (CrimeCategory::SellingIllegalProducts, dec!(0.05)),
    (CrimeCategory::Theft, dec!(0.10)),
    (CrimeCategory::AutoTheft, dec!(0.25)),
    (CrimeCategory::DrugDeals, dec!(0.33)),
    (CrimeCategory::ComputerCrimes, dec!(0.50)),
    (CrimeCategory::FraudCrimes, dec!(0.66)),
    (CrimeCategory::Murder, dec!(0.80)),
    (CrimeCategory::Other, dec!(0.15)),
];

/// Minimum EA to attempt each category without excessive fail risk.
const SAFETY_FLOORS: [(CrimeCategory, Decimal); 8] = [
    (CrimeCategory::SellingIllegalProducts, dec!(0)),
    (CrimeCategory::Theft, dec!(25)),
    (CrimeCategory::AutoTheft, dec!(100)),
    (CrimeCategory::DrugDeals, dec!(250)),
    (CrimeCategory::ComputerCrimes, dec!(500)),
    (CrimeCategory::FraudCrimes, dec!(750)),
    (CrimeCategory::Murder, dec!(1000)),
    (CrimeCategory::Other, dec!(50)),
];

/// Safe above 1.2x the floor, caution above 0.8x, danger below.
const SAFE_MARGIN: Decimal = dec!(1.2);
const CAUTION_MARGIN: Decimal = dec!(0.8);

/// Ordered skill tiers on the EA ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EaTier {
    Novice,
    Amateur,
    Professional,
    Expert,
    Elite,
    Master,
    Legend,
}

impl EaTier {
    pub const ALL: [Self; 7] = [
        Self::Novice,
        Self::Amateur,
        Self::Professional,
        Self::Expert,
        Self::Elite,
        Self::Master,
        Self::Legend,
    ];

    /// EA score at which this tier begins.
    #[must_use]
    pub fn floor(&self) -> Decimal {
        match self {
            Self::Novice => dec!(0),
            Self::Amateur => dec!(50),
            Self::Professional => dec!(100),
            Self::Expert => dec!(250),
            Self::Elite => dec!(500),
            Self::Master => dec!(1000),
            Self::Legend => dec!(2500),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Amateur => "Amateur",
            Self::Professional => "Professional",
            Self::Expert => "Expert",
            Self::Elite => "Elite",
            Self::Master => "Master",
            Self::Legend => "Legend",
        }
    }

    /// Highest tier whose floor the score has reached.
    #[must_use]
    pub fn for_score(score: Decimal) -> Self {
        let mut tier = Self::Novice;
        for candidate in Self::ALL {
            if score >= candidate.floor() {
                tier = candidate;
            }
        }
        tier
    }

    /// The tier after this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|t| t == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

/// Safety classification for attempting a crime category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Safety {
    Safe,
    Caution,
    Danger,
}

/// One category's classification with the floor it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrimeSafety {
    pub category: CrimeCategory,
    pub safety: Safety,
    pub required_ea: Decimal,
}

/// Computed crime-progression status for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EaStatus {
    pub score: Decimal,
    pub tier: EaTier,
    /// Next tier and its floor; `None` at the top of the ladder.
    pub next_tier: Option<EaTier>,
    /// Fraction of the way from the current tier floor to the next,
    /// clamped to [0, 1]. Exactly 1 at the top tier.
    pub progress: Decimal,
    /// All categories, safest first, then by required EA ascending.
    pub safety: Vec<CrimeSafety>,
}

/// Weighted EA score from a criminal record.
#[must_use]
pub fn ea_score(record: &CriminalRecord) -> Decimal {
    EA_MULTIPLIERS
        .iter()
        .map(|(category, multiplier)| Decimal::from(count_for(record, *category)) * *multiplier)
        .sum()
}

fn count_for(record: &CriminalRecord, category: CrimeCategory) -> u32 {
    match category {
        CrimeCategory::SellingIllegalProducts => record.selling_illegal_products,
        CrimeCategory::Theft => record.theft,
        CrimeCategory::AutoTheft => record.auto_theft,
        CrimeCategory::DrugDeals => record.drug_deals,
        CrimeCategory::ComputerCrimes => record.computer_crimes,
        CrimeCategory::FraudCrimes => record.fraud_crimes,
        CrimeCategory::Murder => record.murder,
        CrimeCategory::Other => record.other,
    }
}

/// Classify one category at the given score.
#[must_use]
pub fn classify(score: Decimal, category: CrimeCategory) -> CrimeSafety {
    let required_ea = SAFETY_FLOORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, floor)| *floor)
        .unwrap_or_default();

    let safety = if score >= required_ea * SAFE_MARGIN {
        Safety::Safe
    } else if score >= required_ea * CAUTION_MARGIN {
        Safety::Caution
    } else {
        Safety::Danger
    };

    CrimeSafety {
        category,
        safety,
        required_ea,
    }
}

/// Full EA status for a criminal record.
#[must_use]
pub fn ea_status(record: &CriminalRecord) -> EaStatus {
    let score = ea_score(record);
    let tier = EaTier::for_score(score);
    let next_tier = tier.next();

    let progress = match next_tier {
        Some(next) => {
            let span = next.floor() - tier.floor();
            ((score - tier.floor()) / span).clamp(Decimal::ZERO, Decimal::ONE)
        }
        None => Decimal::ONE,
    };

    let mut safety: Vec<CrimeSafety> = CrimeCategory::ALL
        .iter()
        .map(|category| classify(score, *category))
        .collect();
    safety.sort_by(|a, b| {
        a.safety
            .cmp(&b.safety)
            .then(a.required_ea.cmp(&b.required_ea))
    });

    EaStatus {
        score,
        tier,
        next_tier,
        progress,
        safety,
    }
}
