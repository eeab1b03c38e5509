//! Travel-profit ("Anti-Zonk") estimator.
//!
//! For each destination, picks the most profitable item from the static
//! tables, prices a full cargo load, and compares the required upfront cash
//! (the "modal") against cash on hand. A plan the player cannot fund gets
//! the Anti-Zonk warning rather than being hidden; destinations are only
//! excluded wholesale when the account has not unlocked travel trading yet.

pub mod table;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub use table::{Country, TravelItem, COUNTRIES, TRAVEL_ITEMS};

/// Torn item-market sale tax.
pub const SALE_TAX_RATE: Decimal = dec!(0.05);

/// Level gate below which travel trading is not recommended at all.
pub const MIN_TRAVEL_LEVEL: u32 = 15;

/// How many destinations a plan recommends.
const PLAN_SIZE: usize = 3;

/// Carry capacity: 5 base, +1 per 5 levels, +10 with a Large Suitcase.
#[must_use]
pub fn carry_capacity(level: u32, large_suitcase: bool) -> u32 {
    5 + level / 5 + if large_suitcase { 10 } else { 0 }
}

/// A fully priced destination recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    pub country: &'static Country,
    pub item: &'static TravelItem,
    pub capacity: u32,
    /// Upfront cash for a full load: `buy_price * capacity`.
    pub modal: Decimal,
    /// Sale revenue before tax: `sell_price * capacity`.
    pub gross: Decimal,
    pub tax: Decimal,
    pub profit: Decimal,
    /// False triggers the Anti-Zonk warning; equality with cash on hand
    /// still counts as affordable.
    pub affordable: bool,
    pub flight_seconds: i64,
}

impl DestinationPlan {
    /// Arrival time for a departure at `now`.
    #[must_use]
    pub fn eta(&self, now: i64) -> i64 {
        now + self.flight_seconds
    }
}

/// Ranked travel plan, or a locked marker for low-level accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelPlan {
    /// Account level below [`MIN_TRAVEL_LEVEL`]; no destinations offered.
    Locked { required_level: u32 },
    /// Top destinations by profit, descending.
    Ranked(Vec<DestinationPlan>),
}

impl TravelPlan {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    #[must_use]
    pub fn destinations(&self) -> &[DestinationPlan] {
        match self {
            Self::Locked { .. } => &[],
            Self::Ranked(plans) => plans,
        }
    }
}

/// Price one item at a full cargo load against available cash.
#[must_use]
pub fn price_load(item: &'static TravelItem, capacity: u32, cash_on_hand: Decimal) -> DestinationPlan {
    let qty = Decimal::from(capacity);
    let modal = item.buy_price * qty;
    let gross = item.sell_price * qty;
    let tax = gross * SALE_TAX_RATE;
    let profit = gross - tax - modal;

    // Table invariant: every item's country key resolves.
    let country = table::country(item.country).expect("item references known country");

    DestinationPlan {
        country,
        item,
        capacity,
        modal,
        gross,
        tax,
        profit,
        affordable: cash_on_hand >= modal,
        flight_seconds: i64::from(country.flight_min) * 60,
    }
}

/// Build the travel plan for an account.
///
/// Each destination is represented by its single most profitable item; the
/// result holds the top three destinations by profit.
#[must_use]
pub fn plan(cash_on_hand: Decimal, level: u32, large_suitcase: bool) -> TravelPlan {
    if level < MIN_TRAVEL_LEVEL {
        return TravelPlan::Locked {
            required_level: MIN_TRAVEL_LEVEL,
        };
    }

    let capacity = carry_capacity(level, large_suitcase);

    let mut plans: Vec<DestinationPlan> = COUNTRIES
        .iter()
        .filter_map(|c| {
            table::items_for(c.key)
                .map(|item| price_load(item, capacity, cash_on_hand))
                .max_by(|a, b| a.profit.cmp(&b.profit))
        })
        .collect();

    plans.sort_by(|a, b| b.profit.cmp(&a.profit));
    plans.truncate(PLAN_SIZE);

    TravelPlan::Ranked(plans)
}

/// Plan for a single known destination, if it exists in the tables.
///
/// Used to enrich departure and landing alerts with the numbers for the
/// flight actually underway.
#[must_use]
pub fn plan_for_destination(
    destination: &str,
    cash_on_hand: Decimal,
    level: u32,
    large_suitcase: bool,
) -> Option<DestinationPlan> {
    let country = COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(destination) || c.key == destination)?;
    let capacity = carry_capacity(level, large_suitcase);
    table::items_for(country.key)
        .map(|item| price_load(item, capacity, cash_on_hand))
        .max_by(|a, b| a.profit.cmp(&b.profit))
}
