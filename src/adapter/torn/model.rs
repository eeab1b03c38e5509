//! Wire types for the Torn user endpoint.
//!
//! Torn returns one flat JSON object for a comma-separated selection list.
//! Everything is optional on the wire; missing sections default to empty so
//! a reduced-permission key degrades instead of failing to parse. The
//! conversion into [`Snapshot`] happens here, including turning Torn's
//! seconds-remaining fields into absolute timestamps.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Bar, CompanySnapshot, Cooldowns, CriminalRecord, Education, Employee, Snapshot, StockItem,
    Travel,
};

/// Error object Torn embeds in the response body.
#[derive(Debug, Clone, Deserialize)]
pub struct WireError {
    pub code: u16,
    #[serde(rename = "error")]
    pub message: String,
}

/// Full response envelope: either an error object or the selected data.
#[derive(Debug, Default, Deserialize)]
pub struct WireUser {
    pub error: Option<WireError>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub money_onhand: i64,
    #[serde(default)]
    pub energy: WireBar,
    #[serde(default)]
    pub nerve: WireBar,
    #[serde(default)]
    pub status: WireStatus,
    #[serde(default)]
    pub travel: WireTravel,
    #[serde(default)]
    pub education_current: u32,
    #[serde(default)]
    pub education_timeleft: i64,
    #[serde(default)]
    pub cooldowns: WireCooldowns,
    #[serde(default)]
    pub events: HashMap<String, WireEvent>,
    #[serde(default)]
    pub messages: HashMap<String, WireMessage>,
    #[serde(default)]
    pub criminalrecord: WireCriminalRecord,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireBar {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub maximum: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireStatus {
    #[serde(default)]
    pub state: String,
    /// Absolute release timestamp while hospitalized or jailed.
    #[serde(default)]
    pub until: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireTravel {
    #[serde(default)]
    pub destination: String,
    /// Absolute arrival timestamp.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub departed: i64,
    #[serde(default)]
    pub time_left: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireCooldowns {
    /// Seconds remaining, zero when ready.
    #[serde(default)]
    pub drug: i64,
    #[serde(default)]
    pub booster: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireEvent {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub timestamp: i64,
    /// 0 = unread, 1 = read.
    #[serde(default)]
    pub read: u8,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireCriminalRecord {
    #[serde(default)]
    pub selling_illegal_products: u32,
    #[serde(default)]
    pub theft: u32,
    #[serde(default)]
    pub auto_theft: u32,
    #[serde(default)]
    pub drug_deals: u32,
    #[serde(default)]
    pub computer_crimes: u32,
    #[serde(default)]
    pub fraud_crimes: u32,
    #[serde(default)]
    pub murder: u32,
    #[serde(default)]
    pub other: u32,
}

impl WireUser {
    /// Convert the wire shape into a domain snapshot taken at `now`.
    #[must_use]
    pub fn into_snapshot(self, now: i64) -> Snapshot {
        let in_hospital = self.status.state.eq_ignore_ascii_case("hospital");

        // "Traveling to Torn" is the return leg; it still counts as a
        // flight with a destination.
        let traveling = self.travel.time_left > 0;

        Snapshot {
            level: self.level,
            cash_on_hand: Decimal::from(self.money_onhand),
            energy: Bar::new(self.energy.current, self.energy.maximum),
            nerve: Bar::new(self.nerve.current, self.nerve.maximum),
            hospital_until: (in_hospital && self.status.until > 0).then_some(self.status.until),
            travel: Travel {
                destination: self.travel.destination,
                arrives_at: traveling.then_some(self.travel.timestamp),
                departed_at: (self.travel.departed > 0).then_some(self.travel.departed),
            },
            education: Education {
                course_id: (self.education_current > 0).then_some(self.education_current),
                ends_at: (self.education_timeleft > 0).then_some(now + self.education_timeleft),
            },
            cooldowns: Cooldowns {
                drug_until: (self.cooldowns.drug > 0).then_some(now + self.cooldowns.drug),
                booster_until: (self.cooldowns.booster > 0).then_some(now + self.cooldowns.booster),
            },
            inbox_unread: self
                .messages
                .values()
                .filter(|m| m.read == 0)
                .count()
                .try_into()
                .unwrap_or(u32::MAX),
            latest_event_ts: self.events.values().map(|e| e.timestamp).max(),
            criminal_record: CriminalRecord {
                selling_illegal_products: self.criminalrecord.selling_illegal_products,
                theft: self.criminalrecord.theft,
                auto_theft: self.criminalrecord.auto_theft,
                drug_deals: self.criminalrecord.drug_deals,
                computer_crimes: self.criminalrecord.computer_crimes,
                fraud_crimes: self.criminalrecord.fraud_crimes,
                murder: self.criminalrecord.murder,
                other: self.criminalrecord.other,
            },
        }
    }
}

/// Response envelope for the company endpoint (director access).
#[derive(Debug, Default, Deserialize)]
pub struct WireCompany {
    pub error: Option<WireError>,
    #[serde(default)]
    pub company_stock: HashMap<String, WireStockItem>,
    #[serde(default)]
    pub company_employees: HashMap<String, WireEmployee>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireStockItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub in_stock: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub last_action: WireLastAction,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireLastAction {
    #[serde(default)]
    pub timestamp: i64,
}

impl WireCompany {
    /// Convert the wire shape into a domain company snapshot.
    ///
    /// Stock map keys are item names; the embedded `name` field wins when
    /// present, the key fills in otherwise.
    #[must_use]
    pub fn into_company(self) -> CompanySnapshot {
        let mut stock: Vec<StockItem> = self
            .company_stock
            .into_iter()
            .map(|(key, item)| StockItem {
                name: if item.name.is_empty() { key } else { item.name },
                quantity: item.in_stock,
            })
            .collect();
        stock.sort_by(|a, b| a.name.cmp(&b.name));

        let mut employees: Vec<Employee> = self
            .company_employees
            .into_values()
            .map(|emp| Employee {
                name: emp.name,
                position: emp.position,
                last_action_ts: (emp.last_action.timestamp > 0)
                    .then_some(emp.last_action.timestamp),
            })
            .collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));

        CompanySnapshot { stock, employees }
    }
}
