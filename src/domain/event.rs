//! Alerts produced by the transition detector.
//!
//! One alert per detected transition per occurrence: a specific hospital
//! stay, a specific flight, a specific course end. Re-observing the same
//! condition on later cycles must not produce the alert again.

/// A notification-worthy state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Energy bar reached its cap.
    EnergyFull { current: u32, maximum: u32 },
    /// Nerve bar reached its cap.
    NerveFull { current: u32, maximum: u32 },
    /// Released from hospital.
    HospitalExit,
    /// Drug cooldown elapsed.
    DrugReady,
    /// Booster cooldown elapsed.
    BoosterReady,
    /// A flight just started.
    TravelDeparture(TravelAlert),
    /// Landing within the alert window (once per arrival time).
    TravelLanding(LandingAlert),
    /// Education course finishing within the hour (once per course end).
    EducationSoon { seconds_left: i64 },
    /// Something new appeared in the account event log.
    NewGlobalEvent { latest_ts: i64 },
    /// Unread inbox count went up.
    NewInboxMessage(InboxAlert),
    /// A company stock item ran out completely.
    CompanyStockEmpty { item: String },
    /// A company stock item dropped below the restock threshold.
    CompanyStockLow { item: String, quantity: u32 },
    /// An employee has been inactive past the threshold.
    EmployeeInactive(EmployeeAlert),
    /// The API key cannot read company data; checks stop until re-enabled.
    CompanyMonitorDisabled,
}

/// Departure details captured at the departure instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelAlert {
    pub destination: String,
    pub arrives_at: i64,
    pub flight_seconds_left: i64,
}

/// Landing details for the two-minute warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingAlert {
    pub destination: String,
    pub arrives_at: i64,
    pub seconds_left: i64,
}

/// New inbox mail summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxAlert {
    pub unread: u32,
    pub new_count: u32,
}

/// Inactive employee details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAlert {
    pub name: String,
    pub position: String,
    pub days_inactive: i64,
}

impl Alert {
    /// Short stable name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EnergyFull { .. } => "energy_full",
            Self::NerveFull { .. } => "nerve_full",
            Self::HospitalExit => "hospital_exit",
            Self::DrugReady => "drug_ready",
            Self::BoosterReady => "booster_ready",
            Self::TravelDeparture(_) => "travel_departure",
            Self::TravelLanding(_) => "travel_landing",
            Self::EducationSoon { .. } => "education_soon",
            Self::NewGlobalEvent { .. } => "new_global_event",
            Self::NewInboxMessage(_) => "new_inbox_message",
            Self::CompanyStockEmpty { .. } => "company_stock_empty",
            Self::CompanyStockLow { .. } => "company_stock_low",
            Self::EmployeeInactive(_) => "employee_inactive",
            Self::CompanyMonitorDisabled => "company_monitor_disabled",
        }
    }
}
