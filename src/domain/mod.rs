//! Account-state domain types shared across the monitor and advisors.

pub mod company;
pub mod event;
pub mod snapshot;

pub use company::{CompanySnapshot, Employee, StockItem};
pub use event::{Alert, EmployeeAlert, InboxAlert, LandingAlert, TravelAlert};
pub use snapshot::{Bar, Cooldowns, CriminalRecord, Education, Snapshot, Travel};
