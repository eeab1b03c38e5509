//! Background monitoring engine: state, detection, formatting, scheduling.

pub mod company;
pub mod detector;
pub mod format;
pub mod scheduler;
pub mod state;

pub use company::{check_company, INACTIVITY_THRESHOLD_DAYS, LOW_STOCK_THRESHOLD};
pub use detector::{detect, Detection, EDUCATION_WINDOW_SECS, LANDING_WINDOW_SECS};
pub use scheduler::Monitor;
pub use state::{MonitorState, StateStore};
