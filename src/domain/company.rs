//! Company view fetched on its own, slower cadence.
//!
//! Only directors get stock and employee data from the company endpoint;
//! an account without that access yields a permission error at the fetcher
//! and the company monitor disables itself.

/// One stocked item in the company warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    pub name: String,
    pub quantity: u32,
}

/// One employee with their last recorded activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub position: String,
    /// Unix timestamp of the last action; `None` when never recorded.
    pub last_action_ts: Option<i64>,
}

/// One company check's view of stock and staff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanySnapshot {
    pub stock: Vec<StockItem>,
    pub employees: Vec<Employee>,
}
