//! Company stock and staff checks.
//!
//! Pure classification over a [`CompanySnapshot`]: empty or low stock and
//! employees idle past the threshold. Runs on a slower cadence than the
//! account monitor and repeats while a problem stands; these are standing
//! calls to action, not one-off transitions.

use crate::domain::{Alert, CompanySnapshot, EmployeeAlert};

/// Quantity below which a stocked item is flagged for restock.
pub const LOW_STOCK_THRESHOLD: u32 = 50;

/// Days of inactivity after which an employee is flagged.
pub const INACTIVITY_THRESHOLD_DAYS: i64 = 3;

const SECS_PER_DAY: i64 = 86_400;

/// Classify one company snapshot taken at `now`.
#[must_use]
pub fn check_company(company: &CompanySnapshot, now: i64) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for item in &company.stock {
        if item.quantity == 0 {
            alerts.push(Alert::CompanyStockEmpty {
                item: item.name.clone(),
            });
        } else if item.quantity < LOW_STOCK_THRESHOLD {
            alerts.push(Alert::CompanyStockLow {
                item: item.name.clone(),
                quantity: item.quantity,
            });
        }
    }

    for employee in &company.employees {
        let Some(last_action_ts) = employee.last_action_ts else {
            continue;
        };
        let days_inactive = (now - last_action_ts) / SECS_PER_DAY;
        if days_inactive >= INACTIVITY_THRESHOLD_DAYS {
            alerts.push(Alert::EmployeeInactive(EmployeeAlert {
                name: employee.name.clone(),
                position: employee.position.clone(),
                days_inactive,
            }));
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, StockItem};

    const NOW: i64 = 1_700_000_000;

    fn stocked(name: &str, quantity: u32) -> StockItem {
        StockItem {
            name: name.into(),
            quantity,
        }
    }

    #[test]
    fn empty_stock_outranks_low_stock() {
        let company = CompanySnapshot {
            stock: vec![stocked("Beer", 0), stocked("Wine", 12), stocked("Gin", 50)],
            employees: vec![],
        };

        let alerts = check_company(&company, NOW);
        assert_eq!(alerts.len(), 2);
        assert!(matches!(&alerts[0], Alert::CompanyStockEmpty { item } if item == "Beer"));
        assert!(matches!(
            &alerts[1],
            Alert::CompanyStockLow { item, quantity: 12 } if item == "Wine"
        ));
    }

    #[test]
    fn inactivity_boundary_is_three_full_days() {
        let company = CompanySnapshot {
            stock: vec![],
            employees: vec![
                Employee {
                    name: "Duke".into(),
                    position: "Manager".into(),
                    last_action_ts: Some(NOW - 3 * SECS_PER_DAY),
                },
                Employee {
                    name: "Leslie".into(),
                    position: "Clerk".into(),
                    last_action_ts: Some(NOW - 3 * SECS_PER_DAY + 1),
                },
                Employee {
                    name: "Ghost".into(),
                    position: "Clerk".into(),
                    last_action_ts: None,
                },
            ],
        };

        let alerts = check_company(&company, NOW);
        match &alerts[..] {
            [Alert::EmployeeInactive(e)] => {
                assert_eq!(e.name, "Duke");
                assert_eq!(e.days_inactive, 3);
            }
            other => panic!("expected one inactivity alert, got {other:?}"),
        }
    }

    #[test]
    fn healthy_company_is_quiet() {
        let company = CompanySnapshot {
            stock: vec![stocked("Beer", 500)],
            employees: vec![Employee {
                name: "Duke".into(),
                position: "Manager".into(),
                last_action_ts: Some(NOW - 60),
            }],
        };
        assert!(check_company(&company, NOW).is_empty());
    }
}
