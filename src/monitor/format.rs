//! Alert message formatting.
//!
//! Turns detected alerts into Telegram `MarkdownV2` text. Travel alerts are
//! enriched with the Anti-Zonk numbers for the flight underway and nerve
//! alerts with the current Effective Arsons status, both computed from the
//! same snapshot the detector saw.

use rust_decimal::Decimal;

use crate::config::TravelConfig;
use crate::crime::{self, EaStatus, Safety};
use crate::domain::{Alert, Snapshot};
use crate::travel::{self, DestinationPlan};

/// Format an alert into a Telegram message.
#[must_use]
pub fn format_alert(alert: &Alert, snapshot: &Snapshot, travel_cfg: &TravelConfig) -> String {
    match alert {
        Alert::EnergyFull { current, maximum } => format!(
            "⚡ *Energy Full*\n\
            \n\
            Energy is at `{current}/{maximum}`\\. Time to hit the gym\\."
        ),
        Alert::NerveFull { current, maximum } => {
            let status = crime::ea_status(&snapshot.criminal_record);
            format!(
                "🔥 *Nerve Full*\n\
                \n\
                Nerve is at `{current}/{maximum}`\\. Time for crime\\.\n\
                \n{}",
                format_ea_summary(&status)
            )
        }
        Alert::HospitalExit => "🏥 *Out of Hospital*\n\
            \n\
            Back on your feet and ready to go\\."
            .to_string(),
        Alert::DrugReady => "💊 *Drug Cooldown Over*\n\
            \n\
            You can take another Xanax\\."
            .to_string(),
        Alert::BoosterReady => "💉 *Booster Cooldown Over*\n\
            \n\
            You can use another booster\\."
            .to_string(),
        Alert::TravelDeparture(e) => {
            let mut msg = format!(
                "✈️ *Wheels Up: {}*\n\
                \n\
                Landing in `{}`\\.",
                escape_markdown(&e.destination),
                fmt_duration(e.flight_seconds_left),
            );
            if let Some(plan) = travel::plan_for_destination(
                &e.destination,
                snapshot.cash_on_hand,
                snapshot.level,
                travel_cfg.large_suitcase,
            ) {
                msg.push_str("\n\n");
                msg.push_str(&format_destination_plan(&plan));
            }
            msg
        }
        Alert::TravelLanding(e) => {
            let mut msg = format!(
                "🛬 *Landing Soon: {}*\n\
                \n\
                Touchdown in `{}`\\. Get ready\\.",
                escape_markdown(&e.destination),
                fmt_duration(e.seconds_left),
            );
            if let Some(plan) = travel::plan_for_destination(
                &e.destination,
                snapshot.cash_on_hand,
                snapshot.level,
                travel_cfg.large_suitcase,
            ) {
                msg.push_str("\n\n");
                msg.push_str(&format_destination_plan(&plan));
            }
            msg
        }
        Alert::EducationSoon { seconds_left } => format!(
            "🎓 *Course Almost Done*\n\
            \n\
            Finishes in `{}`\\. Queue up the next one\\.",
            fmt_duration(*seconds_left),
        ),
        Alert::NewGlobalEvent { .. } => "🔔 *New Account Event*\n\
            \n\
            Something happened — check your event log\\."
            .to_string(),
        Alert::NewInboxMessage(e) => format!(
            "📩 *New Mail*\n\
            \n\
            `{}` new message{}, `{}` unread total\\.",
            e.new_count,
            if e.new_count == 1 { "" } else { "s" },
            e.unread,
        ),
        Alert::CompanyStockEmpty { .. }
        | Alert::CompanyStockLow { .. }
        | Alert::EmployeeInactive(_)
        | Alert::CompanyMonitorDisabled => format_company_alert(alert),
    }
}

/// Format a company check alert into a Telegram message.
///
/// Company alerts need no snapshot context; stock and staff numbers are
/// carried in the alert itself. Non-company kinds fall through to
/// [`format_alert`] semantics via an empty snapshot.
#[must_use]
pub fn format_company_alert(alert: &Alert) -> String {
    match alert {
        Alert::CompanyStockEmpty { item } => format!(
            "📦 *Stock Empty*\n\
            \n\
            *{}* is completely out\\. Restock now\\.",
            escape_markdown(item),
        ),
        Alert::CompanyStockLow { item, quantity } => format!(
            "📦 *Stock Low*\n\
            \n\
            *{}*: `{}` left\\.",
            escape_markdown(item),
            quantity,
        ),
        Alert::EmployeeInactive(e) => format!(
            "💤 *Inactive Employee*\n\
            \n\
            *{}* \\({}\\) has been idle for `{}` days\\.",
            escape_markdown(&e.name),
            escape_markdown(&e.position),
            e.days_inactive,
        ),
        Alert::CompanyMonitorDisabled => "⚠️ *Company Checks Disabled*\n\
            \n\
            The API key cannot read company data\\. Stock and staff \
            alerts are off\\."
            .to_string(),
        other => format_alert(other, &Snapshot::default(), &TravelConfig::default()),
    }
}

/// Shopping-list block for one destination.
fn format_destination_plan(plan: &DestinationPlan) -> String {
    let mut msg = format!(
        "{} *{}* — {}\n\
        🛒 Buy `{}x` at `${}` \\(modal `${}`\\)\n\
        💰 Est\\. profit after tax: `${}`",
        plan.country.flag,
        escape_markdown(plan.country.name),
        escape_markdown(plan.item.name),
        plan.capacity,
        fmt_money(plan.item.buy_price),
        fmt_money(plan.modal),
        fmt_money(plan.profit),
    );
    if !plan.affordable {
        msg.push_str(&format!(
            "\n⚠️ *Anti\\-Zonk:* you are short of the `${}` modal\\.",
            fmt_money(plan.modal)
        ));
    }
    msg
}

/// Compact EA block for nerve alerts.
fn format_ea_summary(status: &EaStatus) -> String {
    let ladder = match status.next_tier {
        Some(next) => format!(
            "`{}` {} → {}",
            progress_bar(status.progress, 10),
            escape_markdown(status.tier.display_name()),
            escape_markdown(next.display_name()),
        ),
        None => format!(
            "`{}` {}",
            progress_bar(status.progress, 10),
            escape_markdown(status.tier.display_name()),
        ),
    };

    let best = status
        .safety
        .iter()
        .filter(|s| s.safety == Safety::Safe)
        .next_back()
        .map(|s| s.category.display_name())
        .unwrap_or("Selling Illegal Products");

    format!(
        "🦾 EA `{}` — {}\n\
        🟢 Safest bet: {}",
        status.score,
        ladder,
        escape_markdown(best),
    )
}

/// Visual progress bar, `progress` in [0, 1].
#[must_use]
pub fn progress_bar(progress: Decimal, width: u32) -> String {
    let filled = (progress * Decimal::from(width))
        .floor()
        .try_into()
        .unwrap_or(0u32)
        .min(width);
    let empty = width - filled;
    let mut bar = String::new();
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in 0..empty {
        bar.push('░');
    }
    bar
}

/// `1h 5m` / `4m 20s` style durations.
#[must_use]
pub fn fmt_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Thousands-separated money amount, dropping any fractional part.
#[must_use]
pub fn fmt_money(amount: Decimal) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = whole.strip_prefix('-').map_or(("", whole.as_str()), |d| ("-", d));
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

/// Escape special characters for Telegram `MarkdownV2`.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
