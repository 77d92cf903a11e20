//! Cash-flow projection display

use super::report::{format_header, separator};
use crate::config::Settings;
use crate::models::Money;
use crate::services::period::PeriodService;
use crate::services::projection::Projection;

/// Format the full projection report
pub fn format_projection(projection: &Projection, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format_header(&format!(
        "Pay period {}",
        PeriodService::format_period_friendly(&projection.period)
    )));
    output.push_str(&format!(
        "Next payday:       {}\n",
        projection.next_payday.format(&settings.date_format)
    ));
    output.push_str(&format!("Days remaining:    {}\n", projection.days_remaining));
    if projection.schedule_stale {
        output.push_str("Schedule:          stale, advanced past stored payday\n");
    }
    if projection.schedule_ahead {
        output.push_str("Schedule:          period has not started, payday is over a cadence away\n");
    }
    output.push('\n');

    let income_note = if projection.is_income_estimated() {
        " (estimated)"
    } else {
        ""
    };
    output.push_str(&format!(
        "Income:            {:>12}{}\n",
        money(projection.projected_income),
        income_note
    ));
    output.push_str(&format!("Spent so far:      {:>12}\n", money(projection.expense_so_far)));
    output.push_str(&format!("Bills remaining:   {:>12}\n", money(projection.bills_remaining)));
    output.push_str(&format!("{}\n", separator(32)));
    output.push_str(&format!("Projected balance: {:>12}\n", money(projection.projected_balance)));
    output.push_str(&format!("Daily allowance:   {:>12}\n", money(projection.daily_allowance)));

    if let Some(top) = &projection.top_category {
        output.push_str(&format!("Top category:      {}\n", top));
    }

    if !projection.outstanding_bills.is_empty() {
        output.push_str("\nBills due before payday:\n");
        for bill in &projection.outstanding_bills {
            output.push_str(&format!(
                "  {} {:20} {:>12}\n",
                bill.due_on.format(&settings.date_format),
                bill.name,
                money(bill.amount)
            ));
        }
    }

    if !projection.paid_bills.is_empty() {
        output.push_str("\nBills already paid:\n");
        for paid in &projection.paid_bills {
            output.push_str(&format!(
                "  {} {:20} {:>12}\n",
                paid.paid_on.format(&settings.date_format),
                paid.occurrence.name,
                money(paid.occurrence.amount)
            ));
        }
    }

    let over: Vec<_> = projection.budget_status.over_budget().collect();
    let near: Vec<_> = projection
        .budget_status
        .near_limit(settings.near_limit_percent)
        .collect();
    if !over.is_empty() || !near.is_empty() {
        output.push_str("\nBudget alerts:\n");
        for line in over {
            output.push_str(&format!(
                "  {} is over by {}\n",
                line.category,
                money(-line.remaining)
            ));
        }
        for line in near {
            output.push_str(&format!(
                "  {} is at {}% of its limit\n",
                line.category, line.percent_used
            ));
        }
    }

    output
}
