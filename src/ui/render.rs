//! Terminal rendering of notices and tables.

use crate::application::outcome::{Notice, NoticeLevel};
use crate::application::services::DomainRow;
use crate::domain::entities::{Order, User};
use colored::*;

/// Formats a notice the way the pages show it: a marker line, then the text.
pub fn format_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Success => "✅".green(),
        NoticeLevel::Warning => "⚠️ ".yellow(),
        NoticeLevel::Error => "❌".red(),
    };
    let text = match notice.level {
        NoticeLevel::Success => notice.text.green().bold(),
        NoticeLevel::Warning => notice.text.yellow(),
        NoticeLevel::Error => notice.text.red().bold(),
    };
    format!("{marker} {text}")
}

pub fn print_notice(notice: &Notice) {
    println!();
    println!("{}", format_notice(notice));
    println!();
}

pub fn format_user(user: &User) -> String {
    format!(
        "  Name:    {}\n  Surname: {}\n  Email:   {}",
        user.name.cyan(),
        user.surname.cyan(),
        user.email.cyan()
    )
}

/// Domain table of the main page.
///
/// ```text
///   Domain                         Registered   Expires      Actions
///   ───────────────────────────────────────────────────────────────────
///   example.com                    2024-01-15   2027-01-15   renewable
/// ```
pub fn format_domain_table(rows: &[DomainRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<30} {:<12} {:<12} {}\n",
        "Domain".bright_white().bold(),
        "Registered".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Actions".bright_white().bold()
    ));
    out.push_str(&format!("  {}\n", "─".repeat(67).bright_black()));

    if rows.is_empty() {
        out.push_str(&format!("  {}\n", "No domains yet".yellow()));
        return out;
    }

    for row in rows {
        let registered = row
            .record
            .registration_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let action = if row.renewable {
            "renewable".green()
        } else {
            "expired".bright_black()
        };
        out.push_str(&format!(
            "  {:<30} {:<12} {:<12} {}\n",
            row.record.name.cyan(),
            registered,
            row.record.expire_date.to_string(),
            action
        ));
    }
    out
}

/// Order table of the main page. Costs carry the euro sign.
pub fn format_order_table(orders: &[Order]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<30} {:<12} {:<10} {}\n",
        "Domain".bright_white().bold(),
        "Date".bright_white().bold(),
        "Type".bright_white().bold(),
        "Cost".bright_white().bold()
    ));
    out.push_str(&format!("  {}\n", "─".repeat(67).bright_black()));

    if orders.is_empty() {
        out.push_str(&format!("  {}\n", "No orders yet".yellow()));
        return out;
    }

    for order in orders {
        out.push_str(&format!(
            "  {:<30} {:<12} {:<10} {}\n",
            order.domain.cyan(),
            order.date.to_string(),
            order.order_type.to_string(),
            order.display_cost().bright_green()
        ));
    }
    out
}
