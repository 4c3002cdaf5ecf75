//! The four pages of the interactive shell.
//!
//! Each page runs until the user leaves it and returns the page to open next,
//! or `None` to quit.

use crate::application::outcome::{FlowOutcome, Page, RenewalContext};
use crate::application::services::{AuthForms, DomainPurchase, RenewalRequest};
use crate::state::AppState;
use crate::ui::prompts::{self, AccessAction, MainAction};
use crate::ui::render;
use anyhow::Result;
use colored::*;

pub async fn show(state: &AppState, page: Page) -> Result<Option<Page>> {
    tracing::debug!(?page, "opening page");
    match page {
        Page::Auth => auth_page(state).await,
        Page::Main => main_page(state).await,
        Page::RegisterDomain => register_page(state).await,
        Page::RenewDomain(context) => renew_page(state, context).await,
    }
}

/// Prints the notice of `outcome`, if any, and hands back its navigation.
pub fn present(outcome: FlowOutcome) -> Option<Page> {
    if let Some(notice) = &outcome.notice {
        render::print_notice(notice);
    }
    outcome.next
}

async fn auth_page(state: &AppState) -> Result<Option<Page>> {
    let auth = state.auth();
    let mut forms = AuthForms::default();

    loop {
        println!();
        if forms.login_visible() {
            println!("{}", "🔐 Log in".bright_blue().bold());
        } else {
            println!("{}", "📝 Sign up".bright_blue().bold());
        }

        match prompts::access_menu(forms.mode())? {
            AccessAction::Quit => return Ok(None),
            AccessAction::Toggle => forms.toggle(),
            AccessAction::Submit if forms.register_visible() => {
                let new_user = prompts::sign_up_form()?;
                let outcome = auth.sign_up(new_user).await;
                forms.follow(&outcome);
                present(outcome);
            }
            AccessAction::Submit => {
                let email = prompts::login_form()?;
                if let Some(next) = present(auth.login(&email).await) {
                    return Ok(Some(next));
                }
            }
        }
    }
}

async fn main_page(state: &AppState) -> Result<Option<Page>> {
    let dashboard_service = state.dashboard();
    let availability = state.availability();

    loop {
        let dashboard = dashboard_service.load().await;

        println!();
        println!("{}", "🌐 My domains".bright_blue().bold());
        print!("{}", render::format_domain_table(&dashboard.domains));
        println!();
        println!("{}", "🧾 My orders".bright_blue().bold());
        print!("{}", render::format_order_table(&dashboard.orders));
        for notice in &dashboard.notices {
            render::print_notice(notice);
        }

        let renewable: Vec<_> = dashboard.renewable().collect();
        match prompts::main_menu(!renewable.is_empty())? {
            MainAction::Quit => return Ok(None),
            MainAction::Refresh => continue,
            MainAction::RegisterDomain => return Ok(Some(Page::RegisterDomain)),
            MainAction::CheckAvailability => {
                let domain = prompts::domain_input()?;
                if let Some(next) = present(availability.check(&domain).await) {
                    return Ok(Some(next));
                }
            }
            MainAction::RenewDomain => {
                let Some(index) = prompts::renewal_select(&renewable)? else {
                    continue;
                };
                if let Some(outcome) = dashboard_service.open_renewal(renewable[index]) {
                    return Ok(present(outcome));
                }
            }
        }
    }
}

async fn register_page(state: &AppState) -> Result<Option<Page>> {
    let registration = state.registration();

    println!();
    println!("{}", "🆕 Register a new domain".bright_blue().bold());

    let user = match registration.prefill().await {
        Ok(user) => user,
        Err(outcome) => return Ok(Some(present(outcome).unwrap_or(Page::Main))),
    };
    println!("{}", render::format_user(&user));
    println!();

    loop {
        let domain = prompts::domain_input()?;
        let years = prompts::duration_select()?;
        let card = prompts::card_form()?;

        let purchase = DomainPurchase {
            domain,
            years,
            owner_email: user.email.clone(),
            card,
        };
        if let Some(next) = present(registration.register(purchase).await) {
            return Ok(Some(next));
        }

        if !prompts::confirm("Try again?")? {
            return Ok(Some(Page::Main));
        }
    }
}

async fn renew_page(state: &AppState, context: RenewalContext) -> Result<Option<Page>> {
    let renewal = state.renewal(context);

    println!();
    println!(
        "{} {}",
        "🔁 Renew".bright_blue().bold(),
        renewal.domain().cyan().bold()
    );

    let user = match renewal.prefill().await {
        Ok(user) => user,
        Err(outcome) => return Ok(Some(present(outcome).unwrap_or(Page::Main))),
    };
    println!("{}", render::format_user(&user));
    println!();

    loop {
        let years = prompts::duration_select()?;
        let card = prompts::card_form()?;

        if let Some(next) = present(renewal.renew(RenewalRequest { years, card }).await) {
            return Ok(Some(next));
        }

        if !prompts::confirm("Try again?")? {
            return Ok(Some(Page::Main));
        }
    }
}
