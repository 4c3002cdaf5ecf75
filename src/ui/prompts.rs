//! Interactive forms built on `dialoguer`.

use crate::application::services::{AccessMode, DomainRow, cost_preview};
use crate::domain::entities::NewUser;
use crate::domain::payment::{DURATION_YEARS, PaymentCard};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Choices on the access page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    Submit,
    Toggle,
    Quit,
}

/// Choices on the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    CheckAvailability,
    RegisterDomain,
    RenewDomain,
    Refresh,
    Quit,
}

pub fn access_menu(mode: AccessMode) -> Result<AccessAction> {
    let (submit, toggle) = match mode {
        AccessMode::Login => ("Log in", "I don't have an account: sign up"),
        AccessMode::Register => ("Sign up", "I already have an account: log in"),
    };
    let index = Select::new()
        .with_prompt("What next?")
        .items(&[submit, toggle, "Quit"])
        .default(0)
        .interact()?;

    Ok(match index {
        0 => AccessAction::Submit,
        1 => AccessAction::Toggle,
        _ => AccessAction::Quit,
    })
}

pub fn main_menu(can_renew: bool) -> Result<MainAction> {
    let mut actions = vec![
        (MainAction::CheckAvailability, "Check domain availability"),
        (MainAction::RegisterDomain, "Register a new domain"),
    ];
    if can_renew {
        actions.push((MainAction::RenewDomain, "Renew one of my domains"));
    }
    actions.push((MainAction::Refresh, "Refresh"));
    actions.push((MainAction::Quit, "Quit"));

    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[index].0)
}

pub fn sign_up_form() -> Result<NewUser> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let surname: String = Input::new().with_prompt("Surname").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;

    Ok(NewUser {
        name,
        surname,
        email,
    })
}

pub fn login_form() -> Result<String> {
    Ok(Input::new().with_prompt("Email").interact_text()?)
}

pub fn domain_input() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Domain")
        .interact_text()?
        .trim()
        .to_string())
}

/// Label of one entry of the duration picker, e.g. `3 years (Cost: 30€)`.
pub fn duration_label(years: u32) -> String {
    let unit = if years == 1 { "year" } else { "years" };
    format!("{years} {unit} ({})", cost_preview(years))
}

pub fn duration_select() -> Result<u32> {
    let choices: Vec<u32> = DURATION_YEARS.collect();
    let labels: Vec<String> = choices.iter().map(|&y| duration_label(y)).collect();
    let index = Select::new()
        .with_prompt("Duration")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(choices[index])
}

pub fn card_form() -> Result<PaymentCard> {
    let number: String = Input::new().with_prompt("Card number").interact_text()?;
    let expiry: String = Input::new()
        .with_prompt("Expiry (YYYY-MM or YYYY-MM-DD)")
        .interact_text()?;
    let cvv: String = Input::new().with_prompt("CVV").interact_text()?;

    Ok(PaymentCard::new(number.trim(), expiry.trim(), cvv.trim()))
}

/// Picks one of the renewable domains. `None` when the user backs out.
pub fn renewal_select(rows: &[&DomainRow]) -> Result<Option<usize>> {
    let mut labels: Vec<String> = rows
        .iter()
        .map(|row| format!("{} (expires {})", row.record.name, row.record.expire_date))
        .collect();
    labels.push("Back".to_string());

    let index = Select::new()
        .with_prompt("Domain to renew")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok((index < rows.len()).then_some(index))
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}
