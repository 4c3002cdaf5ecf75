//! What a flow hands back to the front end: a notice to show and/or a page to open.

use crate::application::messages::MessageKey;

/// Severity of a notice, used only for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub key: MessageKey,
    pub text: String,
}

impl Notice {
    /// A fixed message. The level follows from the key.
    pub fn from_key(key: MessageKey) -> Self {
        let level = match key {
            MessageKey::DomainAvailable | MessageKey::SignupComplete => NoticeLevel::Success,
            MessageKey::DomainAlreadyRegistered | MessageKey::RegistrationInProgress => {
                NoticeLevel::Warning
            }
            _ => NoticeLevel::Error,
        };
        Self {
            level,
            key,
            text: key.text().to_string(),
        }
    }

    /// A message composed at runtime, still tagged with the key it stands for.
    pub fn composed(level: NoticeLevel, key: MessageKey, text: impl Into<String>) -> Self {
        Self {
            level,
            key,
            text: text.into(),
        }
    }
}

/// Handoff from the domain listing to the renewal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalContext {
    pub domain: String,
}

impl RenewalContext {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

/// The pages of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Auth,
    Main,
    RegisterDomain,
    RenewDomain(RenewalContext),
}

/// Result of one user action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowOutcome {
    pub notice: Option<Notice>,
    pub next: Option<Page>,
}

impl FlowOutcome {
    pub fn notify(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            next: None,
        }
    }

    pub fn message(key: MessageKey) -> Self {
        Self::notify(Notice::from_key(key))
    }

    pub fn navigate(page: Page) -> Self {
        Self {
            notice: None,
            next: Some(page),
        }
    }

    /// The message key of the notice, if any.
    pub fn key(&self) -> Option<MessageKey> {
        self.notice.as_ref().map(|n| n.key)
    }
}
