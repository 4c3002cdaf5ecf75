//! User-facing messages and the status-code tables that select them.
//!
//! Every flow answers a backend status by looking it up in one of the tables
//! below instead of branching on codes itself.

use reqwest::StatusCode;

/// Identifier of a fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Local validation
    InvalidTld,
    CardExpired,
    CvvLength,
    CardNumberLength,
    RenewalTooFar,
    InvalidDuration,

    // Availability
    DomainAvailable,
    DomainAlreadyRegistered,
    MalformedRequest,
    NotAuthenticated,
    RegistrationInProgress,
    DatabaseUnavailable,

    // Domain purchase
    ConcurrentPurchase,
    PurchaseFailed,
    DomainNotFound,
    RenewalFailed,

    // Accounts
    SignupComplete,
    SignupIncomplete,
    SignupFailed,
    ServerError,
    InvalidEmail,
    LoginDatabaseError,

    // Transport
    ConnectionFailed,
    UnknownError,
}

impl MessageKey {
    pub fn text(self) -> &'static str {
        match self {
            MessageKey::InvalidTld => "The domain does not have a valid TLD!",
            MessageKey::CardExpired => {
                "The credit card expiry date is invalid or earlier than today."
            }
            MessageKey::CvvLength => "The CVV must be 3 digits.",
            MessageKey::CardNumberLength => "The credit card number must be 16 digits.",
            MessageKey::RenewalTooFar => {
                "The renewal date cannot be more than 10 years after today!"
            }
            MessageKey::InvalidDuration => "The duration must be between 1 and 10 years.",
            MessageKey::DomainAvailable => "is available for registration",
            MessageKey::DomainAlreadyRegistered => "The domain is already registered",
            MessageKey::MalformedRequest => "The client request is malformed",
            MessageKey::NotAuthenticated => "The user is not authenticated",
            MessageKey::RegistrationInProgress => {
                "The domain is currently being registered by another user"
            }
            MessageKey::DatabaseUnavailable => "There was a problem with the database",
            MessageKey::ConcurrentPurchase => "Someone else is buying this domain.",
            MessageKey::PurchaseFailed => "Something went wrong. Try again later!",
            MessageKey::DomainNotFound => "Domain not found!",
            MessageKey::RenewalFailed => "Error while renewing!",
            MessageKey::SignupComplete => "Registration complete! You can now log in",
            MessageKey::SignupIncomplete => "The registration data is incomplete or invalid",
            MessageKey::SignupFailed => "Error during registration!",
            MessageKey::ServerError => "A server-side error occurred",
            MessageKey::InvalidEmail => "Incorrect email",
            MessageKey::LoginDatabaseError => "An error occurred with the database",
            MessageKey::ConnectionFailed => "Could not reach the server",
            MessageKey::UnknownError => "Unknown error",
        }
    }
}

/// Maps status codes to messages, with a fallback for anything unlisted.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    entries: &'static [(u16, MessageKey)],
    fallback: MessageKey,
}

impl StatusTable {
    pub const fn new(entries: &'static [(u16, MessageKey)], fallback: MessageKey) -> Self {
        Self { entries, fallback }
    }

    pub fn lookup(&self, status: StatusCode) -> MessageKey {
        self.entries
            .iter()
            .find(|(code, _)| *code == status.as_u16())
            .map(|(_, key)| *key)
            .unwrap_or(self.fallback)
    }
}

/// `GET /domains/isAvailable` outcomes, shared by the checker and the
/// registration re-check.
pub const AVAILABILITY: StatusTable = StatusTable::new(
    &[
        (204, MessageKey::DomainAvailable),
        (200, MessageKey::DomainAlreadyRegistered),
        (400, MessageKey::MalformedRequest),
        (401, MessageKey::NotAuthenticated),
        (409, MessageKey::RegistrationInProgress),
        (503, MessageKey::DatabaseUnavailable),
    ],
    MessageKey::UnknownError,
);

/// `POST /domains/` outcomes.
pub const DOMAIN_CREATION: StatusTable = StatusTable::new(
    &[(409, MessageKey::ConcurrentPurchase)],
    MessageKey::PurchaseFailed,
);

/// `GET /domains/{name}` outcomes before a renewal.
pub const DOMAIN_LOOKUP: StatusTable = StatusTable::new(
    &[(404, MessageKey::DomainNotFound)],
    MessageKey::RenewalFailed,
);

/// `POST /users/register/` outcomes.
pub const SIGNUP: StatusTable = StatusTable::new(
    &[
        (201, MessageKey::SignupComplete),
        (400, MessageKey::SignupIncomplete),
        (409, MessageKey::SignupFailed),
        (500, MessageKey::ServerError),
        (503, MessageKey::DatabaseUnavailable),
    ],
    MessageKey::UnknownError,
);

/// `GET /users/login` outcomes.
pub const LOGIN: StatusTable = StatusTable::new(
    &[
        (401, MessageKey::InvalidEmail),
        (503, MessageKey::LoginDatabaseError),
    ],
    MessageKey::UnknownError,
);
