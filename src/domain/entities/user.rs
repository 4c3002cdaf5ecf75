//! User accounts.

use serde::{Deserialize, Serialize};

/// A registered user. The email doubles as the account identifier.
///
/// `GET /users?email=` answers with name and surname only, so `email`
/// defaults to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /users/register/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
}
