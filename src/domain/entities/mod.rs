//! Records exchanged with the registration backend.
//!
//! The client never owns these entities: it decodes server copies for display
//! and encodes creation requests. Creation bodies are separate types
//! (`NewDomain`, `NewUser`, `NewOrder`) because the backend expects different
//! key spellings on the way in.
//!
//! # Entity Types
//!
//! - [`DomainRecord`] - A registered domain and its owner
//! - [`User`] - An account, identified by email
//! - [`Order`] - A billing record for a registration or renewal

pub mod domain;
pub mod order;
pub mod user;

pub use domain::{DomainRecord, NewDomain};
pub use order::{NewOrder, Order, OrderType, format_cost};
pub use user::{NewUser, User};
