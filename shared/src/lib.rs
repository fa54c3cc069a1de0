//! Wire types shared between the CRM domain layer and the web frontend.
//!
//! Records mirror what the REST API returns (every field defaulted so partial
//! responses still decode); payloads mirror what it accepts on create/update.

mod choices;
mod config;
mod contacts;
mod donations;
mod fundraising;
mod inventory;
mod listing;
mod projects;
mod volunteers;

pub use choices::*;
pub use config::DisplayConfig;
pub use contacts::*;
pub use donations::*;
pub use fundraising::*;
pub use inventory::*;
pub use listing::*;
pub use projects::*;
pub use volunteers::*;

pub use rust_decimal::Decimal;
