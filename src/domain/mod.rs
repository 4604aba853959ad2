//! Domain layer: value types and the pure rules of amounts and payout methods.
//!
//! Nothing in here performs I/O; remote collaborators are reached through the
//! traits in [`ports`].

pub mod account;
pub mod amount;
pub mod contact;
pub mod currency;
pub mod filters;
pub mod options;
pub mod payout_method;
pub mod ports;
