//! Application layer: the stateful form components built on the domain rules.
//!
//! Each component owns its derived state and recomputes it from its inputs.
//! Remote calls go through the domain ports and are guarded so that only one
//! submission per component is in flight.

pub mod amount_input;
pub mod contact_form;
pub mod guard;
pub mod payout_method_select;
