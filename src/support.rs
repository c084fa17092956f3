//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric invariants.
//! - [`hx`]: LMTD sizing relations and validated stream properties.
//! - [`lambert_w`]: Real lower branch of the Lambert W function.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod lambert_w;
pub mod units;
