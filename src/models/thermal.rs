//! Thermal systems models.

pub mod hx;
