//! Event types and observers.
//!
//! Submodules:
//! - [`contact`] – raised whenever a mover is snapped against an obstacle
pub mod contact;
