//! Fuel system model library.
//!
//! Sensors hold the last reading for one physical quantity; control units
//! turn their inputs into a [`control::Decision`].  The [`app`] core wires
//! the two together and reports through port traits implemented in
//! [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod sensors;
