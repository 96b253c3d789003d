//! Registration Flow - Interactive console registration
//!
//! This crate collects a person's name and date of birth over a
//! line-oriented console, validates both, and reports the resulting age.
//! A small state machine sequences the prompts; each prompt has a bounded
//! retry budget and exhaustion restarts the registration.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
