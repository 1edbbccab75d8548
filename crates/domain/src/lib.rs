//! # generik-domain
//!
//! Pure domain model for the generik links dashboard.
//!
//! ## Responsibilities
//! - Define **service entries** (name, URL, category) and their invariants
//! - Define the raw **catalog row** read from storage, before validation
//! - Group entries into **categories** in first-seen order
//! - Define **presentation settings** (theme, icon set, trusted markup)
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod catalog;
pub mod presentation;
pub mod service;
