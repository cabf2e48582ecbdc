//! # Storefront Sample Application
//!
//! A small storefront built on mapchain's containers.
//!
//! ## Overview
//!
//! - `locale`: resolves a user's index page from their preferred language
//!   with `Optional`, binding the URL table through `curry2!`
//! - `pricing`: prices catalogue items through a discount-then-tax
//!   pipeline with `Outcome`, reporting each item exactly once
//!
//! ## Module Structure
//!
//! - `catalog`: catalogue items and user documents (JSON)
//! - `config`: configuration loaded from the environment
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod pricing;
