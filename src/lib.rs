//! srpcalc — single-responsibility integer calculator (library crate).
//!
//! [`calc::Calc`] does the arithmetic. The remaining modules parse,
//! configure and render around it.

pub mod calc;
pub mod config;
pub mod constants;
pub mod env;
pub mod eval;
pub mod models;
pub mod output;
