#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal expense tracker built around a single add/edit/delete expense form.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod storage;
pub mod tui;
