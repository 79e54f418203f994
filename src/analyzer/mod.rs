//! Rule engine for validating project version changes

pub mod version_rules;

pub use version_rules::{evaluate, CheckOutcome, RuleViolation};
