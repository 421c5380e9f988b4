//! Small shared utilities.

pub mod join_code;
