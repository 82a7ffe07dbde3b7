//! Property-based tests

pub mod token_proptest;
