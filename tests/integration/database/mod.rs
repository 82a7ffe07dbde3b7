//! Postgres store tests

pub mod pg_store_test;
