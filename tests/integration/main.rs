//! Integration tests

mod e2e_test;
mod odds_test;
mod pricing_test;
