//! Shared test helpers for `daybook-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! reconciliation tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod feed;
pub mod records;
