//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use archgraph_analysis::features::type_repository::{InMemoryTypeRepository, TypeRepository};

/// `{A:[B,C], B:[D], C:[], D:[A]}` with C living in `pkg.other`
pub fn scenario_repository() -> Arc<dyn TypeRepository> {
    Arc::new(InMemoryTypeRepository::from_edges([
        ("pkg.A", vec!["pkg.B", "pkg.other.C"]),
        ("pkg.B", vec!["pkg.D"]),
        ("pkg.other.C", vec![]),
        ("pkg.D", vec!["pkg.A"]),
    ]))
}

/// Two-node cycle `A ⇄ B`
pub fn cycle_repository() -> Arc<dyn TypeRepository> {
    Arc::new(InMemoryTypeRepository::from_edges([
        ("pkg.A", vec!["pkg.B"]),
        ("pkg.B", vec!["pkg.A"]),
    ]))
}

/// A small banking application with controllers, mappers and a shared util
pub fn banking_repository() -> Arc<dyn TypeRepository> {
    let mut builder = InMemoryTypeRepository::builder();
    builder
        .add_references(
            "com.bank.accounts.AccountsController",
            [
                "com.bank.accounts.AccountMapper",
                "com.bank.accounts.AccountDao",
                "com.bank.util.Json",
            ],
        )
        .add_references(
            "com.bank.accounts.AccountDao",
            ["com.bank.accounts.AccountRow", "com.bank.payments.PaymentsController"],
        )
        .add_references(
            "com.bank.payments.PaymentsController",
            ["com.bank.payments.PaymentGateway", "com.bank.util.Json"],
        )
        .add_annotation("com.bank.accounts.AccountDao", "Repository");
    Arc::new(builder.build())
}

pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
