//! Shared primitive types used across the back-office core.

/// Tenant scope. Every ledger row belongs to exactly one firm.
pub type FirmId = String;

/// A stable, unique identifier for any stored row.
pub type EntityId = String;

/// A currency amount. Non-negative on every ledger row.
pub type Money = f64;
