//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `ChargeService` which acts as the primary entry
//! point for turning charge records into PIX payloads. It resolves the PIX
//! key and beneficiary name against the injected configuration store.

pub mod service;
