//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `HandoffWorkflow` which acts as the primary
//! entry point for payment session handoffs. Its mutable state is owned
//! by a single task; the deep-link callback arrives as an event, not as
//! a continuation of the submitting call.

pub mod workflow;
