//! Core domain types and pure logic: environment configuration, wire
//! models, input validation, launch-link construction, and callback
//! parsing. Nothing in this layer performs I/O.

pub mod deep_link;
pub mod environment;
pub mod link;
pub mod ports;
pub mod session;
pub mod validation;
