//! Adapters behind the domain ports: the HTTP payment API, device
//! metadata collection, and the universal-link opener.

pub mod device;
pub mod error_map;
pub mod http;
pub mod opener;
