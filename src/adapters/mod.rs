//! Adapters - Implementations of ports and transport surfaces.

pub mod csv;
pub mod email;
pub mod http;
