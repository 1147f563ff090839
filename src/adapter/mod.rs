//! Adapters around the interpretation core.

pub mod inbound;
