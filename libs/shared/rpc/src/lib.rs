//! Typed client for the clinic service's RPC endpoint.
//!
//! The clinic service owns persistence, conflict detection and
//! authorization. This crate only knows the procedure names, the wire
//! records and the `{"result":{"data":...}}` envelope.

pub mod client;
pub mod error;
pub mod procedures;
pub mod records;

pub use client::ClinicRpcClient;
pub use error::RpcError;
pub use records::*;
