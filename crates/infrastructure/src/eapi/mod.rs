//! Device command source speaking the EOS command API (JSON-RPC over HTTPS).

pub mod client;
mod rpc;

pub use client::EapiClient;
