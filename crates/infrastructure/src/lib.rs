//! Hostlist Infrastructure Layer
pub mod eapi;
pub mod output;
pub mod system;
