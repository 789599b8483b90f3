//! Hostlist Application Layer
pub mod device_output;
pub mod ports;
pub mod services;
pub mod use_cases;
