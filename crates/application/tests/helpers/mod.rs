#![allow(dead_code)]

pub mod fixtures;
pub mod mock_ports;

#[allow(unused_imports)]
pub use mock_ports::{MemoryResultSink, MockDeviceCommandSource, MockNameResolver};
