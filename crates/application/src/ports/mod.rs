mod device_command_source;
mod name_resolver;
mod result_sink;

pub use device_command_source::DeviceCommandSource;
pub use name_resolver::NameResolver;
pub use result_sink::ResultSink;
