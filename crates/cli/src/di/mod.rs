mod devices;
mod use_cases;

pub use devices::Devices;
pub use use_cases::UseCases;
