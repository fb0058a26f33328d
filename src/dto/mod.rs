pub mod driver_dto;
pub mod driver_payload;

pub use driver_dto::*;
pub use driver_payload::DriverPayload;
