//! Modelos de datos del sistema

pub mod driver;

pub use driver::Driver;
