pub mod driver_controller;
