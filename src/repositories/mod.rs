pub mod driver_repository;
