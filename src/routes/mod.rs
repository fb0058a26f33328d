pub mod driver_routes;
