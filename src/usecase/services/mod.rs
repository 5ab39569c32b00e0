pub mod flight_service;
