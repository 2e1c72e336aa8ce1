mod health_tests;
mod location_tests;
mod rate_limit_tests;
mod route_tests;
