pub mod dataset;
pub mod health_route;
pub mod query;
