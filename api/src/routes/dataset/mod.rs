pub mod dataset_route;
