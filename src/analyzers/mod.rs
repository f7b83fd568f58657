pub mod aggregator;
pub mod intersector;
pub mod time_format;
