pub mod conf;
pub mod stats;
