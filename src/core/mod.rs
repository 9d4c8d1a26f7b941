pub mod context;
pub mod paths;
