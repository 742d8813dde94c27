pub mod error;
pub mod gate;
pub mod models;
pub mod pricing;
pub mod selection;
pub mod viewport;
