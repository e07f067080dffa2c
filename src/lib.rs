pub mod core {
    pub mod config;
    pub mod console;
    pub mod error;
    pub mod portal;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod stores;
pub mod utils;
pub mod validation;
