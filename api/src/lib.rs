pub mod configuration;
pub mod domain;
pub mod refresh;
pub mod routes;
pub mod startup;
pub mod template;
pub mod utils;
