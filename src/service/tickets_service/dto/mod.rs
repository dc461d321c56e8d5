mod tickets_service_config;

pub use tickets_service_config::*;
