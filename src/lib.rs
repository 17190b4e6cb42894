pub mod domain;
pub mod err_context;
pub mod services;
pub mod settings;
pub mod telemetry;
pub mod workflow;
