pub mod credential_controller;
pub mod health_controller;
