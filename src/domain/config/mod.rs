pub mod pinata;
pub mod secrets;
