pub mod config_validation;
