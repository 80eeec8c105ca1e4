#[cfg(test)]
pub mod common;
pub mod examples;
pub mod income_operations;
