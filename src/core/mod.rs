pub mod alerts;
pub mod config;
pub mod monitors;
pub mod scheduler;

#[cfg(test)]
mod sim_test;
