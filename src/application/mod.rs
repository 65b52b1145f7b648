// Application layer - Refresh pipeline and its collaborators
pub mod dashboard_controller;
pub mod data_source;
pub mod scheduler;
pub mod views;

#[cfg(test)]
pub mod mock;
