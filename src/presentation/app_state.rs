// Application state for HTTP handlers
use crate::application::scheduler::ManualRefresh;
use crate::presentation::view::DashboardView;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<DashboardView>,
    pub manual_refresh: mpsc::Sender<ManualRefresh>,
}
