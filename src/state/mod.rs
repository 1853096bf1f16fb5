pub(crate) mod dashboard;

use crate::api::ApiClient;
use leptos::prelude::*;

pub(crate) use dashboard::{DashboardMsg, DashboardStore, DisplayMode};

/// App-wide state. Collections live in the page that owns them
/// (see `DashboardStore`); only the API client is shared.
#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
