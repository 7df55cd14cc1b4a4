//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CodeListService;
use crate::domain::repositories::CodeListRepository;

/// Cloneable handle to the services the handlers use.
#[derive(Clone)]
pub struct AppState {
    pub code_list_service: Arc<CodeListService<dyn CodeListRepository>>,
}

impl AppState {
    pub fn new(code_list_service: Arc<CodeListService<dyn CodeListRepository>>) -> Self {
        Self { code_list_service }
    }
}
