use std::sync::Arc;

use crate::canvas::CanvasClient;

#[derive(Clone)]
pub struct AppState {
    pub canvas: Arc<dyn CanvasClient>,
}
