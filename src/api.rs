//! HTTP surface: page, send, static assets

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;

use crate::llm::CompletionGateway;
use crate::render::Renderer;
use crate::transcript::Transcript;
use std::sync::Arc;

/// Application state shared across handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn CompletionGateway>,
    pub renderer: Arc<Renderer>,
    /// Transcript each new page view starts from
    pub seed: Arc<Transcript>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CompletionGateway>, renderer: Renderer, seed: Transcript) -> Self {
        Self {
            gateway,
            renderer: Arc::new(renderer),
            seed: Arc::new(seed),
        }
    }
}
