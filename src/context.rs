//! Application Context
//!
//! Configuration and service handles provided via Leptos Context API.

use board_core::{BoardConfig, Gate, GeminiGenerator, JsonBlobClient, PolishAdapter};
use leptos::prelude::*;

/// App-wide configuration and service constructors
#[derive(Clone, Debug)]
pub struct BoardContext {
    pub config: BoardConfig,
    gate: Gate,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        let gate = Gate::new(config.shared_secret.clone());
        Self { config, gate }
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Remote document store client
    pub fn remote(&self) -> JsonBlobClient {
        JsonBlobClient::new(self.config.api_base.clone())
    }

    pub fn polisher(&self) -> PolishAdapter<GeminiGenerator> {
        PolishAdapter::from_config(&self.config.polish)
    }

    pub fn polish_enabled(&self) -> bool {
        self.config.polish.is_enabled()
    }
}

pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
