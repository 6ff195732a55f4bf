use dbug_config::OverlayConfig;

/// Upper bound for the precision keys
pub const MAX_PRECISION: usize = 6;

/// Host state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Live overlay configuration, edited by key presses
    pub config: OverlayConfig,
    /// Ticks run so far
    pub frame: u64,
}

impl AppState {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            running: true,
            config,
            frame: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}
