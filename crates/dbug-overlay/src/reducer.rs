use crate::actions::Action;
use crate::state::{AppState, MAX_PRECISION};

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    let config = &mut state.config;

    match action {
        Action::Quit => {
            state.running = false;
        }
        Action::ToggleEnabled => {
            config.enabled = !config.enabled;
            log::info!("Overlay enabled: {}", config.enabled);
        }
        Action::ToggleNames => {
            config.show_names = !config.show_names;
        }
        Action::FloatPrecisionUp => {
            config.float_precision = (config.float_precision + 1).min(MAX_PRECISION);
        }
        Action::FloatPrecisionDown => {
            config.float_precision = config.float_precision.saturating_sub(1);
        }
        Action::VectorPrecisionUp => {
            config.vector_precision = (config.vector_precision + 1).min(MAX_PRECISION);
        }
        Action::VectorPrecisionDown => {
            config.vector_precision = config.vector_precision.saturating_sub(1);
        }
        Action::Tick => {
            state.frame += 1;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Quit);
        assert!(!state.running);
    }

    #[test]
    fn test_toggles() {
        let state = reduce(AppState::default(), &Action::ToggleEnabled);
        assert!(!state.config.enabled);
        let state = reduce(state, &Action::ToggleNames);
        assert!(!state.config.show_names);
        let state = reduce(state, &Action::ToggleEnabled);
        assert!(state.config.enabled);
    }

    #[test]
    fn test_precision_is_bounded() {
        let mut state = AppState::default();
        for _ in 0..10 {
            state = reduce(state, &Action::FloatPrecisionDown);
            state = reduce(state, &Action::VectorPrecisionUp);
        }
        assert_eq!(state.config.float_precision, 0);
        assert_eq!(state.config.vector_precision, MAX_PRECISION);
    }

    #[test]
    fn test_tick_counts_frames() {
        let state = reduce(AppState::default(), &Action::Tick);
        let state = reduce(state, &Action::Tick);
        assert_eq!(state.frame, 2);
    }
}
