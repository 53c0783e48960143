//! State of the control that triggers each flow.

/// The two fetch-render pipelines of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Twelve-month forecast (`predictBtn`, optional CSV upload)
    Forecast,
    /// Single-month prediction (`predictForm`)
    Month,
}

pub const LOADING_LABEL: &str = "Predicting…";

impl Flow {
    /// Label of the trigger control while idle.
    pub fn idle_label(&self) -> &'static str {
        match self {
            Flow::Forecast => "Predict Next 12 Months",
            Flow::Month => "Predict",
        }
    }

    pub fn label(&self, state: UiState) -> &'static str {
        match state {
            UiState::Idle => self.idle_label(),
            UiState::Loading => LOADING_LABEL,
        }
    }
}

/// Entering `Loading` disables the trigger and relabels it; returning to
/// `Idle` re-enables it with its original label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Whether the trigger control accepts input.
    pub fn is_enabled(&self) -> bool {
        !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Flow::Forecast.label(UiState::Idle), "Predict Next 12 Months");
        assert_eq!(Flow::Forecast.label(UiState::Loading), "Predicting…");
        assert_eq!(Flow::Month.label(UiState::Idle), "Predict");
        assert_eq!(Flow::Month.label(UiState::Loading), LOADING_LABEL);
    }

    #[test]
    fn test_default_is_idle_and_enabled() {
        let state = UiState::default();
        assert_eq!(state, UiState::Idle);
        assert!(state.is_enabled());
        assert!(UiState::Loading.is_loading());
        assert!(!UiState::Loading.is_enabled());
    }
}
