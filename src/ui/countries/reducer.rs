use crate::ui::countries::intent::CountriesIntent;
use crate::ui::countries::state::CountriesState;
use crate::ui::mvi::Reducer;

/// Shown when a failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub struct CountriesReducer;

impl Reducer for CountriesReducer {
    type State = CountriesState;
    type Intent = CountriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountriesIntent::Refresh => CountriesState {
                loading: true,
                ..state
            },
            CountriesIntent::Loaded { countries } => CountriesState {
                countries,
                error_message: None,
                loading: false,
            },
            CountriesIntent::Failed { description } => {
                let message = if description.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    description
                };
                CountriesState {
                    countries: Vec::new(),
                    error_message: Some(message),
                    loading: false,
                }
            }
        }
    }
}
