use crate::country::Country;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountriesState {
    pub countries: Vec<Country>,
    pub error_message: Option<String>,
    /// A fetch is in flight.
    pub loading: bool,
}

impl UiState for CountriesState {}
