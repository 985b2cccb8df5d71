use crate::country::Country;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CountriesIntent {
    /// A fetch has been started.
    Refresh,
    /// The latest fetch returned a list.
    Loaded { countries: Vec<Country> },
    /// The latest fetch failed with this description.
    Failed { description: String },
}

impl Intent for CountriesIntent {}
