//! Country list screen state: MVI state/intent/reducer plus the store that
//! owns fetching and publishes observable fields.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::CountriesIntent;
pub use reducer::{CountriesReducer, UNKNOWN_ERROR};
pub use state::CountriesState;
pub use store::{CountryStore, StoreWaker};
