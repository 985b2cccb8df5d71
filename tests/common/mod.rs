//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use country_list::client::{CountryClient, CountrySource, FetchError};
use country_list::country::Country;
use country_list::repository::CountryRepository;
use country_list::ui::app::App;
use country_list::ui::countries::{CountryStore, StoreWaker};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use reqwest::{StatusCode, Url};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{oneshot, Notify};

use mock_backend::MockBackend;

pub fn country(name: &str, region: &str, code: &str, capital: &str) -> Country {
    Country {
        name: Some(name.to_string()),
        region: Some(region.to_string()),
        code: Some(code.to_string()),
        capital: Some(capital.to_string()),
    }
}

pub fn peru() -> Country {
    country("Peru", "Americas", "PE", "Lima")
}

pub fn chile() -> Country {
    country("Chile", "Americas", "CL", "Santiago")
}

pub fn client_for(backend: &MockBackend) -> CountryClient {
    CountryClient::new(
        Url::parse(&backend.countries_url()).unwrap(),
        Duration::from_secs(5),
        Duration::from_secs(2),
    )
    .expect("Failed to build client")
}

// -- Scripted sources ---------------------------------------------------------

/// One scripted answer. A gated step waits for its sender before answering.
pub struct Step {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<Vec<Country>, FetchError>,
}

impl Step {
    pub fn ok(countries: Vec<Country>) -> Self {
        Self {
            gate: None,
            result: Ok(countries),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            gate: None,
            result: Err(FetchError::Protocol { status }),
        }
    }

    /// Step that answers only after the returned sender fires (or is dropped).
    pub fn gated(countries: Vec<Country>) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Some(rx),
                result: Ok(countries),
            },
            tx,
        )
    }
}

/// Source answering from a script, one step per fetch.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl CountrySource for ScriptedSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send {
        *self.calls.lock() += 1;
        let step = self.steps.lock().pop_front();
        async move {
            let Some(step) = step else {
                return Ok(Vec::new());
            };
            if let Some(gate) = step.gate {
                let _ = gate.await;
            }
            step.result
        }
    }
}

// -- Store / app helpers --------------------------------------------------------

pub fn noop_waker() -> StoreWaker {
    Arc::new(|| {})
}

/// Waker that records deliveries on a `Notify`.
pub fn notify_waker() -> (StoreWaker, Arc<Notify>) {
    let notify = Arc::new(Notify::new());
    let signal = Arc::clone(&notify);
    (Arc::new(move || signal.notify_one()), notify)
}

pub fn make_store<S: CountrySource>(source: S) -> CountryStore {
    CountryStore::new(CountryRepository::new(source), Handle::current(), noop_waker())
}

/// App over a scripted source plus the notify fired on each delivery.
pub fn make_app(source: ScriptedSource) -> (App, Arc<Notify>) {
    let (waker, notify) = notify_waker();
    let store = CountryStore::new(CountryRepository::new(source), Handle::current(), waker);
    (App::new(store, Duration::from_millis(3500)), notify)
}

/// Render a buffer as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
