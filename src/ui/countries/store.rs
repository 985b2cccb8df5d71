//! State holder for the country screen.
//!
//! Fetches run on the tokio runtime; their results come back through a
//! channel and are applied by the owner (the UI thread) via [`CountryStore::drain`]
//! or [`CountryStore::apply_next`]. Observable fields are only written there.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::CountrySource;
use crate::country::Country;
use crate::observable::{Observable, Subscription};
use crate::repository::{CountryRepository, FetchResult};
use crate::ui::countries::intent::CountriesIntent;
use crate::ui::countries::reducer::CountriesReducer;
use crate::ui::countries::state::CountriesState;
use crate::ui::mvi::Reducer;

type FetchFuture = Pin<Box<dyn Future<Output = FetchResult> + Send>>;
type Fetcher = Arc<dyn Fn() -> FetchFuture + Send + Sync>;

/// Called from the runtime after a completion has been queued.
pub type StoreWaker = Arc<dyn Fn() + Send + Sync>;

struct FetchCompletion {
    seq: u64,
    result: FetchResult,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct CountryStore {
    fetcher: Fetcher,
    runtime: Handle,
    waker: StoreWaker,
    state: CountriesState,
    countries: Observable<Vec<Country>>,
    error_message: Observable<Option<String>>,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
    /// Sequence number of the most recently started fetch.
    issued: u64,
    in_flight: Option<JoinHandle<()>>,
    disposed: bool,
}

impl CountryStore {
    /// Create the store and start the initial fetch.
    pub fn new<S: CountrySource>(
        repository: CountryRepository<S>,
        runtime: Handle,
        waker: StoreWaker,
    ) -> Self {
        let fetcher: Fetcher = Arc::new(move || -> FetchFuture {
            let repository = repository.clone();
            Box::pin(async move { repository.fetch_countries().await })
        });
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        let mut store = Self {
            fetcher,
            runtime,
            waker,
            state: CountriesState::default(),
            countries: Observable::default(),
            error_message: Observable::default(),
            completions_tx,
            completions_rx,
            issued: 0,
            in_flight: None,
            disposed: false,
        };
        store.refresh();
        store
    }

    pub fn countries(&self) -> Vec<Country> {
        self.countries.get()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error_message.get()
    }

    pub fn subscribe_countries(&self) -> Subscription<Vec<Country>> {
        self.countries.subscribe()
    }

    pub fn subscribe_error_message(&self) -> Subscription<Option<String>> {
        self.error_message.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Start a new fetch. Any fetch still in flight is cancelled and its
    /// result, should it already be queued, is discarded.
    pub fn refresh(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        self.issued += 1;
        let seq = self.issued;
        tracing::info!(seq, "Refreshing countries");
        dispatch_mvi!(self, state, CountriesReducer, CountriesIntent::Refresh);

        let fetch = (self.fetcher)();
        let tx = self.completions_tx.clone();
        let waker = Arc::clone(&self.waker);
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = fetch.await;
            if tx.send(FetchCompletion { seq, result }).is_ok() {
                waker();
            }
        }));
    }

    /// Apply every queued completion without blocking.
    ///
    /// Returns the number of completions that changed state.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `false` without waiting once the store is disposed, or when
    /// the completion was stale.
    pub async fn apply_next(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    /// Stop accepting results. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
        tracing::debug!("Country store disposed");
    }

    fn apply(&mut self, completion: FetchCompletion) -> bool {
        if self.disposed {
            tracing::debug!(seq = completion.seq, "Ignoring fetch result after dispose");
            return false;
        }
        if completion.seq != self.issued {
            tracing::debug!(
                seq = completion.seq,
                latest = self.issued,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.in_flight = None;
        let intent = match completion.result {
            Ok(countries) => {
                tracing::info!("Loaded {} countries", countries.len());
                CountriesIntent::Loaded { countries }
            }
            Err(failure) => CountriesIntent::Failed {
                description: failure.description,
            },
        };
        dispatch_mvi!(self, state, CountriesReducer, intent);

        self.countries.set(self.state.countries.clone());
        self.error_message.set(self.state.error_message.clone());
        true
    }
}

impl Drop for CountryStore {
    fn drop(&mut self) {
        self.dispose();
    }
}
