use std::time::{Duration, Instant};

use crate::country::Country;
use crate::observable::Subscription;
use crate::ui::countries::CountryStore;
use crate::ui::country_list::CountryList;
use crate::ui::toast::Notifier;

/// Root screen: the store, the list it feeds, and the error notifier.
pub struct App {
    should_quit: bool,
    store: CountryStore,
    list: CountryList,
    notifier: Notifier,
    countries: Subscription<Vec<Country>>,
    error_message: Subscription<Option<String>>,
}

impl App {
    pub fn new(store: CountryStore, notification_duration: Duration) -> Self {
        let countries = store.subscribe_countries();
        let error_message = store.subscribe_error_message();
        let mut app = Self {
            should_quit: false,
            store,
            list: CountryList::new(),
            notifier: Notifier::new(notification_duration),
            countries,
            error_message,
        };
        app.sync(Instant::now());
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &CountryStore {
        &self.store
    }

    pub fn list(&self) -> &CountryList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CountryList {
        &mut self.list
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn refresh(&mut self) {
        self.store.refresh();
    }

    pub fn on_fetch_completed(&mut self, now: Instant) {
        self.store.drain();
        self.sync(now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        // Picks up completions whose wake-up event was lost.
        self.store.drain();
        self.sync(now);
        self.notifier.expire(now);
    }

    /// Push observable updates into the list and the notifier.
    pub fn sync(&mut self, now: Instant) {
        if let Some(countries) = self.countries.poll() {
            self.list.submit(countries);
        }
        if let Some(Some(message)) = self.error_message.poll() {
            self.notifier.show(message, now);
        }
    }

    /// Stop the store; late fetch results are dropped from here on.
    pub fn shutdown(&mut self) {
        self.store.dispose();
    }
}
