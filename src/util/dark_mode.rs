//! Dark mode initialization and toggle.
//!
//! [`ThemeController`] resolves the initial theme from the durable store,
//! makes sure the toggle control exists, and applies the theme to the page
//! root. Each toggle flips the root marker, re-renders the control, and then
//! persists the new value.
//!
//! TRADE-OFFS
//! ==========
//! The page-root marker is the only record of the active theme; the
//! controller reads it back instead of caching a copy. Persistence is
//! best-effort: store failures are logged and the visual toggle still lands.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::ThemeSettings;
use crate::state::theme::{Affordance, Theme};
use crate::util::storage::ThemeStore;

/// The document surface the controller mutates.
pub trait ThemePage {
    /// Whether the dark marker is present on the page root.
    fn is_dark(&self) -> bool;

    /// Add or remove the dark marker on the page root.
    fn set_dark(&mut self, dark: bool);

    /// Create the toggle control unless one already exists.
    ///
    /// Returns `true` only when a new control was created.
    fn ensure_control(&mut self) -> bool;

    /// Write icon, `aria-label`, and `title` onto the control.
    fn render_control(&mut self, affordance: &Affordance);
}

/// Owns one store and one page and keeps them consistent.
#[derive(Debug)]
pub struct ThemeController<S, P> {
    store: S,
    page: P,
    storage_key: String,
    default_theme: Theme,
}

impl<S: ThemeStore, P: ThemePage> ThemeController<S, P> {
    #[must_use]
    pub fn new(store: S, page: P, settings: &ThemeSettings) -> Self {
        Self { store, page, storage_key: settings.storage_key.clone(), default_theme: settings.default_theme }
    }

    /// Resolve the starting theme, make sure the control exists, and apply.
    ///
    /// Never writes the store. Safe to call more than once.
    pub fn init(&mut self) -> Theme {
        let theme = self.read_preference();
        if self.page.ensure_control() {
            log::debug!("theme toggle control created");
        }
        self.page.render_control(&theme.affordance());
        self.page.set_dark(theme.is_dark());
        log::info!("theme initialized: {theme}");
        theme
    }

    /// Flip the active theme and persist the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.page.set_dark(next.is_dark());
        self.page.render_control(&next.affordance());
        if let Err(e) = self.store.write(&self.storage_key, next.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        next
    }

    /// Active theme as shown on the page root.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.page.is_dark())
    }

    /// Persisted theme, or the default when absent, unreadable, or unknown.
    #[must_use]
    pub fn read_preference(&self) -> Theme {
        match self.store.read(&self.storage_key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::debug!("ignoring stored theme: {e}");
                self.default_theme
            }),
            Ok(None) => self.default_theme,
            Err(e) => {
                log::warn!("theme preference unreadable: {e}");
                self.default_theme
            }
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }
}

/// DOM-free page used outside the browser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessPage {
    pub dark: bool,
    /// A control is present, whether created here or already in the markup.
    pub has_control: bool,
    /// Controls created by `ensure_control`; pre-existing markup is not counted.
    pub controls_created: usize,
    pub control: Option<Affordance>,
}

impl HeadlessPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose markup already contains the toggle control.
    #[must_use]
    pub fn with_existing_control() -> Self {
        Self { has_control: true, ..Self::default() }
    }
}

impl ThemePage for HeadlessPage {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn ensure_control(&mut self) -> bool {
        if self.has_control {
            return false;
        }
        self.has_control = true;
        self.controls_created += 1;
        true
    }

    fn render_control(&mut self, affordance: &Affordance) {
        if self.has_control {
            self.control = Some(*affordance);
        }
    }
}
