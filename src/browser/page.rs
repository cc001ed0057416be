//! `web-sys` implementations of the controller and fetch seams.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::config::ThemeSettings;
use crate::net::commits::{CommitSource, FetchError, HttpReply, TextTarget};
use crate::state::theme::Affordance;
use crate::util::dark_mode::ThemePage;
use crate::util::storage::{StoreError, ThemeStore};

pub(crate) fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Add or remove `class` on `el`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::debug!("class {class} not updated: {}", js_reason(&e));
    }
}

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme changes will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|e| StoreError::Rejected {
            op: "read",
            key: key.to_owned(),
            reason: js_reason(&e),
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Rejected {
            op: "write",
            key: key.to_owned(),
            reason: js_reason(&e),
        })
    }
}

/// The document body carrying the dark marker, plus the toggle button.
pub struct BodyPage {
    document: Document,
    body: HtmlElement,
    control: Option<Element>,
    dark_class: String,
    toggle_id: String,
}

impl BodyPage {
    /// `None` when the document has no `<body>` yet.
    #[must_use]
    pub fn new(document: Document, settings: &ThemeSettings) -> Option<Self> {
        let body = document.body()?;
        Some(Self {
            document,
            body,
            control: None,
            dark_class: settings.dark_class.clone(),
            toggle_id: settings.toggle_id.clone(),
        })
    }

    #[must_use]
    pub fn control(&self) -> Option<&Element> {
        self.control.as_ref()
    }

    fn create_control(&self) -> Result<Element, JsValue> {
        let button = self.document.create_element("button")?;
        button.set_id(&self.toggle_id);
        button.set_attribute("type", "button")?;
        self.body.append_child(&button)?;
        Ok(button)
    }
}

impl ThemePage for BodyPage {
    fn is_dark(&self) -> bool {
        self.body.class_list().contains(&self.dark_class)
    }

    fn set_dark(&mut self, dark: bool) {
        set_class(&self.body, &self.dark_class, dark);
    }

    fn ensure_control(&mut self) -> bool {
        if self.control.is_some() {
            return false;
        }
        if let Some(existing) = self.document.get_element_by_id(&self.toggle_id) {
            self.control = Some(existing);
            return false;
        }
        match self.create_control() {
            Ok(button) => {
                self.control = Some(button);
                true
            }
            Err(e) => {
                log::warn!("theme toggle not created: {}", js_reason(&e));
                false
            }
        }
    }

    fn render_control(&mut self, affordance: &Affordance) {
        let Some(control) = &self.control else {
            return;
        };
        control.set_inner_html(&affordance.icon_html());
        let _ = control.set_attribute("aria-label", affordance.label);
        let _ = control.set_attribute("title", affordance.label);
    }
}

/// Writes status text into an element.
pub struct ElementText(pub Element);

impl TextTarget for ElementText {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Browser `fetch` through `gloo-net`.
pub struct GlooSource;

impl CommitSource for GlooSource {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError> {
        let resp = gloo_net::http::Request::get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status();
        let body = if resp.ok() { resp.text().await.map_err(|e| FetchError::Body(e.to_string()))? } else { String::new() };
        Ok(HttpReply { status, body })
    }
}
