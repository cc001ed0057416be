//! DOM event wiring for each page enhancement.
//!
//! Every `wire_*` function looks up its target, no-ops with a debug log when
//! the target is missing, and registers listeners that live for the rest of
//! the page (closures are leaked with `forget`).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use super::page::{BodyPage, ElementText, GlooSource, LocalStore, js_reason, set_class};
use crate::config::{BackToTopSettings, CommitSettings, RevealSettings, ThemeSettings, TypingSettings, VISIBLE_CLASS};
use crate::net::commits::{last_updated_url, offset_from_js_minutes, refresh_last_updated};
use crate::util::dark_mode::ThemeController;
use crate::util::reveal::{stagger_delay_ms, transition_delay};
use crate::util::scroll::BackToTop;
use crate::util::shortcut::{KeyChord, KeyPress};
use crate::util::typing::TypingFrames;

/// Marks an element whose click handler is already attached.
const BOUND_ATTR: &str = "data-theme-bound";

pub type SharedController = Rc<RefCell<ThemeController<LocalStore, BodyPage>>>;

pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("{event} listener not attached: {}", js_reason(&e));
    }
    cb.forget();
}

/// Initialize the theme and attach the toggle's click handler once.
pub fn wire_theme(document: &Document, settings: &ThemeSettings) -> Option<SharedController> {
    let Some(page) = BodyPage::new(document.clone(), settings) else {
        log::debug!("no <body>; theme toggle skipped");
        return None;
    };
    let mut controller = ThemeController::new(LocalStore::open(), page, settings);
    controller.init();

    let control = controller.page().control().cloned();
    let controller = Rc::new(RefCell::new(controller));
    if let Some(control) = control
        && !control.has_attribute(BOUND_ATTR)
    {
        let _ = control.set_attribute(BOUND_ATTR, "");
        let controller = Rc::clone(&controller);
        listen(&control, "click", move |_| {
            controller.borrow_mut().toggle();
        });
    }
    Some(controller)
}

/// Show the back-to-top button past the threshold; click scrolls smoothly up.
pub fn wire_back_to_top(window: &Window, document: &Document, settings: &BackToTopSettings) {
    let Some(button) = document.get_element_by_id(&settings.element_id) else {
        log::debug!("#{} not found; back-to-top skipped", settings.element_id);
        return;
    };

    let mut tracker = BackToTop::new(settings.threshold_px);
    let mut sync = {
        let window = window.clone();
        let button = button.clone();
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            if let Some(visible) = tracker.update(y) {
                set_class(&button, VISIBLE_CLASS, visible);
            }
        }
    };
    sync();
    listen(window, "scroll", move |_| sync());

    let window = window.clone();
    listen(&button, "click", move |ev| {
        ev.prevent_default();
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    });
}

/// Fade in matching elements as they scroll into view.
pub fn wire_reveal(document: &Document, settings: &RevealSettings, reduced_motion: bool) {
    let targets = match document.query_selector_all(&settings.selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("reveal selector {:?} rejected: {}", settings.selector, js_reason(&e));
            return;
        }
    };
    let elements: Vec<Element> =
        (0..targets.length()).filter_map(|i| targets.get(i)).filter_map(|n| n.dyn_into::<Element>().ok()).collect();
    if elements.is_empty() {
        log::debug!("no {} elements; reveal skipped", settings.selector);
        return;
    }
    if reduced_motion {
        for el in &elements {
            set_class(el, VISIBLE_CLASS, true);
        }
        return;
    }

    let (step_ms, max_ms) = (settings.step_ms, settings.max_delay_ms);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut batch = 0;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    let delay = transition_delay(stagger_delay_ms(batch, step_ms, max_ms));
                    let _ = el.style().set_property("transition-delay", &delay);
                }
                set_class(&target, VISIBLE_CLASS, true);
                observer.unobserve(&target);
                batch += 1;
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(settings.threshold));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            // No observer support: show everything rather than hide it forever.
            log::warn!("IntersectionObserver unavailable: {}", js_reason(&e));
            for el in &elements {
                set_class(el, VISIBLE_CLASS, true);
            }
            return;
        }
    };
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
}

/// Retype the tagline one character at a time.
pub fn wire_typing(document: &Document, settings: &TypingSettings, reduced_motion: bool) {
    let Some(el) = document.get_element_by_id(&settings.element_id) else {
        log::debug!("#{} not found; typing skipped", settings.element_id);
        return;
    };
    if reduced_motion {
        return;
    }
    let text = el.text_content().unwrap_or_default().trim().to_owned();
    if text.is_empty() {
        return;
    }

    el.set_text_content(Some(""));
    let delay_ms = settings.delay_ms;
    wasm_bindgen_futures::spawn_local(async move {
        for frame in TypingFrames::new(&text) {
            TimeoutFuture::new(delay_ms).await;
            el.set_text_content(Some(frame));
        }
    });
}

/// Toggle the theme from the keyboard.
pub fn wire_shortcut(document: &Document, chord: KeyChord, controller: SharedController) {
    listen(document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !chord.matches(&key_press(key)) {
            return;
        }
        ev.prevent_default();
        let theme = controller.borrow_mut().toggle();
        log::debug!("{chord} switched theme to {theme}");
    });
}

fn key_press(ev: &KeyboardEvent) -> KeyPress {
    let in_editable = ev.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()).is_some_and(|el| {
        el.is_content_editable() || matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
    });
    KeyPress {
        key: ev.key(),
        code: ev.code(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        shift: ev.shift_key(),
        meta: ev.meta_key(),
        repeat: ev.repeat(),
        in_editable,
    }
}

/// Fetch the newest commit time into the display element in the background.
pub fn spawn_last_updated(document: &Document, settings: &CommitSettings) {
    let el = document.get_element_by_id(&settings.element_id);
    let Some(url) = last_updated_url(settings, el.is_some()) else {
        return;
    };
    let Some(el) = el else {
        return;
    };

    let offset = offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset());
    wasm_bindgen_futures::spawn_local(async move {
        let status = refresh_last_updated(&GlooSource, &ElementText(el), &url, offset).await;
        log::debug!("last commit status: {status:?}");
    });
}
