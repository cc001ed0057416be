//! # portfolio-ui
//!
//! WebAssembly enhancements for a static portfolio site: a persisted
//! light/dark theme toggle, a back-to-top button, reveal-on-scroll fades, a
//! typed tagline, a keyboard shortcut for the theme, and a "last updated"
//! stamp taken from the newest commit of the site's repository.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Theme model and control affordance |
//! | [`util`] | Theme controller, storage seam, and per-feature logic |
//! | [`net`] | Last-commit fetch classification and rendering |
//! | [`config`] | Tunables read from `data-*` attributes on `<body>` |
//! | `browser` | `web-sys` wiring and the wasm entry point (`browser` feature) |

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod browser;
