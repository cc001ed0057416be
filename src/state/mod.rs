//! Page state models shared by the controller and the browser layer.
//!
//! DESIGN
//! ======
//! Only the theme carries state across events. Everything here is plain data
//! so it can be exercised without a DOM.

pub mod theme;
