//! Platform-independent controller state.
//!
//! DESIGN
//! ======
//! Each controller keeps its decisions here (what is open, which rows are
//! visible, which theme is active) so they can be tested without a browser.
//! The `dom` layer only reads events in and mirrors the results out.

pub mod filter;
pub mod sidebar;
pub mod theme;
