//! Page-session state owned by individual components.
//!
//! DESIGN
//! ======
//! Each component owns one small model (theme, menu, active section, scroll
//! metrics, reveal ledger). Components only touch another component's state
//! through the narrow handles in `components`, never through globals.

pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
