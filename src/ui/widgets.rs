//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they take generic Message
//! types so components can wire them up.

pub mod expand_button;
