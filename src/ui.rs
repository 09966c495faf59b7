//! UI module for the greetings application
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-window views, one per screen

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
