//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components, with theme support and locale-aware numbers.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`format`]: Locale number formatting for prices and changes
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod format;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use format::{LocaleFormat, NumberFormat};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnHeader, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine,
    SummaryCard, SummaryCards, Trend, UIViewModel,
};
