//! User interface layer.
//!
//! Everything the pane shows goes through here. The directory pipeline talks
//! to the [`View`] trait, implemented by [`CardDeck`]; the painter turns the
//! deck plus the rest of the state into ANSI output.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`view`]: The rendering capability handed to the loader and filter engine
//! - [`deck`]: Rendered cards, cursor, selector options and indicators
//! - [`appearance`]: Light/dark mode and the palette pair
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod appearance;
pub mod components;
pub mod deck;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod view;
pub mod viewmodel;

pub use appearance::{Appearance, Presentation};
pub use deck::{Card, CardDeck, HIDE_DETAILS_LABEL, VIEW_MORE_LABEL};
pub use renderer::render;
pub use theme::Theme;
pub use view::{Indicator, View};
pub use viewmodel::{
    CardItem, FooterInfo, HeaderInfo, SearchBarInfo, SelectorBarInfo, StatusLine, UIViewModel,
};
