//! Roster: a Zellij plugin that browses a remote user directory as cards.
//!
//! Roster fetches the user list once, renders one card per user, and lets
//! you narrow the list with a free-text search plus city and company
//! selectors. Each card can be expanded for phone and website, and the whole
//! pane flips between a light and a dark palette.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions, view model              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Directory     │   │ UI Layer      │   │ Worker Layer  │
//! │ (directory/)  │   │ (ui/)         │   │ (worker/)     │
//! │ - Loader      │   │ - View, deck  │   │ - Parse body  │
//! │ - Index       │   │ - Components  │   │ - Trace ctx   │
//! │ - Filters     │   │ - Theming     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`directory`]: Loading, indexing and filtering the directory
//! - [`domain`]: User records and errors
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Cards, theming and terminal rendering
//! - [`worker`]: Background response parsing
//! - [`observability`]: OpenTelemetry tracing to a file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/roster.wasm" {
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         start_dark "true"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Flow
//!
//! 1. **Load**: parse [`Config`], initialize tracing, build [`AppState`],
//!    request the `WebAccess` permission
//! 2. **Grant**: issue the one `GET` to the directory endpoint
//! 3. **Response**: hand the body to the worker for parsing
//! 4. **Worker reply**: settle the load (populate selectors, render all
//!    cards, hide loading; or show the error)
//! 5. **Input**: search, selectors, card toggles and the theme toggle
//!    re-render through [`handle_event`]
//!
//! # Example
//!
//! ```rust
//! use roster::worker::WorkerResponse;
//! use roster::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let users = serde_json::from_str(r#"[{
//!     "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
//!     "address": {"city": "Gwenborough"}, "company": {"name": "Romaguera-Crona"},
//!     "phone": "1-770-736-8031 x56442", "website": "hildegard.org"
//! }]"#)?;
//!
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::DirectoryLoaded { users }))?;
//! handle_event(&mut state, &Event::ToggleCard)?;
//!
//! assert!(state.deck.cards()[0].expanded);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, RosterError, UserRecord};
pub use ui::{Appearance, Theme};

use std::collections::BTreeMap;

/// Plugin configuration parsed from the KDL plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/roster.wasm" {
///     light_theme "catppuccin-latte"
///     dark_theme "catppuccin-frappe"
///     dark_theme_file "~/themes/night.toml"
///     start_dark "true"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in palette shown while dark mode is off.
    pub light_theme: Option<String>,

    /// Built-in palette shown while dark mode is on.
    pub dark_theme: Option<String>,

    /// TOML palette for light mode. Wins over `light_theme`.
    pub light_theme_file: Option<String>,

    /// TOML palette for dark mode. Wins over `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// Initial Theme State. Default: `false`
    pub start_dark: bool,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            light_theme: None,
            dark_theme: None,
            light_theme_file: None,
            dark_theme_file: None,
            start_dark: false,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. `start_dark` accepts `true`/`false`; anything
    /// else keeps the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use roster::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("start_dark".to_string(), "true".to_string());
    /// map.insert("dark_theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.start_dark);
    /// assert_eq!(config.dark_theme.as_deref(), Some("catppuccin-frappe"));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let start_dark = config
            .get("start_dark")
            .and_then(|value| value.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            light_theme: non_empty("light_theme"),
            dark_theme: non_empty("dark_theme"),
            light_theme_file: non_empty("light_theme_file"),
            dark_theme_file: non_empty("dark_theme_file"),
            start_dark,
            trace_level: non_empty("trace_level").unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Builds the startup [`AppState`] from configuration.
///
/// Resolves both palettes (file, then name, then the built-in default) and
/// sets the initial Theme State. Nothing is loaded yet; the loading indicator
/// is visible.
///
/// # Example
///
/// ```rust
/// use roster::{initialize, Config};
///
/// let state = initialize(&Config { start_dark: true, ..Config::default() });
/// assert!(state.appearance.is_dark());
/// assert_eq!(state.appearance.active().name, "catppuccin-mocha");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(start_dark = config.start_dark, "initializing roster plugin");

    let light_file = config.light_theme_file.as_deref().map(infrastructure::expand_tilde);
    let dark_file = config.dark_theme_file.as_deref().map(infrastructure::expand_tilde);

    let light = Theme::resolve(
        light_file.as_deref(),
        config.light_theme.as_deref(),
        ui::theme::DEFAULT_LIGHT_THEME,
    );
    let dark = Theme::resolve(
        dark_file.as_deref(),
        config.dark_theme.as_deref(),
        ui::theme::DEFAULT_DARK_THEME,
    );

    AppState::new(Appearance::new(light, dark, config.start_dark))
}
