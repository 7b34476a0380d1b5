//! Zellij plugin wrapper and entry point.
//!
//! This binary is the thin integration layer between the Roster library and
//! the Zellij plugin system. The plugin itself lives in the `plugin` module,
//! which only exists when building for WebAssembly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, web_request
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ DirectoryWorker  │   │  ← Response parsing
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permission**: Request `WebAccess`; the grant issues the one `GET`
//! 3. **Response**: `WebRequestResult` body goes to the worker
//! 4. **Settle**: The worker's `CustomMessage` reply populates or fails the load
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Next card
//! - `Ctrl+p`: Previous card
//!
//! In normal mode:
//! - `j`/`Down`: Next card
//! - `k`/`Up`: Previous card
//! - `Enter`/`Space`: View More / Hide Details on the current card
//! - `/`: Search by name or username
//! - `c`/`C`: Next / previous city
//! - `o`/`O`: Next / previous company
//! - `t`: Toggle dark mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - Any character: Type into the query
//! - `Backspace`: Delete the last character
//! - `Enter`: Keep the query and return to the cards
//! - `Esc`: Clear the query and return to the cards

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin;

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use roster::worker::DirectoryWorker;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

// Register plugin and worker with Zellij
#[cfg(target_family = "wasm")]
register_plugin!(State);
#[cfg(target_family = "wasm")]
register_worker!(DirectoryWorker, roster_worker, ROSTER_WORKER);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("roster is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
}
