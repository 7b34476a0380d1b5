//! `ZellijPlugin` implementation: event mapping and host calls.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use roster::app::keys::map_key;
use roster::directory::loader::{REQUEST_CONTEXT_KEY, REQUEST_CONTEXT_VALUE};
use roster::worker::{WorkerMessage, WorkerResponse, WORKER_NAME};
use roster::{handle_event, Action, Config, Event};

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns.
pub struct State {
    /// Core application state from library layer.
    app: roster::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: roster::initialize(&Config::default()),
            worker_name: WORKER_NAME.to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` for the directory request.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: The directory response
    /// - `CustomMessage`: Worker responses
    /// - `PermissionRequestResult`: Grant or denial of `WebAccess`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        roster::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = roster::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates Zellij events to library events and runs the resulting
    /// actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted");
                Event::PermissionsGranted
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - directory cannot load");
                Event::PermissionsDenied
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        roster::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(&action);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, modifiers = ?key.key_modifiers, "key event");
        map_key(self.app.input_mode, key)
    }

    /// Maps the directory response to an application event.
    ///
    /// Results of requests this plugin did not tag are ignored.
    fn map_web_request_event(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(REQUEST_CONTEXT_VALUE) {
            tracing::debug!(context = ?context, "ignoring untagged web request result");
            return None;
        }

        tracing::debug!(status = status, body_len = body.len(), "directory response event");
        Some(Event::DirectoryResponse {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                Some(Event::WorkerResponse(WorkerResponse::DirectoryFailed { message: e.to_string() }))
            }
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// # Errors
    ///
    /// Returns the serialization failure so the caller can settle the load.
    fn post_worker_message(&self, message: &WorkerMessage) -> roster::Result<()> {
        let payload = message.to_payload()?;
        tracing::debug!(payload_len = payload.len(), "posting message to worker");
        post_message_to(PluginMessage {
            worker_name: Some(self.worker_name.clone()),
            name: self.worker_name.clone(),
            payload,
        });
        Ok(())
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns `true` if executing it changed what the pane shows.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::FetchDirectory { ref url } => {
                tracing::info!(url = %url, "issuing directory request");
                let mut context = BTreeMap::new();
                context.insert(REQUEST_CONTEXT_KEY.to_string(), REQUEST_CONTEXT_VALUE.to_string());
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
                false
            }
            Action::PostToWorker(ref message) => match self.post_worker_message(message) {
                Ok(()) => false,
                Err(e) => {
                    tracing::warn!(error = %e, "worker unreachable");
                    let failed = Event::WorkerResponse(WorkerResponse::DirectoryFailed { message: e.to_string() });
                    self.dispatch(&failed)
                }
            },
        }
    }
}
