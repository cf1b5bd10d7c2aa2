use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    Disconnected(String),
}

/// Tracks whether the backend is reachable, from the outcome of regular
/// requests. There is no separate polling.
#[derive(Clone, Copy, PartialEq)]
pub struct ApiChecker {
    status: Signal<ConnectionStatus>,
}

impl ApiChecker {
    /// Returns `true` if the result is `Ok`.
    ///
    /// Any server answer, success or error status, clears a previous
    /// disconnection; a transport error sets one. Local input errors leave
    /// the status alone.
    pub fn check_result_ref<T>(&mut self, result: &Result<T, ApiError>) -> bool {
        match result {
            Ok(_) => {
                self.reachable();
                true
            }
            Err(ApiError::Transport(msg)) => {
                dioxus_logger::tracing::warn!("backend unreachable: {msg}");
                self.status.set(ConnectionStatus::Disconnected(msg.clone()));
                false
            }
            Err(ApiError::Status { .. } | ApiError::Decode(_)) => {
                self.reachable();
                false
            }
            Err(_) => false,
        }
    }

    fn reachable(&mut self) {
        if self.status.peek().is_disconnected() {
            dioxus_logger::tracing::info!("backend reachable again");
            self.status.set(ConnectionStatus::Connected);
        }
    }

    /// Call `.read()` on this in a component to subscribe to changes.
    pub fn status(&self) -> Signal<ConnectionStatus> {
        self.status
    }
}

pub fn use_api_checker() -> ApiChecker {
    let status = use_context::<Signal<ConnectionStatus>>();
    ApiChecker { status }
}
