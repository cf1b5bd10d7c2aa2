use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_api_checker::use_api_checker;
use crate::hooks::use_api_checker::ConnectionStatus;

/// Shown while the last request could not reach the backend.
#[component]
pub fn ConnectionBanner(on_retry: EventHandler<()>) -> Element {
    let checker = use_api_checker();
    let status = checker.status();

    rsx! {
        if let ConnectionStatus::Disconnected(reason) = &*status.read() {
            article {
                class: "connection-banner",
                strong { "Backend unreachable" }
                p { small { "{reason}" } }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
