use dioxus::prelude::*;

/// The inline error of a page, shown verbatim.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        article {
            class: "error-banner",
            role: "alert",
            p {
                style: "white-space: pre-wrap; margin: 0;",
                "{message}"
            }
            a {
                href: "#",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_dismiss.call(());
                },
                "Dismiss"
            }
        }
    }
}
