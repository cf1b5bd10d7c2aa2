use dioxus::prelude::*;

use crate::Screen;

/// Landing page: one bubble per managed collection.
#[component]
pub fn HomeScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        div {
            class: "bubbles",
            for screen in Screen::COLLECTIONS {
                a {
                    class: "bubble",
                    href: "#",
                    onclick: move |event| {
                        event.prevent_default();
                        active_screen.set(screen);
                    },
                    span { class: "bubble-icon", "{screen.icon()}" }
                    "{screen.name()}"
                }
            }
        }
    }
}
