// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use components::pico::Container;
use hooks::use_api_checker::ConnectionStatus;
use screens::events::EventsScreen;
use screens::home::HomeScreen;
use screens::participants::ParticipantsScreen;
use screens::prospects::ProspectsScreen;
use screens::speakers::SpeakersScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum Screen {
    #[default]
    Home,
    Participants,
    Events,
    Speakers,
    Prospects,
}

impl Screen {
    /// Every screen reachable from the tabs.
    const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Participants,
        Screen::Events,
        Screen::Speakers,
        Screen::Prospects,
    ];

    /// The screens that manage one collection each.
    const COLLECTIONS: [Screen; 4] = [
        Screen::Participants,
        Screen::Events,
        Screen::Speakers,
        Screen::Prospects,
    ];

    fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Participants => "Participants",
            Screen::Events => "Descentes",
            Screen::Speakers => "Speakers",
            Screen::Prospects => "Prospects",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Screen::Home => "🏠",
            Screen::Participants => "🧑‍🤝‍🧑",
            Screen::Events => "🌙",
            Screen::Speakers => "🎤",
            Screen::Prospects => "🔭",
        }
    }
}

#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in Screen::ALL {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen {
                                "page"
                            } else {
                                "false"
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container {
        padding: 10px;
        display: flex;
        flex-direction: column;
        min-height: 100vh;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%);
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 97%),
            transparent
        );
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        flex: 1;
        padding: 0 1rem;
    }

    /* --- HOME BUBBLES --- */
    .bubbles {
        display: flex;
        flex-wrap: wrap;
        gap: 2rem;
        justify-content: center;
        padding: 3rem 0;
    }

    .bubble {
        width: 10rem;
        height: 10rem;
        border-radius: 50%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-decoration: none;
        font-weight: bold;
        background-color: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
        transition: transform 0.15s ease-in-out;
    }

    .bubble:hover { transform: scale(1.06); }
    .bubble-icon { font-size: 2.5rem; margin-bottom: 0.5rem; }

    .connection-banner {
        border-left: 4px solid var(--pico-del-color);
    }
"#;

    rsx! {
        document::Title { "Kadmin" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| AppState::new(compat::default_config()));
    use_context_provider(|| app_state.clone());

    let connection_status = use_signal(ConnectionStatus::default);
    use_context_provider(|| connection_status);

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    use_hook(|| {
        dioxus_logger::tracing::info!("backend at {}", app_state.config.base_url());
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Kadmin"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs { active_screen }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Home => rsx! {
                            HomeScreen {}
                        },
                        Screen::Participants => rsx! {
                            ParticipantsScreen {}
                        },
                        Screen::Events => rsx! {
                            EventsScreen {}
                        },
                        Screen::Speakers => rsx! {
                            SpeakersScreen {}
                        },
                        Screen::Prospects => rsx! {
                            ProspectsScreen {}
                        },
                    }
                }
            }
        }
    }
}
