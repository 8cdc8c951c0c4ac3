use dioxus::prelude::*;

use ui::components::StatsHeader;
use ui::stats::use_stats_store_provider;
use ui::views::{Home, Player};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/player/:name")]
    Player { name: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// App shell: provides the statistics store and wraps every page in the
/// header (with web-specific links and search) and footer.
#[component]
fn Shell() -> Element {
    use_stats_store_provider();

    let nav = use_navigator();
    let mut query = use_signal(String::new);

    rsx! {
        StatsHeader {
            Link { class: "header__link", to: Route::Home {}, "All Statistics" }
            form {
                class: "header__search",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let name = query().trim().to_string();
                    if !name.is_empty() {
                        nav.push(Route::Player { name });
                        query.set(String::new());
                    }
                },
                input {
                    class: "header__search-input",
                    r#type: "search",
                    placeholder: "Search player...",
                    value: "{query()}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
        }
        main { class: "shell__main",
            Outlet::<Route> {}
        }
        footer { class: "shell__footer",
            p { "Statistics sourced from replay data. Not affiliated with Bandai Namco." }
        }
    }
}
