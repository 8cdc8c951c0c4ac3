//! Player view: battles for one player, matchups for one of their characters.

use dioxus::prelude::*;

use crate::components::{CharacterDistributionChart, EwgfLoadingAnimation};
use crate::core::colors;
use crate::stats::client;
use crate::stats::types::Battle;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// The routed name comes in as a signal so navigating between players in
/// the same scope re-fetches instead of showing the prior player's battles.
#[component]
pub fn Player(name: ReadOnlySignal<String>) -> Element {
    let mut battles = use_signal(Vec::<Battle>::new);
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut selected_character = use_signal(|| colors::roster()[0].0);

    // Reading `name()` inside the resource re-runs it (and drops the stale
    // in-flight fetch) whenever the route parameter changes.
    let _loader = use_resource(move || async move {
        let player = name();
        load_state.set(LoadState::Loading);
        match client::fetch_player_battles(client::DEFAULT_BASE_URL, &player).await {
            Ok(list) => {
                battles.set(list);
                load_state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!(player = %player, error = %err, "battle fetch failed");
                load_state.set(LoadState::Failed);
            }
        }
    });

    rsx! {
        section { class: "page page-player",
            div { class: "page-player__header",
                h1 { "{name()}" }
                label { class: "page-player__control",
                    span { "Character" }
                    select {
                        class: "chart-card__select",
                        value: "{selected_character()}",
                        oninput: move |evt| {
                            if let Ok(id) = evt.value().parse() {
                                selected_character.set(id);
                            }
                        },
                        for (id, character) in colors::roster().iter().copied() {
                            option { key: "{id}", value: "{id}", "{character}" }
                        }
                    }
                }
            }

            match load_state() {
                LoadState::Loading => rsx! {
                    div { class: "page-player__loading", EwgfLoadingAnimation {} }
                },
                LoadState::Failed => rsx! {
                    div { class: "page__error", "Couldn't load battles for {name()}." }
                },
                LoadState::Ready => rsx! {
                    CharacterDistributionChart {
                        battles: battles(),
                        selected_character_id: selected_character(),
                        player_name: name(),
                    }
                },
            }
        }
    }
}
