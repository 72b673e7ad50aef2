//! Narrative display - renders one node of a CYOA story

use dioxus::prelude::*;
use parlor_domain::{CyoaGame, Narrative};

use crate::presentation::components::{ChoiceHandler, InventoryDisplay};

/// Props for the NarrativeDisplay component
#[derive(Props, Clone, PartialEq)]
pub struct NarrativeDisplayProps {
    pub game: CyoaGame,
    /// Node on screen; `None` while the first node is loading
    pub narrative: Option<Narrative>,
    pub loading: bool,
    #[props(default)]
    pub error_message: Option<String>,
    pub on_choice: EventHandler<usize>,
    /// Re-runs the failed fetch named by the error banner
    pub on_retry: EventHandler<()>,
    pub on_back: EventHandler<()>,
}

#[component]
pub fn NarrativeDisplay(props: NarrativeDisplayProps) -> Element {
    let game = &props.game;
    let on_back = props.on_back;
    let on_retry = props.on_retry;

    rsx! {
        article {
            class: "narrative",

            button {
                class: "btn btn-link back-button",
                onclick: move |_| on_back.call(()),
                "← Back to Games"
            }

            if let Some(message) = props.error_message.as_ref() {
                div {
                    class: "alert alert-error",
                    role: "alert",
                    span { "{message}" }
                    button {
                        class: "btn btn-sm",
                        disabled: props.loading,
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                }
            }

            h1 { class: "narrative-game-title", "{game.title}" }

            {match props.narrative.as_ref() {
                None => rsx! {
                    div {
                        class: "narrative-skeleton",
                        div { class: "skeleton skeleton-title" }
                        div { class: "skeleton skeleton-text" }
                        div { class: "skeleton skeleton-text" }
                    }
                },
                Some(narrative) => rsx! {
                    NarrativeBody {
                        game: game.clone(),
                        narrative: narrative.clone(),
                        loading: props.loading,
                        on_choice: props.on_choice,
                    }
                },
            }}
        }
    }
}

#[component]
fn NarrativeBody(
    game: CyoaGame,
    narrative: Narrative,
    loading: bool,
    on_choice: EventHandler<usize>,
) -> Element {
    let lost = game.is_lost(&narrative);
    let finished = lost || narrative.is_ending();

    rsx! {
        if !narrative.chapter_title.is_empty() {
            h2 { class: "narrative-chapter", "{narrative.chapter_title}" }
        }

        if let Some(image) = narrative.image.as_ref() {
            img { class: "narrative-image", src: "{image}", alt: "{narrative.chapter_title}" }
        }

        p {
            class: "narrative-text",
            style: "white-space: pre-wrap;",
            "{narrative.narrative}"
        }

        section {
            class: "resource-status",
            h3 { "Current Status" }
            div {
                class: "resource",
                if let Some(icon) = game.resource_image.as_ref() {
                    img { class: "resource-icon", src: "{icon}", alt: "{game.resource_name}" }
                }
                span { "{game.resource_name}: {narrative.current_resource_value}" }
            }
        }

        InventoryDisplay { inventory: narrative.inventory.clone() }

        if finished {
            div {
                class: "story-end",
                if lost {
                    "Your {game.resource_name} has run out. The End."
                } else {
                    "The End."
                }
            }
        } else {
            if !narrative.choice.is_empty() {
                h3 { class: "choice-prompt", "{narrative.choice}" }
            }
            ChoiceHandler {
                options: narrative.options.clone(),
                on_choice: on_choice,
                disabled: loading,
            }
        }
    }
}
