//! Connections play view
//!
//! Renders the board of one dated puzzle and drives the transient state
//! around it: the one-second clock, the wrong-guess shake, and the
//! hint/solution gates. The session behind it starts over whenever the
//! route hands in a different game id.

use dioxus::prelude::*;
use parlor_domain::aggregates::puzzle_board::WORDS_PER_GUESS;
use parlor_domain::{long_date_label, GameColor, GameId, UnlockThresholds};

use crate::presentation::components::GameSelection;
use crate::presentation::state::use_connections_game;
use crate::use_platform;

const BOARD_ELEMENT_ID: &str = "connections-board";
const SHAKE_DURATION_MS: u64 = 500;
const CLOCK_TICK_MS: u64 = 1000;
const SKELETON_TILES: usize = 16;

/// Props for the ConnectionsGame component
#[derive(Props, Clone, PartialEq)]
pub struct ConnectionsGameProps {
    pub game_id: String,
    #[props(default)]
    pub thresholds: UnlockThresholds,
}

#[component]
pub fn ConnectionsGame(props: ConnectionsGameProps) -> Element {
    let game_id = GameId::new(props.game_id.clone());
    let thresholds = props.thresholds;
    let platform = use_platform();
    let state = use_connections_game(game_id.clone());
    let mut shaking = use_signal(|| false);

    // One-second display timer; the session ignores ticks while not in play
    let tick_platform = platform.clone();
    use_future(move || {
        let platform = tick_platform.clone();
        async move {
            loop {
                platform.sleep_ms(CLOCK_TICK_MS).await;
                state.tick();
            }
        }
    });

    let date_label = long_date_label(&game_id);

    let session = state.session.read();
    // Until the session has switched to this id, nothing of the previous game may show
    let current = session.game_id() == &game_id;

    if let Some(message) = state.error_message().filter(|_| current) {
        return rsx! {
            div {
                class: "connections connections-error",
                div { class: "alert alert-error", role: "alert", "{message}" }
            }
        };
    }

    let Some(board) = session.board().filter(|_| current) else {
        return rsx! {
            div {
                class: "connections",
                h1 { class: "page-title", "Connections" }
                p { class: "subtitle", "{date_label}" }
                div {
                    class: "word-grid",
                    for i in 0..SKELETON_TILES {
                        div { key: "{i}", class: "word-tile skeleton" }
                    }
                }
            }
        };
    };

    let palette = session.palette().clone();
    let elapsed = session.clock();
    let complete = board.is_complete();
    let selected_count = board.selected_words().len();
    let hint_enabled = thresholds.is_hint_enabled(
        board.is_hint_available(),
        board.incorrect_guesses(),
        elapsed.seconds(),
    );
    let solution_enabled = thresholds.is_solution_enabled(
        board.is_reveal_solution_available(),
        board.incorrect_guesses(),
        elapsed.seconds(),
    );
    let hints: Vec<String> = board.hints().into_iter().map(str::to_string).collect();
    let is_shaking = shaking();
    let incorrect_guesses = board.incorrect_guesses();
    let hints_used = board.hints_used();
    let categories_count = board.categories_count();

    let submit_platform = platform.clone();
    let on_submit = move |_| {
        let outcome = state.submit_words();
        if !outcome.is_correct() && !shaking() {
            shaking.set(true);
            let platform = submit_platform.clone();
            spawn(async move {
                platform.sleep_ms(SHAKE_DURATION_MS).await;
                shaking.set(false);
            });
        }
        scroll_to_board();
    };

    rsx! {
        div {
            class: "connections",
            h1 { class: "page-title", "Connections" }
            p { class: "subtitle", "{date_label}" }

            div {
                id: BOARD_ELEMENT_ID,
                class: "board",

                for (i, hint) in hints.iter().enumerate() {
                    div { key: "{i}", class: "alert alert-info hint", "{hint}" }
                }

                if board.is_one_away() {
                    p { class: "one-away", "One away!" }
                }

                for category in board.solved_categories().iter() {
                    SolvedCategoryBanner {
                        key: "{category.description}",
                        description: category.description.clone(),
                        words: category.words.clone(),
                        color: palette.category(&category.description),
                    }
                }

                div {
                    class: "word-grid",
                    for word in board.words().iter() {
                        WordTile {
                            key: "{word}",
                            word: word.clone(),
                            selected: board.is_selected(word),
                            shaking: is_shaking,
                            color: palette.selected_word(),
                            on_toggle: move |(word, selected): (String, bool)| {
                                if selected {
                                    state.unselect_word(&word);
                                } else {
                                    state.select_word(&word);
                                }
                            },
                        }
                    }
                }

                div {
                    class: "actions",
                    if selected_count > 0 {
                        div {
                            class: "action-row",
                            if selected_count == WORDS_PER_GUESS {
                                button { class: "btn btn-primary", onclick: on_submit, "Submit" }
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| state.clear_selected_words(),
                                "Clear selection"
                            }
                        }
                    }
                    if !complete && (hint_enabled || solution_enabled) {
                        div {
                            class: "action-row",
                            if hint_enabled {
                                button {
                                    class: "btn btn-outline",
                                    onclick: move |_| {
                                        state.get_hint();
                                        scroll_to_board();
                                    },
                                    "Get hint"
                                }
                            }
                            if solution_enabled {
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| {
                                        state.reveal_solution();
                                        scroll_to_board();
                                    },
                                    "Reveal solution"
                                }
                            }
                        }
                    }
                }

                p { class: "stat", "Incorrect guesses: {incorrect_guesses}" }
                if hints_used > 0 {
                    p { class: "stat", "Hints received: {hints_used}/{categories_count}" }
                }
                p { class: "stat", "Time: {elapsed}" }

                div {
                    class: "game-selection-wrapper",
                    GameSelection { game_id: props.game_id.clone() }
                }
            }
        }
    }
}

#[component]
fn SolvedCategoryBanner(description: String, words: Vec<String>, color: GameColor) -> Element {
    rsx! {
        div {
            class: "solved-category",
            style: "background-color: {color.background}; color: {color.text};",
            h3 { "{description}" }
            p { {words.join(", ")} }
        }
    }
}

/// One word on the grid; reports the word and whether it was selected
#[component]
fn WordTile(
    word: String,
    selected: bool,
    shaking: bool,
    color: GameColor,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    let class = if selected && shaking {
        "word-tile selected shake"
    } else if selected {
        "word-tile selected"
    } else {
        "word-tile"
    };
    let style = if selected {
        format!("background-color: {}; color: {};", color.background, color.text)
    } else {
        String::new()
    };

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            onclick: move |_| on_toggle.call((word.clone(), selected)),
            "{word}"
        }
    }
}

/// Bring the board into view after it changes shape
fn scroll_to_board() {
    let _ = document::eval(&format!(
        "setTimeout(() => document.getElementById('{BOARD_ELEMENT_ID}')?.scrollIntoView({{ behavior: 'smooth' }}), 10);"
    ));
}

