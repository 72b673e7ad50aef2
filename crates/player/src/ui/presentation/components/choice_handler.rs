//! Choice buttons for a narrative node

use dioxus::prelude::*;
use parlor_domain::CyoaOption;

/// Props for the ChoiceHandler component
#[derive(Props, Clone, PartialEq)]
pub struct ChoiceHandlerProps {
    pub options: Vec<CyoaOption>,
    /// Receives the zero-based index of the chosen option
    pub on_choice: EventHandler<usize>,
    #[props(default)]
    pub disabled: bool,
}

/// One button per option, in order
#[component]
pub fn ChoiceHandler(props: ChoiceHandlerProps) -> Element {
    let on_choice = props.on_choice;

    rsx! {
        div {
            class: "choices",
            for (index, option) in props.options.iter().enumerate() {
                button {
                    key: "{index}",
                    class: "btn choice-button",
                    disabled: props.disabled,
                    onclick: move |_| on_choice.call(index),
                    "{option.name}"
                }
            }
        }
    }
}
