use dioxus::prelude::*;
use parlor_domain::InventoryItem;

/// Items the player carries; renders nothing for an empty inventory
#[component]
pub fn InventoryDisplay(inventory: Vec<InventoryItem>) -> Element {
    if inventory.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "inventory",
            h3 { class: "inventory-title", "Inventory" }
            ul {
                class: "inventory-list",
                for (i, item) in inventory.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: "inventory-item",
                        if let Some(image) = item.image.as_ref() {
                            img { class: "inventory-icon", src: "{image}", alt: "{item.name}" }
                        }
                        span { "{item.name}" }
                    }
                }
            }
        }
    }
}
