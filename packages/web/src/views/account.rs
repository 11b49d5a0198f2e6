use dioxus::prelude::*;
use ui::views::{AdminView, ProfileView};
use ui::Access;

use super::Protected;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected {
            ProfileView {}
        }
    }
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        Protected { access: Access::Admin,
            AdminView {}
        }
    }
}
