use dioxus::prelude::*;

#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand", {brand} }
            div { class: "navbar-links", {children} }
        }
    }
}
