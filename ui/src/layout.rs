use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "page",
        main { class: "page-body", {children} }
        Footer {}
      }
    }
}
