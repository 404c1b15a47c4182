use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "footer",
        span { "SoundFrame" }
        span { class: "muted", "Posters from your listening history" }
      }
    }
}
