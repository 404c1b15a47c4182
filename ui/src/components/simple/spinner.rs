use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SpinnerProps {
    /// Short status line shown next to the spinner.
    #[props(optional, into)]
    pub label: String,
}

#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    rsx! {
      div { class: "spinner-row",
        div { class: "spinner" }
        if !props.label.is_empty() {
          span { class: "muted", "{props.label}" }
        }
      }
    }
}
