use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PosterProps {
    /// The source URL for the image, usually a local object URL.
    pub src: String,
    /// The alt text for accessibility.
    pub alt: String,
}

#[component]
pub fn Poster(props: PosterProps) -> Element {
    let mut has_error = use_signal(|| false);

    rsx! {
      div { class: "poster-frame",
        if !has_error() {
          img {
            src: "{props.src}",
            alt: "{props.alt}",
            class: "poster-image",
            onerror: move |_| has_error.set(true),
          }
        } else {
          p { class: "muted", "The poster could not be displayed." }
        }
      }
    }
}
