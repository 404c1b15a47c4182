use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ArtistListProps {
    /// Artist names in listening-rank order.
    pub artists: Vec<String>,
}

#[component]
pub fn ArtistList(props: ArtistListProps) -> Element {
    if props.artists.is_empty() {
        return rsx! {
          p { class: "muted", "No top artists found." }
        };
    }

    rsx! {
      ul { class: "artist-list",
        for (index , artist) in props.artists.iter().enumerate() {
          li { key: "{index}-{artist}",
            span { class: "artist-rank", "{index + 1}" }
            span { "{artist}" }
          }
        }
      }
    }
}
