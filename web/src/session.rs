use dioxus::prelude::*;
use ui::Session;

use crate::storage::Storage;

/// Provides the [`Session`] context, hydrated from local storage so a cached
/// token survives reloads until the next exchange overwrites it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(Storage::get);
    use_context_provider(|| Session::new(state));

    rsx! {
        {children}
    }
}
