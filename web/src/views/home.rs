use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::session::StoredSession;
use soundframe::poster::PosterClient;
use soundframe::trim_prompt;
use ui::{use_session, ArtistList, Button, ButtonVariant, Layout, Poster, Spinner};

use crate::browser;
use crate::callback::{parse_callback, CallbackParams};
use crate::config;
use crate::storage::Storage;

#[component]
pub fn HomePage() -> Element {
    let mut session = use_session();
    let mut top_artists = use_signal(Vec::<String>::new);
    let mut prompt = use_signal(String::new);
    let mut poster_url = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut loading_artists = use_signal(|| false);
    let mut loading_poster = use_signal(|| false);

    let fetch_poster = move |text: String| async move {
        loading_poster.set(true);
        match PosterClient::new().fetch(trim_prompt(&text)).await {
            Ok(bytes) => {
                // One live object URL at a time: drop the old one first.
                if let Some(previous) = poster_url() {
                    browser::revoke_object_url(&previous);
                }
                poster_url.set(browser::create_object_url(&bytes));
            }
            Err(e) => {
                warn!("Poster fetch failed: {e}");
                error.set(Some("Could not generate your poster.".to_string()));
            }
        }
        loading_poster.set(false);
    };

    let fetch_artists = move |user_id: String| async move {
        if loading_artists() {
            return;
        }
        loading_artists.set(true);
        error.set(None);

        let client = match config::backend_client() {
            Ok(client) => client,
            Err(e) => {
                error.set(Some(e.to_string()));
                loading_artists.set(false);
                return;
            }
        };

        match client.get_user_top_tracks(&user_id).await {
            Ok(tracks) => {
                info!("Fetched {} top artists", tracks.artists.len());
                top_artists.set(tracks.artists);
                prompt.set(tracks.prompt.clone());
                loading_artists.set(false);
                fetch_poster(tracks.prompt).await;
            }
            Err(e) => {
                warn!("Top artists fetch failed: {e}");
                error.set(Some("Could not fetch your top artists.".to_string()));
                loading_artists.set(false);
            }
        }
    };

    // Handle the OAuth callback once on mount. A reported error suppresses
    // the token exchange entirely; a fresh exchange kicks off the artist
    // fetch right away.
    use_future(move || async move {
        match parse_callback(&browser::current_query()) {
            CallbackParams::Failed(message) => {
                warn!("Login callback reported an error: {message}");
                error.set(Some(message));
            }
            CallbackParams::Authenticated { user_id } => {
                let client = match config::backend_client() {
                    Ok(client) => client,
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        return;
                    }
                };
                match client.get_access_token(&user_id).await {
                    Ok(access_token) => {
                        let record = StoredSession {
                            user_id: user_id.clone(),
                            access_token,
                        };
                        Storage::set(&record);
                        session.login(record);
                        fetch_artists(user_id).await;
                    }
                    Err(e) => {
                        warn!("Token exchange failed: {e}");
                        error.set(Some("Spotify login failed. Please try again.".to_string()));
                    }
                }
            }
            CallbackParams::Absent => {}
        }
    });

    let handle_login = move |_| match config::backend_client().and_then(|c| c.login_url()) {
        Ok(url) => browser::redirect_to(url.as_str()),
        Err(e) => error.set(Some(e.to_string())),
    };

    let handle_fetch = move |_| {
        if let Some(user_id) = session.user_id() {
            spawn(async move {
                fetch_artists(user_id).await;
            });
        }
    };

    let handle_logout = move |_| {
        Storage::remove();
        session.logout();
        top_artists.set(Vec::new());
        prompt.set(String::new());
        if let Some(previous) = poster_url() {
            browser::revoke_object_url(&previous);
        }
        poster_url.set(None);
        error.set(None);
    };

    rsx! {
        Layout {
            div { class: "home",
                h1 { "Your Spotify poster" }

                if let Some(message) = error() {
                    p { class: "error-banner", "{message}" }
                }

                if !session.is_logged_in() {
                    div { class: "card",
                        div { class: "card-body",
                            p { class: "muted",
                                "Connect your Spotify account to turn your top artists into a poster."
                            }
                            Button { onclick: handle_login, "Login with Spotify" }
                        }
                    }
                } else {
                    div { class: "card",
                        div { class: "card-header",
                            h2 { "Your top artists" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: handle_logout,
                                "Log out"
                            }
                        }
                        div { class: "card-body",
                            Button {
                                onclick: handle_fetch,
                                disabled: loading_artists() || loading_poster(),
                                "Get top artists"
                            }
                            if loading_artists() {
                                Spinner { label: "Fetching your artists..." }
                            } else {
                                ArtistList { artists: top_artists() }
                            }
                        }
                        div { class: "card-footer",
                            h3 { "Generated prompt" }
                            if prompt().is_empty() {
                                p { class: "muted", "No prompt generated yet." }
                            } else {
                                p { "{prompt}" }
                            }
                            if loading_poster() {
                                Spinner { label: "Painting your poster..." }
                            }
                            if let Some(src) = poster_url() {
                                Poster { src, alt: prompt() }
                            }
                        }
                    }
                }
            }
        }
    }
}
