use std::future::Future;
use std::pin::Pin;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::api::WaitlistOutcome;
use soundframe::ApiError;
use ui::{Layout, WaitlistForm, WaitlistSubmit};

use crate::config;

#[component]
pub fn LandingPage() -> Element {
    let submit: WaitlistSubmit = Callback::new(
        move |email: String| -> Pin<Box<dyn Future<Output = Result<WaitlistOutcome, String>>>> {
            Box::pin(async move {
                let client = config::backend_client().map_err(|e| e.to_string())?;
                client.join_waitlist(&email).await.map_err(|e| {
                    warn!("Waitlist signup failed: {e}");
                    match e {
                        ApiError::Api { message, .. } if !message.is_empty() => message,
                        _ => "Something went wrong.".to_string(),
                    }
                })
            })
        },
    );

    rsx! {
        Layout {
            div { class: "landing",
                WaitlistForm { submit }
            }
        }
    }
}
