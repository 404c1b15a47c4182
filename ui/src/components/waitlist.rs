use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use shared::api::WaitlistOutcome;

pub type WaitlistSubmit =
    Callback<String, Pin<Box<dyn Future<Output = Result<WaitlistOutcome, String>>>>>;

#[derive(Props, PartialEq, Clone)]
pub struct WaitlistFormProps {
    pub submit: WaitlistSubmit,
}

/// Early-access signup card. Validates the address locally, fires at most one
/// request per click and never while one is already in flight.
#[component]
pub fn WaitlistForm(props: WaitlistFormProps) -> Element {
    let mut email = use_signal(|| "".to_string());
    let mut error = use_signal(|| "".to_string());
    let mut success = use_signal(|| "".to_string());
    let mut loading = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let mut handle_submit = move || {
        if loading() {
            return;
        }
        let address = email.read().to_string();
        if !is_valid_email(&address) {
            error.set("Enter a valid email.".to_string());
            success.set("".to_string());
            return;
        }
        loading.set(true);
        spawn(async move {
            error.set("".to_string());
            match props.submit.call(address).await {
                Ok(outcome) => {
                    success.set(outcome_message(outcome).to_string());
                    if outcome == WaitlistOutcome::Joined {
                        submitted.set(true);
                    }
                }
                Err(e) => error.set(e),
            }
            loading.set(false);
        });
    };

    rsx! {
      div { class: "card waitlist-card",
        div { class: "card-header",
          h1 { "Get Early Access" }
          p { class: "muted", "A poster that combines your top artists into a single image." }
        }

        div { class: "card-body",
          if submitted() {
            p { class: "success-note", "You're on the list! We'll email you soon." }
          } else {
            div { class: "field-stack",
              input {
                class: "field",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
                "type": "email",
                placeholder: "Enter your email",
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        handle_submit();
                    }
                },
              }
              button {
                class: "btn",
                disabled: loading(),
                onclick: move |_| handle_submit(),
                if loading() { "Submitting..." } else { "Join the waitlist" }
              }

              if !error().is_empty() {
                p { class: "error-banner", "{error}" }
              }
              if !success().is_empty() {
                p { class: "success-note", "{success}" }
              }
            }
          }
        }

        div { class: "card-footer muted", "We'll never spam you." }
      }
    }
}

/// The only validation the signup needs: something non-empty with an `@`.
fn is_valid_email(address: &str) -> bool {
    !address.is_empty() && address.contains('@')
}

fn outcome_message(outcome: WaitlistOutcome) -> &'static str {
    match outcome {
        WaitlistOutcome::Joined => "You're in! Check your inbox.",
        WaitlistOutcome::ListFull => "Sorry, the list is full. Wait for the public launch.",
        WaitlistOutcome::AlreadyJoined => "You've already signed up.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_at_less_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("someone.example.com"));
    }

    #[test]
    fn accepts_anything_with_an_at_sign() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("a@b"));
    }

    #[test]
    fn duplicate_signup_reads_as_already_signed_up() {
        assert_eq!(
            outcome_message(WaitlistOutcome::AlreadyJoined),
            "You've already signed up."
        );
    }
}
