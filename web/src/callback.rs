use url::form_urlencoded;

/// What the OAuth callback query string told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackParams {
    /// The backend confirmed the login and handed us a user id to exchange.
    Authenticated { user_id: String },
    /// The backend reported a failure; no token exchange must happen.
    Failed(String),
    /// No callback parameters present, plain navigation.
    Absent,
}

/// Parses the `/home` query string. An `error` parameter wins over anything
/// else; a token exchange only happens for `auth_success=true` plus a
/// non-empty `user_id`.
pub fn parse_callback(query: &str) -> CallbackParams {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut user_id = None;
    let mut auth_success = false;
    let mut error = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "user_id" => user_id = Some(value.into_owned()),
            "auth_success" => auth_success = value == "true",
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(message) = error {
        let message = if message.is_empty() {
            "Spotify login failed.".to_string()
        } else {
            message
        };
        return CallbackParams::Failed(message);
    }

    match (auth_success, user_id) {
        (true, Some(user_id)) if !user_id.is_empty() => CallbackParams::Authenticated { user_id },
        _ => CallbackParams::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_callback_yields_the_exact_user_id() {
        assert_eq!(
            parse_callback("?auth_success=true&user_id=spotify%3Auser%3A42"),
            CallbackParams::Authenticated {
                user_id: "spotify:user:42".to_string()
            }
        );
    }

    #[test]
    fn error_parameter_blocks_the_exchange() {
        assert_eq!(
            parse_callback("?error=access_denied&auth_success=true&user_id=x"),
            CallbackParams::Failed("access_denied".to_string())
        );
    }

    #[test]
    fn empty_error_still_fails_with_a_default_message() {
        assert_eq!(
            parse_callback("?error="),
            CallbackParams::Failed("Spotify login failed.".to_string())
        );
    }

    #[test]
    fn missing_success_flag_is_a_plain_navigation() {
        assert_eq!(parse_callback("?user_id=x"), CallbackParams::Absent);
        assert_eq!(
            parse_callback("?auth_success=false&user_id=x"),
            CallbackParams::Absent
        );
        assert_eq!(parse_callback(""), CallbackParams::Absent);
    }

    #[test]
    fn empty_user_id_is_not_exchanged() {
        assert_eq!(
            parse_callback("?auth_success=true&user_id="),
            CallbackParams::Absent
        );
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        assert_eq!(
            parse_callback("?utm_source=mail&auth_success=true&user_id=abc"),
            CallbackParams::Authenticated {
                user_id: "abc".to_string()
            }
        );
    }
}
