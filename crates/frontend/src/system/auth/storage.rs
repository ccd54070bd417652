use contracts::system::auth::Session;
use web_sys::window;

const SESSION_KEY: &str = "admin_session";
const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the session left by the login flow.
///
/// A full session object is preferred; a bare access token is accepted too.
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;

    if let Some(raw) = storage.get_item(SESSION_KEY).ok()? {
        match parse_session(&raw) {
            Some(session) => return Some(session),
            None => log::warn!("stored session is not valid JSON, ignoring it"),
        }
    }

    storage
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
        .map(Session::new)
}

/// Remove every stored credential
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

pub fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw)
        .ok()
        .filter(|s| !s.access_token.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let session =
            parse_session(r#"{"accessToken":"abc","user":{"_id":"u1","name":"Ann","email":"a@x.io","role":"admin"}}"#)
                .unwrap();
        assert_eq!(session.bearer(), "Bearer abc");
        assert_eq!(session.display_name(), "Ann");

        assert!(parse_session(r#"{"accessToken":"  "}"#).is_none());
        assert!(parse_session("not json").is_none());
    }
}
