//! User profile records.

use super::payload::RawUser;

/// Display information for a pull request author or reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Login handle.
    pub handle: String,

    /// Display name, the handle when the user has none.
    pub name: String,

    pub avatar_url: String,

    /// HTML profile URL.
    pub profile_url: String,
}

#[must_use]
pub fn parse_user(raw: RawUser) -> UserProfile {
    let name = raw
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| raw.login.clone());

    UserProfile {
        handle: raw.login,
        name,
        avatar_url: raw.avatar_url,
        profile_url: raw.html_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_user(name: serde_json::Value) -> RawUser {
        serde_json::from_value(json!({
            "login": "octocat",
            "name": name,
            "avatar_url": "https://avatars.example.com/u/1",
            "html_url": "https://github.com/octocat"
        }))
        .unwrap()
    }

    #[test]
    fn keeps_display_name() {
        let profile = parse_user(raw_user(json!("The Octocat")));
        assert_eq!(profile.name, "The Octocat");
        assert_eq!(profile.profile_url, "https://github.com/octocat");
    }

    #[test]
    fn falls_back_to_handle() {
        assert_eq!(parse_user(raw_user(serde_json::Value::Null)).name, "octocat");
        assert_eq!(parse_user(raw_user(json!(""))).name, "octocat");
    }
}
