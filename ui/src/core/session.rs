//! Read-only access to the persisted session token.
//!
//! The upload panel never knows where the token lives. Launchers provide a
//! [`TokenSource`] through context; the default reads `access_token` from
//! `localStorage` on the web and from `session.json` in the platform data
//! directory on native targets.

use std::rc::Rc;

/// Key the login flow stores the bearer token under.
pub const TOKEN_KEY: &str = "access_token";

pub trait SessionTokenSource {
    /// Current bearer token, if a session exists. Blank values count as absent.
    fn current_token(&self) -> Option<String>;
}

/// Cloneable handle suitable for Dioxus context.
#[derive(Clone)]
pub struct TokenSource(Rc<dyn SessionTokenSource>);

impl TokenSource {
    pub fn new<S: SessionTokenSource + 'static>(source: S) -> Self {
        Self(Rc::new(source))
    }

    pub fn current_token(&self) -> Option<String> {
        self.0.current_token()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::new(BrowserStorageToken)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        match SessionFileToken::in_data_dir() {
            Some(source) => Self::new(source),
            None => {
                tracing::warn!("no platform data directory; running without a session token");
                Self::new(StaticToken::none())
            }
        }
    }
}

/// Fixed token, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl SessionTokenSource for StaticToken {
    fn current_token(&self) -> Option<String> {
        non_blank(self.0.clone())
    }
}

fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserStorageToken;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{non_blank, SessionTokenSource, TOKEN_KEY};

    /// Reads the token from `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorageToken;

    impl SessionTokenSource for BrowserStorageToken {
        fn current_token(&self) -> Option<String> {
            let storage = web_sys::window()?.local_storage().ok()??;
            non_blank(storage.get_item(TOKEN_KEY).ok()?)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::SessionFileToken;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{non_blank, SessionTokenSource, TOKEN_KEY};

    const SESSION_FILE: &str = "session.json";

    /// Reads the token from a JSON object file, e.g. `{ "access_token": "..." }`.
    #[derive(Debug, Clone)]
    pub struct SessionFileToken {
        path: PathBuf,
    }

    impl SessionFileToken {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_data_dir() -> Option<Self> {
            ProjectDirs::from("app", "Datasense", "Datasense")
                .map(|dirs| Self::new(dirs.data_dir().join(SESSION_FILE)))
        }
    }

    impl SessionTokenSource for SessionFileToken {
        fn current_token(&self) -> Option<String> {
            let raw = match fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::debug!(path = %self.path.display(), %err, "no session file");
                    return None;
                }
            };

            match serde_json::from_str::<HashMap<String, serde_json::Value>>(&raw) {
                Ok(mut entries) => match entries.remove(TOKEN_KEY) {
                    Some(serde_json::Value::String(token)) => non_blank(Some(token)),
                    _ => None,
                },
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), %err, "session file is not valid JSON");
                    None
                }
            }
        }
    }
}
