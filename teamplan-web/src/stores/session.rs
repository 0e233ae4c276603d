use gloo_storage::{LocalStorage, Storage};
use shared::models::TokenPair;
use yewdux::{Context, Dispatch, Store};

/// Local-storage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Local-storage key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The client's belief about whether the current user is authenticated.
///
/// The flag is a cached value: it is derived from token presence once at
/// startup and afterwards changes only through [`login`] and [`logout`],
/// never by re-reading storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStore {
    /// Whether the current user is signed in.
    pub is_logged_in: bool,
}

impl Store for SessionStore {
    fn new(_cx: &Context) -> Self {
        Self::bootstrap()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl SessionStore {
    /// Derive the initial session state from persisted token presence.
    ///
    /// Any context without working storage (sandboxed browser, native
    /// test build) reads as "no token" rather than an error.
    #[must_use]
    pub fn bootstrap() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let token: Option<String> = LocalStorage::get(ACCESS_TOKEN_KEY).ok();
            Self {
                is_logged_in: token.is_some_and(|token| !token.is_empty()),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

/// Read the stored access token, if any.
#[must_use]
pub fn access_token() -> Option<String> {
    LocalStorage::get(ACCESS_TOKEN_KEY)
        .ok()
        .filter(|token: &String| !token.is_empty())
}

/// Read the stored refresh token, if any.
#[must_use]
pub fn refresh_token() -> Option<String> {
    LocalStorage::get(REFRESH_TOKEN_KEY)
        .ok()
        .filter(|token: &String| !token.is_empty())
}

/// Persist a freshly issued token pair.
pub fn persist_tokens(tokens: &TokenPair) {
    let _ = LocalStorage::set(ACCESS_TOKEN_KEY, &tokens.access_token);
    let _ = LocalStorage::set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
}

/// Mark the session authenticated. Persisting the token pair is the
/// caller's responsibility, done before this call.
pub fn login(dispatch: &Dispatch<SessionStore>) {
    dispatch.set(SessionStore { is_logged_in: true });
}

/// Drop both persisted tokens, then clear the flag. Runs synchronously,
/// so no subscriber can observe the flag and storage disagreeing.
pub fn logout(dispatch: &Dispatch<SessionStore>) {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
    LocalStorage::delete(REFRESH_TOKEN_KEY);
    dispatch.set(SessionStore { is_logged_in: false });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fresh store reads as signed out
    #[test]
    fn test_default_is_signed_out() {
        assert!(!SessionStore::default().is_logged_in);
    }

    /// login() flips the flag regardless of prior state
    #[test]
    fn test_login_sets_flag() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionStore>::new(&cx);
        assert!(!dispatch.get().is_logged_in);

        login(&dispatch);
        assert!(dispatch.get().is_logged_in);

        // Repeating the call is a no-op transition, not an error.
        login(&dispatch);
        assert!(dispatch.get().is_logged_in);
    }

    /// Stores under different contexts do not share state
    #[test]
    fn test_contexts_are_isolated() {
        let first = yewdux::Context::new();
        let second = yewdux::Context::new();
        login(&Dispatch::<SessionStore>::new(&first));
        assert!(Dispatch::<SessionStore>::new(&first).get().is_logged_in);
        assert!(!Dispatch::<SessionStore>::new(&second).get().is_logged_in);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn bootstrap_reads_token_presence() {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        assert!(!SessionStore::bootstrap().is_logged_in);

        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, "abc");
        assert!(SessionStore::bootstrap().is_logged_in);

        LocalStorage::delete(ACCESS_TOKEN_KEY);
    }

    #[wasm_bindgen_test]
    fn bootstrap_treats_empty_token_as_absent() {
        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, "");
        assert!(!SessionStore::bootstrap().is_logged_in);
        LocalStorage::delete(ACCESS_TOKEN_KEY);
    }

    #[wasm_bindgen_test]
    fn logout_purges_both_tokens_and_clears_flag() {
        persist_tokens(&TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        });
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionStore>::new(&cx);
        login(&dispatch);

        logout(&dispatch);

        assert!(!dispatch.get().is_logged_in);
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());
    }
}
