//! Access to the stored bearer token.

/// Local storage key the login flow writes the token under.
pub const TOKEN_KEY: &str = "token";

/// The single place the rooms panel reads or drops its credential.
pub trait SessionStore {
    fn token(&self) -> Option<String>;

    /// Forgets the token, after logout or once the server rejected it.
    fn clear(&self);
}
