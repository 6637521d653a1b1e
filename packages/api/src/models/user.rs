//! # Signed-in user
//!
//! [`User`] is what `GET /user` returns for the session cookie the browser
//! holds. The backend sends more columns (`id`, timestamps, verification
//! flags); only the fields the client displays are kept, the rest are
//! ignored during deserialisation.
//!
//! [`Credentials`] is the body of `POST /login`.

use serde::{Deserialize, Serialize};

/// Identity of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Email/password pair posted to `/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
