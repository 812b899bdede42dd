//! Admin credentials and the account the suite creates.

use secrecy::SecretString;
use serde::Deserialize;

use super::email::Email;

/// Login data for the admin backend.
///
/// Deserialized from `data.json`:
///
/// ```json
/// {
///   "user": "admin",
///   "password": "...",
///   "wrong_password": "...",
///   "new_user": "e2e-user",
///   "new_password": "...",
///   "new_email": "e2e-user@example.com"
/// }
/// ```
///
/// Implements `Debug` manually to redact passwords.
#[derive(Clone, Deserialize)]
#[serde(from = "RawCredentials")]
pub struct Credentials {
    /// Existing admin username.
    pub user: String,
    /// Password for [`Self::user`].
    pub password: SecretString,
    /// A password the backend must reject for [`Self::user`].
    pub wrong_password: SecretString,
    /// Username for the account created through the admin panel.
    pub new_user: String,
    /// Password for [`Self::new_user`].
    pub new_password: SecretString,
    /// Email for [`Self::new_user`].
    pub new_email: Email,
}

#[derive(Deserialize)]
struct RawCredentials {
    user: String,
    password: String,
    wrong_password: String,
    new_user: String,
    new_password: String,
    new_email: Email,
}

impl From<RawCredentials> for Credentials {
    fn from(raw: RawCredentials) -> Self {
        Self {
            user: raw.user,
            password: SecretString::from(raw.password),
            wrong_password: SecretString::from(raw.wrong_password),
            new_user: raw.new_user,
            new_password: SecretString::from(raw.new_password),
            new_email: raw.new_email,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("wrong_password", &"[REDACTED]")
            .field("new_user", &self.new_user)
            .field("new_password", &"[REDACTED]")
            .field("new_email", &self.new_email)
            .finish()
    }
}
