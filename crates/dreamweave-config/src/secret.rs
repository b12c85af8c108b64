use secrecy::{ExposeSecret, SecretString};

/// Treat an empty or whitespace-only secret as unset
///
/// Lets `{{ env.VAR | default("") }}` express an optional credential.
pub(crate) fn present(secret: Option<&SecretString>) -> Option<&SecretString> {
    secret.filter(|s| !s.expose_secret().trim().is_empty())
}
