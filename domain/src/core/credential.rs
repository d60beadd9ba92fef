//! Credential value object

use super::error::DomainError;

/// An opaque API key or bearer token (Value Object)
///
/// The secret never appears in `Debug` output, so credentials can travel
/// through structs that are logged with `{:?}`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Try to create a credential from a raw key.
    ///
    /// Surrounding whitespace is trimmed; a blank key is rejected with
    /// [`DomainError::MissingCredential`].
    pub fn try_new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into();
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingCredential);
        }
        Ok(Self {
            secret: trimmed.to_string(),
        })
    }

    /// Pick the first non-blank key out of several sources, in priority order.
    pub fn first_present<'a>(
        sources: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        sources
            .into_iter()
            .flatten()
            .find_map(|s| Self::try_new(s).ok())
            .ok_or(DomainError::MissingCredential)
    }

    /// Expose the secret, e.g. to build an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
