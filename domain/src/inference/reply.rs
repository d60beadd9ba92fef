//! Provider reply value object

/// Result of decoding a structurally successful provider response.
///
/// Provider strategies sniff the response shape once, at the transport
/// boundary, and hand back one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply {
    /// The model produced an answer
    Success(String),
    /// The provider embedded an application error in an otherwise successful response
    ProviderError(String),
    /// The response had a shape the strategy does not recognise; carries its rendering
    UnknownShape(String),
}

impl ProviderReply {
    /// The text to return to the user, if this reply ends the fallback loop
    pub fn answer_text(&self) -> Option<&str> {
        match self {
            ProviderReply::Success(text) | ProviderReply::UnknownShape(text) => Some(text),
            ProviderReply::ProviderError(_) => None,
        }
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, ProviderReply::ProviderError(_))
    }
}
