//! Model value object representing an upstream LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upstream LLM models (Value Object)
///
/// Known identifiers for the providers llm-qa ships defaults for. Any other
/// identifier is carried as [`Model::Custom`] and sent upstream verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // DeepSeek
    DeepSeekChat,
    // Groq
    Llama3_8b,
    // OpenAI
    Gpt4oMini,
    // Hugging Face Inference
    Mistral7bInstruct,
    Zephyr7bBeta,
    FlanT5Large,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepSeekChat => "deepseek-chat",
            Model::Llama3_8b => "llama3-8b-8192",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Mistral7bInstruct => "mistralai/Mistral-7B-Instruct-v0.2",
            Model::Zephyr7bBeta => "HuggingFaceH4/zephyr-7b-beta",
            Model::FlanT5Large => "google/flan-t5-large",
            Model::Custom(s) => s,
        }
    }

    /// Default fallback candidates for the Hugging Face Inference API, in order
    pub fn hugging_face_candidates() -> Vec<Model> {
        vec![
            Model::Mistral7bInstruct,
            Model::Zephyr7bBeta,
            Model::FlanT5Large,
        ]
    }

    /// Check if this is a Hugging Face hosted model (`owner/name` form)
    pub fn is_hugging_face(&self) -> bool {
        match self {
            Model::Mistral7bInstruct | Model::Zephyr7bBeta | Model::FlanT5Large => true,
            Model::Custom(s) => s.contains('/'),
            _ => false,
        }
    }
}

impl Default for Model {
    /// Returns the default model (deepseek-chat)
    fn default() -> Self {
        Model::DeepSeekChat
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "deepseek-chat" => Model::DeepSeekChat,
            "llama3-8b-8192" => Model::Llama3_8b,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "mistralai/Mistral-7B-Instruct-v0.2" => Model::Mistral7bInstruct,
            "HuggingFaceH4/zephyr-7b-beta" => Model::Zephyr7bBeta,
            "google/flan-t5-large" => Model::FlanT5Large,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
