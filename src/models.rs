use serde::{Serialize, Deserialize};
use serde_with::skip_serializing_none;
use std::fmt;

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub response: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framework {
    #[default]
    React,
    Vue,
    Svelte,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Svelte];

    pub fn as_str(self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
        }
    }

    /// File extension used when the generated code is downloaded.
    pub fn extension(self) -> &'static str {
        match self {
            Framework::React => "tsx",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Styling {
    #[default]
    Tailwind,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "Styled-components")]
    StyledComponents,
}

impl Styling {
    pub const ALL: [Styling; 3] = [Styling::Tailwind, Styling::Css, Styling::StyledComponents];

    pub fn as_str(self) -> &'static str {
        match self {
            Styling::Tailwind => "Tailwind",
            Styling::Css => "CSS",
            Styling::StyledComponents => "Styled-components",
        }
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// What the user asked for in one generation action.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub description: String,
    pub framework: Framework,
    pub styling: Styling,
}

/// The latest successful generation. Only one is ever kept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratedComponent {
    pub id: i64,
    pub description: String,
    pub framework: Framework,
    pub styling: Styling,
    pub code: String,
    pub timestamp: String,
}
