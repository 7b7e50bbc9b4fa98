use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of page section a component represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Header,
    Hero,
    Section,
    Features,
    Testimonials,
    Contact,
    Footer,
    Custom,
}

impl ComponentType {
    pub const ALL: [ComponentType; 8] = [
        ComponentType::Header,
        ComponentType::Hero,
        ComponentType::Section,
        ComponentType::Features,
        ComponentType::Testimonials,
        ComponentType::Contact,
        ComponentType::Footer,
        ComponentType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Header => "header",
            ComponentType::Hero => "hero",
            ComponentType::Section => "section",
            ComponentType::Features => "features",
            ComponentType::Testimonials => "testimonials",
            ComponentType::Contact => "contact",
            ComponentType::Footer => "footer",
            ComponentType::Custom => "custom",
        }
    }

    /// Parses a free-form label, mapping anything unrecognized to `Custom`.
    pub fn from_label_or_custom(label: &str) -> Self {
        label.parse().unwrap_or(ComponentType::Custom)
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "header" => Ok(ComponentType::Header),
            "hero" => Ok(ComponentType::Hero),
            "section" => Ok(ComponentType::Section),
            "features" => Ok(ComponentType::Features),
            "testimonials" => Ok(ComponentType::Testimonials),
            "contact" => Ok(ComponentType::Contact),
            "footer" => Ok(ComponentType::Footer),
            "custom" => Ok(ComponentType::Custom),
            other => Err(format!("Invalid component type: {}", other)),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
