//! Chat component serialization for the running release.

use ady_core::{ChatComponent, PlatformVersion};
use serde::Serialize;

use crate::error::Result;

/// Which chat serializer the release ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatSerializer {
    /// The shared component serializer of 1.17 onwards.
    Universal,
    /// The per-release serializer. Hex colours arrived in 1.16.
    Legacy { hex_colors: bool },
}

impl ChatSerializer {
    #[must_use]
    pub fn for_version(version: PlatformVersion) -> Self {
        if version.is_universal() {
            Self::Universal
        } else {
            Self::Legacy {
                hex_colors: version >= PlatformVersion::V1_16,
            }
        }
    }

    #[must_use]
    pub const fn supports_hex(self) -> bool {
        match self {
            Self::Universal => true,
            Self::Legacy { hex_colors } => hex_colors,
        }
    }

    /// Serialize `component` to the JSON the release's clients accept.
    pub fn to_json(self, component: &ChatComponent) -> Result<String> {
        if self.supports_hex() {
            return Ok(component.to_json()?);
        }
        let mut component = component.clone();
        component.downgrade_hex_colors();
        Ok(component.to_json()?)
    }

    /// Parse `§`-formatted text into a component.
    #[must_use]
    pub fn from_string(self, text: &str) -> ChatComponent {
        let mut component = ChatComponent::from_legacy_text(text);
        if !self.supports_hex() {
            component.downgrade_hex_colors();
        }
        component
    }
}

#[cfg(test)]
mod tests {
    use ady_core::{ChatColor, NamedColor};

    use super::*;

    #[test]
    fn serializer_per_release() {
        assert_eq!(
            ChatSerializer::for_version(PlatformVersion::V1_12),
            ChatSerializer::Legacy { hex_colors: false }
        );
        assert_eq!(
            ChatSerializer::for_version(PlatformVersion::V1_16),
            ChatSerializer::Legacy { hex_colors: true }
        );
        assert_eq!(
            ChatSerializer::for_version(PlatformVersion::V1_17),
            ChatSerializer::Universal
        );
    }

    #[test]
    fn old_releases_lose_hex() {
        let component = ChatComponent::text("hi").with_color(ChatColor::Hex(0xFF5555));
        let legacy = ChatSerializer::Legacy { hex_colors: false };
        assert_eq!(
            legacy.to_json(&component).unwrap(),
            r#"{"text":"hi","color":"red"}"#
        );
        assert_eq!(
            ChatSerializer::Universal.to_json(&component).unwrap(),
            r##"{"text":"hi","color":"#FF5555"}"##
        );
    }

    #[test]
    fn from_string_parses_codes() {
        let component = ChatSerializer::Universal.from_string("§cdanger");
        assert_eq!(component.to_plain_text(), "danger");
        assert_eq!(component.color, Some(ChatColor::Named(NamedColor::Red)));

        let legacy = ChatSerializer::Legacy { hex_colors: false };
        let downgraded = legacy.from_string("§x§f§f§5§5§5§5hot");
        assert_eq!(downgraded.color, Some(ChatColor::Named(NamedColor::Red)));
    }
}
