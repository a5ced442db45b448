//! Chat components and the `§` formatting-code text format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Formatting-code prefix character.
pub const SECTION: char = '§';

/// The sixteen named chat colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Self::Black => 0x000000,
            Self::DarkBlue => 0x0000AA,
            Self::DarkGreen => 0x00AA00,
            Self::DarkAqua => 0x00AAAA,
            Self::DarkRed => 0xAA0000,
            Self::DarkPurple => 0xAA00AA,
            Self::Gold => 0xFFAA00,
            Self::Gray => 0xAAAAAA,
            Self::DarkGray => 0x555555,
            Self::Blue => 0x5555FF,
            Self::Green => 0x55FF55,
            Self::Aqua => 0x55FFFF,
            Self::Red => 0xFF5555,
            Self::LightPurple => 0xFF55FF,
            Self::Yellow => 0xFFFF55,
            Self::White => 0xFFFFFF,
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The named colour closest to `rgb` by squared channel distance.
    #[must_use]
    pub fn nearest(rgb: u32) -> Self {
        let channels = |c: u32| {
            (
                ((c >> 16) & 0xFF) as i32,
                ((c >> 8) & 0xFF) as i32,
                (c & 0xFF) as i32,
            )
        };
        let (r, g, b) = channels(rgb);
        Self::ALL
            .into_iter()
            .min_by_key(|named| {
                let (nr, ng, nb) = channels(named.rgb());
                (r - nr).pow(2) + (g - ng).pow(2) + (b - nb).pow(2)
            })
            .unwrap_or(Self::White)
    }
}

/// A chat colour: named, or an exact `#rrggbb` value (1.16+ clients only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChatColor {
    Named(NamedColor),
    Hex(u32),
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.name()),
            Self::Hex(rgb) => write!(f, "#{rgb:06X}"),
        }
    }
}

impl TryFrom<String> for ChatColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(hex) = value.strip_prefix('#') {
            return u32::from_str_radix(hex, 16)
                .ok()
                .filter(|_| hex.len() == 6)
                .map(Self::Hex)
                .ok_or_else(|| format!("invalid hex colour {value:?}"));
        }
        NamedColor::from_name(&value)
            .map(Self::Named)
            .ok_or_else(|| format!("unknown colour {value:?}"))
    }
}

impl From<ChatColor> for String {
    fn from(color: ChatColor) -> Self {
        color.to_string()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// A styled chat text node with optional children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatComponent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ChatColor>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub obfuscated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<ChatComponent>,
}

impl ChatComponent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChatColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Parses `§`-coded text into components, one per styled run.
    ///
    /// A colour code resets any active formatting; `§r` resets everything.
    /// Hex colours use the `§x§r§r§g§g§b§b` form.
    #[must_use]
    pub fn from_legacy_text(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let mut runs = Vec::new();
        let mut style = Self::default();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c != SECTION || i + 1 >= chars.len() {
                style.text.push(c);
                i += 1;
                continue;
            }

            let code = chars[i + 1].to_ascii_lowercase();
            if code == 'x' {
                if let Some(rgb) = parse_hex_sequence(&chars[i + 2..]) {
                    flush_run(&mut runs, &mut style);
                    style = Self::default().with_color(ChatColor::Hex(rgb));
                    i += 14;
                    continue;
                }
            }

            if let Some(named) = NamedColor::from_code(code) {
                flush_run(&mut runs, &mut style);
                style = Self::default().with_color(ChatColor::Named(named));
                i += 2;
                continue;
            }

            let known = matches!(code, 'k'..='o' | 'r');
            if known {
                flush_run(&mut runs, &mut style);
                match code {
                    'k' => style.obfuscated = true,
                    'l' => style.bold = true,
                    'm' => style.strikethrough = true,
                    'n' => style.underlined = true,
                    'o' => style.italic = true,
                    _ => style = Self::default(),
                }
                i += 2;
                continue;
            }

            style.text.push(c);
            i += 1;
        }
        flush_run(&mut runs, &mut style);

        match runs.len() {
            0 => Self::default(),
            1 => runs.remove(0),
            _ => Self {
                extra: runs,
                ..Self::default()
            },
        }
    }

    /// Concatenated text of this node and all descendants, without styling.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.extra {
            out.push_str(&child.to_plain_text());
        }
        out
    }

    /// Replaces every hex colour in the tree with its nearest named colour.
    pub fn downgrade_hex_colors(&mut self) {
        if let Some(ChatColor::Hex(rgb)) = self.color {
            self.color = Some(ChatColor::Named(NamedColor::nearest(rgb)));
        }
        for child in &mut self.extra {
            child.downgrade_hex_colors();
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn flush_run(runs: &mut Vec<ChatComponent>, style: &mut ChatComponent) {
    if style.text.is_empty() {
        return;
    }
    let mut run = style.clone();
    style.text.clear();
    run.extra.clear();
    runs.push(run);
}

/// Reads `§r§r§g§g§b§b` following a `§x`.
fn parse_hex_sequence(chars: &[char]) -> Option<u32> {
    if chars.len() < 12 {
        return None;
    }
    let mut rgb = 0u32;
    for pair in chars[..12].chunks(2) {
        if pair[0] != SECTION {
            return None;
        }
        rgb = (rgb << 4) | pair[1].to_digit(16)?;
    }
    Some(rgb)
}
