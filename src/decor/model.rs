use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DEFAULT_DECORATION_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecorColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DecorColor {
    pub const WHITE: DecorColor = DecorColor::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB`. The leading `#` is optional.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for DecorColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DecorColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(DecorColor::parse_hex(&raw).unwrap_or_else(|| {
            tracing::warn!("invalid decoration color '{}'; using white", raw);
            DecorColor::WHITE
        }))
    }
}

/// Template for a decoration the user can pick from the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationKind {
    pub name: String,
    pub color: DecorColor,
    pub symbol: String,
    #[serde(default = "default_size")]
    pub size: f32,
}

fn default_size() -> f32 {
    DEFAULT_DECORATION_SIZE
}

impl DecorationKind {
    pub fn new(name: &str, color: DecorColor, symbol: &str, size: f32) -> Self {
        Self {
            name: name.to_string(),
            color,
            symbol: symbol.to_string(),
            size,
        }
    }

    /// First word of the name, shown under the palette entry.
    pub fn short_label(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

pub fn default_decorations() -> Vec<DecorationKind> {
    vec![
        DecorationKind::new("Star", DecorColor::rgb(0xFF, 0xD7, 0x00), "★", 25.0),
        DecorationKind::new("Ball Red", DecorColor::rgb(0xFF, 0x00, 0x00), "●", 20.0),
        DecorationKind::new("Ball Blue", DecorColor::rgb(0x00, 0x66, 0xFF), "●", 20.0),
        DecorationKind::new("Ball Gold", DecorColor::rgb(0xFF, 0xD7, 0x00), "●", 20.0),
        DecorationKind::new("Bell", DecorColor::rgb(0xC0, 0xC0, 0xC0), "🔔", 18.0),
        DecorationKind::new("Candy Cane", DecorColor::rgb(0xFF, 0x69, 0xB4), "🍭", 18.0),
        DecorationKind::new("Gift", DecorColor::rgb(0x00, 0xFF, 0x00), "🎁", 22.0),
        DecorationKind::new("Angel", DecorColor::WHITE, "👼", 20.0),
    ]
}

/// Index of a kind inside the [`Catalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub usize);

/// The fixed, read-only set of decoration kinds. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    kinds: Vec<DecorationKind>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new(default_decorations())
    }
}

impl Catalogue {
    pub fn new(kinds: Vec<DecorationKind>) -> Self {
        Self { kinds }
    }

    pub fn get(&self, id: KindId) -> Option<&DecorationKind> {
        self.kinds.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KindId, &DecorationKind)> {
        self.kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| (KindId(idx), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(
            DecorColor::parse_hex("#FF69B4"),
            Some(DecorColor::rgb(0xFF, 0x69, 0xB4))
        );
        assert_eq!(
            DecorColor::parse_hex("0066ff"),
            Some(DecorColor::rgb(0x00, 0x66, 0xFF))
        );
        assert_eq!(DecorColor::parse_hex("#FFF"), None);
        assert_eq!(DecorColor::parse_hex("#GG0000"), None);
    }

    #[test]
    fn invalid_color_in_json_falls_back_to_white() {
        let kind: DecorationKind =
            serde_json::from_str(r#"{"name":"Odd","color":"nope","symbol":"x"}"#).unwrap();
        assert_eq!(kind.color, DecorColor::WHITE);
        assert_eq!(kind.size, DEFAULT_DECORATION_SIZE);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&DecorColor::rgb(0xC0, 0xC0, 0xC0)).unwrap();
        assert_eq!(json, "\"#C0C0C0\"");
    }

    #[test]
    fn short_label_is_first_word() {
        let catalogue = Catalogue::default();
        let labels: Vec<&str> = catalogue.iter().map(|(_, k)| k.short_label()).collect();
        assert_eq!(
            labels,
            vec!["Star", "Ball", "Ball", "Ball", "Bell", "Candy", "Gift", "Angel"]
        );
    }
}
