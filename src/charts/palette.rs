use serde::{Serialize, Serializer};

/// Plain RGB color shared by the native and web renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#1f77b4`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

const COLORS: [Rgb; 10] = [
    Rgb(31, 119, 180),  // Blue
    Rgb(255, 127, 14),  // Orange
    Rgb(44, 160, 44),   // Green
    Rgb(214, 39, 40),   // Red
    Rgb(148, 103, 189), // Purple
    Rgb(140, 86, 75),   // Brown
    Rgb(227, 119, 194), // Pink
    Rgb(127, 127, 127), // Gray
    Rgb(188, 189, 34),  // Yellow
    Rgb(23, 190, 207),  // Cyan
];

/// Color for the n-th category, cycling through the palette
pub fn series_color(index: usize) -> Rgb {
    COLORS[index % COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(series_color(0), series_color(10));
        assert_ne!(series_color(0), series_color(1));
        assert_eq!(series_color(0).hex(), "#1f77b4");
    }

    #[test]
    fn test_serializes_as_hex() {
        assert_eq!(serde_json::to_string(&Rgb(255, 127, 14)).unwrap(), "\"#ff7f0e\"");
    }
}
