/// 24-bit color, renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a color from its `0xRRGGBB` representation.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self(r, g, b)
    }
}

/// Fill and outline colors handed to the renderer for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellColors {
    pub fill: Rgb,
    pub outline: Rgb,
}

impl CellColors {
    const BORDER: Rgb = Rgb::from_hex(0x9D_AD_86);

    pub const SNAKE: Self = Self {
        fill: Rgb::from_hex(0x0D_0D_05),
        outline: Self::BORDER,
    };

    pub const FOOD: Self = Self {
        fill: Rgb::from_hex(0x81_38_2F),
        outline: Self::BORDER,
    };
}
