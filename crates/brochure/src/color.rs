/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }
}

pub const PRIMARY: Rgb = Rgb::from_hex(0x3b82f6);
pub const ACCENT: Rgb = Rgb::from_hex(0x10b981);
pub const TEXT: Rgb = Rgb::from_hex(0x1a1a1a);
pub const MUTED: Rgb = Rgb::from_hex(0x6b7280);
pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
