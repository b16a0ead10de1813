// src/pitch/color.rs

/// Plain sRGB triple; renderers convert to their own color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

// The classic named chart colors.
impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREY: Rgb = Rgb(128, 128, 128);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BROWN: Rgb = Rgb(165, 42, 42);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
}
