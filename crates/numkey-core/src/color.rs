#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// Components in `0.0..=1.0`, clamped.
    pub fn from_rgb_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn q(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Color(q(r), q(g), q(b), q(a))
    }
}
