//! color and pixel primitives, plus the color distance used to rank candidates

use image::Rgb;

/// an RGB triple. channels are plain signed integers and are only clamped to the 8-bit range
/// when an image is encoded, so intermediate results (scaled patches, means) never saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// a grey with all channels set to `value`
    pub const fn grey(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// multiplies each channel by its own factor
    pub fn scale(self, red_scale: i32, green_scale: i32, blue_scale: i32) -> Self {
        Self::new(
            self.red.saturating_mul(red_scale),
            self.green.saturating_mul(green_scale),
            self.blue.saturating_mul(blue_scale),
        )
    }

    /// converts to an 8-bit pixel, clamping each channel into `[0, 255]`
    pub fn to_rgb8(self) -> Rgb<u8> {
        let clamp = |channel: i32| channel.clamp(u8::MIN as i32, u8::MAX as i32) as u8;
        Rgb([clamp(self.red), clamp(self.green), clamp(self.blue)])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb([red, green, blue]): Rgb<u8>) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }
}

impl From<[i32; 3]> for Color {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// a color read from a specific coordinate of an image. the coordinate is fixed at read time;
/// changing the color does not touch the image it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    x: usize,
    y: usize,
    pub color: Color,
}

impl Pixel {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// squared euclidean distance between `color` and the reference `(red, green, blue)`.
///
/// the square root is never taken since only the ordering of distances matters. the sum is
/// accumulated in 128 bits, so every pair of `i32` triples yields an exact distance.
pub fn squared_distance(color: Color, red: i32, green: i32, blue: i32) -> i128 {
    let delta = |channel: i32, reference: i32| i128::from(channel) - i128::from(reference);

    delta(color.red, red).pow(2)
        + delta(color.green, green).pow(2)
        + delta(color.blue, blue).pow(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_to_own_channels_is_zero() {
        assert_eq!(squared_distance(Color::GREEN, 0, 255, 0), 0);
    }

    #[test]
    fn distance_sums_squared_channel_deltas() {
        assert_eq!(squared_distance(Color::GREEN, 0, 255, 255), 65025);
        assert_eq!(squared_distance(Color::GREEN, 5, 255, 10), 125);
        assert_eq!(squared_distance(Color::BLACK, 255, 255, 255), 255 * 255 * 3);
    }

    #[test]
    fn distance_accepts_out_of_range_channels() {
        let color = Color::new(-10, 300, 0);
        assert_eq!(squared_distance(color, 10, 255, -5), 400 + 2025 + 25);
    }

    #[test]
    fn distance_is_exact_at_the_channel_extremes() {
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        let color = Color::new(i32::MAX, i32::MIN, i32::MAX);

        let expected = span.pow(2) + i128::from(i32::MIN).pow(2) + i128::from(i32::MAX).pow(2);
        assert_eq!(squared_distance(color, i32::MIN, 0, 0), expected);
        assert_eq!(
            squared_distance(Color::grey(i32::MAX), i32::MIN, i32::MIN, i32::MIN),
            3 * span.pow(2)
        );
        assert_eq!(squared_distance(Color::grey(i32::MIN), i32::MIN, i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn to_rgb8_clamps_channels() {
        assert_eq!(Color::new(-4, 128, 1000).to_rgb8(), Rgb([0, 128, 255]));
    }

    #[test]
    fn scale_multiplies_per_channel() {
        assert_eq!(Color::new(10, 20, 30).scale(0, 2, 3), Color::new(0, 40, 90));
    }

    fn channel() -> impl Strategy<Value = i32> {
        -1024i32..=1024
    }

    fn color() -> impl Strategy<Value = Color> {
        (channel(), channel(), channel()).prop_map(|(r, g, b)| Color::new(r, g, b))
    }

    proptest! {
        #[test]
        fn distance_is_never_negative(c in color(), r in channel(), g in channel(), b in channel()) {
            prop_assert!(squared_distance(c, r, g, b) >= 0);
        }

        #[test]
        fn distance_is_zero_only_for_equal_colors(a in color(), b in color()) {
            let distance = squared_distance(a, b.red, b.green, b.blue);
            prop_assert_eq!(distance == 0, a == b);
        }

        #[test]
        fn distance_is_symmetric(a in color(), b in color()) {
            prop_assert_eq!(
                squared_distance(a, b.red, b.green, b.blue),
                squared_distance(b, a.red, a.green, a.blue)
            );
        }
    }
}
