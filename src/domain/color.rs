/// Renderer-independent 8-bit colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel `255 - c`, alpha kept opaque
    pub const fn complement(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const SALMON: Rgba = Rgba::rgb(255, 128, 128);
/// Dark slate used behind the click lessons
pub const SLATE: Rgba = Rgba::rgb(30, 30, 40);
pub const GRID_LINE: Rgba = Rgba::rgb(80, 80, 100);
pub const AMBER: Rgba = Rgba::rgb(255, 200, 0);
/// Translucent orange for the clicked-cell highlight
pub const HIGHLIGHT: Rgba = Rgba::rgba(255, 128, 0, 100);

/// Background that cycles through colours as three phase-shifted sine waves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCycle {
    /// Radians per frame for r, g, b
    pub frequencies: [f64; 3],
}

impl ColorCycle {
    pub const fn new(frequencies: [f64; 3]) -> Self {
        Self { frequencies }
    }

    fn channel(frame: u64, frequency: f64) -> u8 {
        // sin in [-1, 1] keeps this in [1, 255]
        ((frame as f64 * frequency).sin() * 127.0 + 128.0) as u8
    }

    /// Colour at the given frame
    pub fn at(&self, frame: u64) -> Rgba {
        let [fr, fg, fb] = self.frequencies;
        Rgba::rgb(
            Self::channel(frame, fr),
            Self::channel(frame, fg),
            Self::channel(frame, fb),
        )
    }

    /// Period in frames of each channel
    pub fn periods(&self) -> [f64; 3] {
        self.frequencies.map(|f| std::f64::consts::TAU / f)
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new([0.02, 0.03, 0.04])
    }
}
