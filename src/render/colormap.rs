//! Named colormaps mapping a fraction to an RGB color
//!
//! The palettes approximate the matplotlib perceptually-uniform maps with
//! sparse anchor tables and linear interpolation, which is plenty for
//! coloring discrete words.

/// Sequential colormap selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Blue-green-yellow
    #[default]
    Viridis,
    /// Purple-orange-yellow
    Plasma,
    /// Black-red-yellow
    Inferno,
    /// Black-purple-cream
    Magma,
    /// Blue-gray-yellow, color-vision-deficiency friendly
    Cividis,
}

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

const PLASMA: &[[u8; 3]] = &[
    [13, 8, 135],
    [84, 2, 163],
    [139, 10, 165],
    [185, 50, 137],
    [219, 92, 104],
    [244, 136, 73],
    [254, 188, 43],
    [240, 249, 33],
];

const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [40, 11, 84],
    [101, 21, 110],
    [159, 42, 99],
    [212, 72, 66],
    [245, 125, 21],
    [250, 193, 39],
    [252, 255, 164],
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const CIVIDIS: &[[u8; 3]] = &[
    [0, 32, 76],
    [0, 42, 102],
    [51, 62, 110],
    [87, 83, 109],
    [118, 104, 110],
    [151, 126, 104],
    [187, 150, 91],
    [223, 176, 67],
    [255, 234, 70],
];

impl Colormap {
    const fn anchors(self) -> &'static [[u8; 3]] {
        match self {
            Self::Viridis => VIRIDIS,
            Self::Plasma => PLASMA,
            Self::Inferno => INFERNO,
            Self::Magma => MAGMA,
            Self::Cividis => CIVIDIS,
        }
    }

    /// Sample the map at fraction `t`, clamped to [0, 1]
    pub fn sample(self, t: f64) -> [u8; 3] {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);
        let segments = anchors.len() - 1;
        let position = t * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let frac = position - index as f64;

        let low = anchors.get(index).copied().unwrap_or([0, 0, 0]);
        let high = anchors.get(index + 1).copied().unwrap_or(low);

        let mut color = [0u8; 3];
        for channel in 0..3 {
            let a = low.get(channel).copied().unwrap_or(0) as f64;
            let b = high.get(channel).copied().unwrap_or(0) as f64;
            if let Some(out) = color.get_mut(channel) {
                *out = (a + (b - a) * frac).round() as u8;
            }
        }
        color
    }
}
