use std::sync::LazyLock;

// Relative lengths of the color transitions, chosen for perceptual
// similarity (more shades are distinguishable between red and yellow
// than between yellow and green).
const RY: usize = 15;
const YG: usize = 6;
const GC: usize = 4;
const CB: usize = 11;
const BM: usize = 13;
const MR: usize = 6;

/// Number of wheel entries.
pub const NCOLS: usize = RY + YG + GC + CB + BM + MR;

static SHARED: LazyLock<ColorWheel> = LazyLock::new(ColorWheel::middlebury);

/// Fixed 55-entry hue table mapping a direction angle to an RGB sample.
///
/// Built once, never mutated; safe to share across any number of
/// colorization calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorWheel {
    entries: [[u8; 3]; NCOLS],
}

impl ColorWheel {
    /// Build the Middlebury color wheel from its six linear ramp bands.
    ///
    /// Ramps use truncating integer division, matching the reference table
    /// exactly.
    pub fn middlebury() -> Self {
        let mut entries = [[0u8; 3]; NCOLS];
        let mut k = 0;

        for i in 0..RY {
            entries[k] = [255, (255 * i / RY) as u8, 0];
            k += 1;
        }
        for i in 0..YG {
            entries[k] = [(255 - 255 * i / YG) as u8, 255, 0];
            k += 1;
        }
        for i in 0..GC {
            entries[k] = [0, 255, (255 * i / GC) as u8];
            k += 1;
        }
        for i in 0..CB {
            entries[k] = [0, (255 - 255 * i / CB) as u8, 255];
            k += 1;
        }
        for i in 0..BM {
            entries[k] = [(255 * i / BM) as u8, 0, 255];
            k += 1;
        }
        for i in 0..MR {
            entries[k] = [255, 0, (255 - 255 * i / MR) as u8];
            k += 1;
        }

        debug_assert_eq!(k, NCOLS);
        Self { entries }
    }

    /// Process-wide wheel, built on first use behind a one-time guard.
    pub fn shared() -> &'static ColorWheel {
        &SHARED
    }

    /// RGB sample at `index`; callers keep `index < NCOLS` by construction.
    pub fn entry(&self, index: usize) -> [u8; 3] {
        self.entries[index]
    }

    pub fn entries(&self) -> &[[u8; 3]; NCOLS] {
        &self.entries
    }
}
