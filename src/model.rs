use crate::error::{FlovizError, FlovizResult};

/// Components at or above this magnitude mark a vector as unknown flow.
///
/// This is the Middlebury missing-value convention for the `.flo` format,
/// together with NaN components.
pub const UNKNOWN_FLOW_THRESH: f32 = 1e9;

/// Per-pixel 2D displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowVector {
    /// Horizontal displacement in pixels.
    pub dx: f32,
    /// Vertical displacement in pixels.
    pub dy: f32,
}

impl FlowVector {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Return `true` when both components carry real flow data.
    ///
    /// NaN or huge-magnitude components are the format's "no flow here"
    /// sentinel and must be skipped by consumers.
    pub fn is_valid(self) -> bool {
        !(self.dx.is_nan()
            || self.dy.is_nan()
            || self.dx.abs() >= UNKNOWN_FLOW_THRESH
            || self.dy.abs() >= UNKNOWN_FLOW_THRESH)
    }

    /// Squared magnitude `dx*dx + dy*dy`.
    pub fn magnitude_sq(self) -> f32 {
        self.dx * self.dx + self.dy * self.dy
    }
}

/// A decoded flow field: a `width`×`height` grid of displacement vectors,
/// row-major. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    width: u32,
    height: u32,
    vectors: Vec<FlowVector>,
}

impl FlowField {
    /// Create a validated field with `width*height` vectors, row-major.
    pub fn new(width: u32, height: u32, vectors: Vec<FlowVector>) -> FlovizResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlovizError::format("width and height must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| FlovizError::format("width*height overflows"))?;
        if vectors.len() != expected {
            return Err(FlovizError::format(format!(
                "vector buffer length {} does not match {}x{} field",
                vectors.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            vectors,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Vector at `(x, y)`; callers index within bounds by construction.
    pub fn get(&self, x: u32, y: u32) -> FlowVector {
        self.vectors[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// All vectors in row-major order.
    pub fn vectors(&self) -> &[FlowVector] {
        &self.vectors
    }
}
