/// Tolerances used while sampling and checking curve frames.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Vectors shorter than this cannot be normalized.
    pub length: f64,
    /// Allowed deviation from unit length and orthogonality in a frame.
    pub frame: f64,
}

impl Tolerance {
    pub const DEFAULT_LENGTH: f64 = 1e-9;
    pub const DEFAULT_FRAME: f64 = 1e-6;

    pub fn new(length: f64, frame: f64) -> Self {
        Self { length, frame }
    }

    pub fn default_precision() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            frame: Self::DEFAULT_FRAME,
        }
    }

    /// Check if a length is too small to normalize
    pub fn is_degenerate(self, len: f64) -> bool {
        len < self.length
    }

    /// Check if a value is zero within frame tolerance
    pub fn frame_zero(self, v: f64) -> bool {
        v.abs() < self.frame
    }

    /// Check if a length is one within frame tolerance
    pub fn frame_unit(self, len: f64) -> bool {
        (len - 1.0).abs() < self.frame
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
