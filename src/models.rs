use std::fmt;

use clap::ValueEnum;

/// Family of 3x3 kernels offered for convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FilterFamily {
    Sobel,
    Prewitt,
    Scharr,
    Laplacian,
}

impl FilterFamily {
    /// Laplacian is isotropic and skips axis selection.
    pub fn needs_axis(self) -> bool {
        !matches!(self, FilterFamily::Laplacian)
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterFamily::Sobel => "Sobel",
            FilterFamily::Prewitt => "Prewitt",
            FilterFamily::Scharr => "Scharr",
            FilterFamily::Laplacian => "Laplacian",
        };
        f.write_str(name)
    }
}

/// Derivative direction of a directional kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Axis {
    X,
    Y,
    #[value(skip)]
    NotApplicable,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::NotApplicable => "n/a",
        };
        f.write_str(name)
    }
}

/// Single-purpose feature detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Detector {
    /// Canny hysteresis edge map
    #[value(alias = "canny")]
    Edge,
    /// Harris cornerness map with marked corners
    #[value(alias = "harris")]
    Corner,
    /// Hough circle overlay
    #[value(alias = "hough")]
    Circle,
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Detector::Edge => "Canny edges",
            Detector::Corner => "Harris corners",
            Detector::Circle => "Hough circles",
        };
        f.write_str(name)
    }
}

/// Convolution execution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Naive nested-loop convolution on a downscaled copy
    #[value(alias = "manual")]
    Direct,
    /// Full-resolution, zero-padded filtering
    Filter2d,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Direct => "direct",
            Strategy::Filter2d => "filter2D",
        };
        f.write_str(name)
    }
}

/// Fixed 3x3 matrix of coefficients, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel([[f32; 3]; 3]);

impl Kernel {
    pub const fn new(coefficients: [[f32; 3]; 3]) -> Self {
        Self(coefficients)
    }

    pub fn coefficients(&self) -> &[[f32; 3]; 3] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row][col]
    }

    pub fn sum(&self) -> f32 {
        self.0.iter().flatten().sum()
    }
}
