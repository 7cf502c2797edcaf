use crate::error::{LabError, Result};
use crate::models::{Axis, FilterFamily, Kernel};

pub const SOBEL_X: Kernel = Kernel::new([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]);
pub const SOBEL_Y: Kernel = Kernel::new([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]]);

pub const PREWITT_X: Kernel = Kernel::new([[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]]);
pub const PREWITT_Y: Kernel = Kernel::new([[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);

pub const SCHARR_X: Kernel =
    Kernel::new([[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]]);
pub const SCHARR_Y: Kernel =
    Kernel::new([[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]]);

pub const LAPLACIAN: Kernel =
    Kernel::new([[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]]);

/// Look up the coefficients for a family/axis pair.
///
/// `None` stands for a family that was never selected. Laplacian ignores
/// the axis; the directional families require `X` or `Y`.
pub fn get_kernel(family: Option<FilterFamily>, axis: Axis) -> Result<Kernel> {
    let family = family.ok_or_else(|| {
        LabError::InvalidConfiguration("no kernel family selected".to_string())
    })?;

    match (family, axis) {
        (FilterFamily::Laplacian, _) => Ok(LAPLACIAN),
        (FilterFamily::Sobel, Axis::X) => Ok(SOBEL_X),
        (FilterFamily::Sobel, Axis::Y) => Ok(SOBEL_Y),
        (FilterFamily::Prewitt, Axis::X) => Ok(PREWITT_X),
        (FilterFamily::Prewitt, Axis::Y) => Ok(PREWITT_Y),
        (FilterFamily::Scharr, Axis::X) => Ok(SCHARR_X),
        (FilterFamily::Scharr, Axis::Y) => Ok(SCHARR_Y),
        (family, Axis::NotApplicable) => Err(LabError::InvalidConfiguration(format!(
            "{family} kernel needs an X or Y axis"
        ))),
    }
}
