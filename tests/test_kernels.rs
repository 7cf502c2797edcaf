mod common;

use common::*;
use filterlab::get_kernel;

fn coefficients(family: FilterFamily, axis: Axis) -> [[f32; 3]; 3] {
    *get_kernel(Some(family), axis).unwrap().coefficients()
}

#[test]
fn test_directional_kernels_match_table() {
    assert_eq!(
        coefficients(FilterFamily::Sobel, Axis::X),
        [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]
    );
    assert_eq!(
        coefficients(FilterFamily::Sobel, Axis::Y),
        [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]]
    );
    assert_eq!(
        coefficients(FilterFamily::Prewitt, Axis::X),
        [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]]
    );
    assert_eq!(
        coefficients(FilterFamily::Prewitt, Axis::Y),
        [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]
    );
    assert_eq!(
        coefficients(FilterFamily::Scharr, Axis::X),
        [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]]
    );
    assert_eq!(
        coefficients(FilterFamily::Scharr, Axis::Y),
        [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]]
    );
}

#[test]
fn test_laplacian_ignores_axis() {
    let expected = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];
    for axis in [Axis::X, Axis::Y, Axis::NotApplicable] {
        assert_eq!(coefficients(FilterFamily::Laplacian, axis), expected);
    }
}

#[test]
fn test_y_kernels_are_transposed_x_kernels() {
    for family in [FilterFamily::Sobel, FilterFamily::Prewitt, FilterFamily::Scharr] {
        let x = coefficients(family, Axis::X);
        let y = coefficients(family, Axis::Y);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(x[r][c], y[c][r], "{family} at ({r}, {c})");
            }
        }
    }
}

#[test]
fn test_every_kernel_sums_to_zero_and_is_deterministic() {
    let families = [
        FilterFamily::Sobel,
        FilterFamily::Prewitt,
        FilterFamily::Scharr,
        FilterFamily::Laplacian,
    ];
    for family in families {
        for axis in [Axis::X, Axis::Y] {
            let first = get_kernel(Some(family), axis).unwrap();
            let second = get_kernel(Some(family), axis).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.sum(), 0.0, "{family} {axis}");
        }
    }
}

#[test]
fn test_undefined_family_is_invalid() {
    assert!(matches!(
        get_kernel(None, Axis::X),
        Err(LabError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_directional_family_needs_axis() {
    for family in [FilterFamily::Sobel, FilterFamily::Prewitt, FilterFamily::Scharr] {
        assert!(matches!(
            get_kernel(Some(family), Axis::NotApplicable),
            Err(LabError::InvalidConfiguration(_))
        ));
    }
}
