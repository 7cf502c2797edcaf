//! Integration tests for the owned pixel buffer.

mod common;

use common::*;

#[test]
fn test_new_frame_is_zero_filled() -> anyhow::Result<()> {
    let frame = Frame::new(7, 5, 3)?;
    assert_eq!(frame.dimensions(), (7, 5));
    assert_eq!(frame.channels(), 3);
    assert_eq!(frame.as_raw().len(), 7 * 5 * 3);
    assert!(frame.as_raw().iter().all(|&v| v == 0));
    Ok(())
}

#[test]
fn test_clone_is_independent() -> anyhow::Result<()> {
    let original = horizontal_ramp(20, 10, 3);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set_sample(4, 4, 0, 200)?;
    assert_eq!(copy.sample(4, 4, 0)?, 200);
    assert_eq!(original.sample(4, 4, 0)?, 12);

    let mut original = original;
    original.set_sample(0, 1, 0, 99)?;
    assert_eq!(copy.sample(0, 1, 0)?, 3);
    Ok(())
}

#[test]
fn test_out_of_range_access_fails() -> anyhow::Result<()> {
    let mut frame = uniform_frame(4, 3, 10);

    assert!(matches!(frame.sample(3, 0, 0), Err(LabError::IndexOutOfRange { .. })));
    assert!(matches!(frame.sample(0, 4, 0), Err(LabError::IndexOutOfRange { .. })));
    assert!(matches!(frame.sample(0, 0, 1), Err(LabError::IndexOutOfRange { .. })));
    assert!(matches!(
        frame.set_sample(2, 4, 0, 1),
        Err(LabError::IndexOutOfRange { row: 2, col: 4, .. })
    ));
    assert_eq!(frame.sample(2, 3, 0)?, 10);
    Ok(())
}

#[test]
fn test_from_raw_validates_parts() {
    assert!(matches!(
        Frame::from_raw(2, 2, 1, vec![0; 3]),
        Err(LabError::BufferSizeMismatch { expected: 4, actual: 3 })
    ));
    assert!(matches!(Frame::new(2, 2, 2), Err(LabError::UnsupportedChannels(2))));
}

#[test]
fn test_resize_by_one_keeps_frame() -> anyhow::Result<()> {
    let frame = white_square(30);
    let resized = frame.resize_by_scale(1.0)?;
    assert_eq!(resized.dimensions(), frame.dimensions());
    assert_eq!(resized, frame);
    Ok(())
}

#[test]
fn test_resize_rounds_dimensions() -> anyhow::Result<()> {
    let frame = uniform_frame(100, 50, 80);

    let small = frame.resize_by_scale(0.15)?;
    assert_eq!(small.dimensions(), (15, 8));
    assert!(small.as_raw().iter().all(|&v| v == 80));

    let half = frame.resize_by_scale(0.5)?;
    assert_eq!(half.dimensions(), (50, 25));

    let tiny = uniform_frame(3, 3, 1).resize_by_scale(0.1)?;
    assert_eq!(tiny.dimensions(), (1, 1));
    Ok(())
}

#[test]
fn test_resize_rejects_bad_factor() {
    let frame = uniform_frame(10, 10, 0);
    for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            frame.resize_by_scale(factor),
            Err(LabError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn test_region_copies_subarea() -> anyhow::Result<()> {
    let frame = frame_from_fn(10, 8, |x, y| (y * 10 + x) as u8);
    let region = frame.region(2, 3, 4, 2)?;
    assert_eq!(region.dimensions(), (4, 2));
    assert_eq!(region.as_raw(), &[32, 33, 34, 35, 42, 43, 44, 45]);

    assert!(matches!(frame.region(8, 0, 3, 1), Err(LabError::IndexOutOfRange { .. })));
    Ok(())
}

#[test]
fn test_bgr_frame_converts_to_gray() -> anyhow::Result<()> {
    let mut bgr = Frame::new(2, 1, 3)?;
    for col in 0..2 {
        for channel in 0..3 {
            bgr.set_sample(0, col, channel, 120)?;
        }
    }
    let gray = bgr.to_gray()?;
    assert_eq!(gray.channels(), 1);
    assert_eq!(gray.as_raw(), &[120, 120]);

    let rgb = bgr.to_dynamic()?.to_rgb8();
    assert_eq!(rgb.get_pixel(1, 0).0, [120, 120, 120]);
    Ok(())
}
