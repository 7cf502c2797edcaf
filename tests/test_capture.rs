mod common;

use common::*;
use filterlab::{CaptureSource, FileCapture, StillCapture};

#[tokio::test]
async fn test_file_capture_delivers_grayscale() -> anyhow::Result<()> {
    let img_file = create_test_image();
    let mut camera = FileCapture::new(img_file.path());

    let frame = camera.capture().await?;
    assert_eq!(frame.dimensions(), (100, 100));
    assert_eq!(frame.channels(), 1);
    let first = frame.as_raw()[0];
    assert!(frame.as_raw().iter().all(|&v| v == first));

    // The file can be captured again.
    let again = camera.capture().await?;
    assert_eq!(again, frame);
    Ok(())
}

#[tokio::test]
async fn test_file_capture_missing_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mut camera = FileCapture::new(dir.path().join("missing.png"));
    let result = camera.capture().await;
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("missing.png"), "got: {msg}");
}

#[tokio::test]
async fn test_still_capture_is_single_use() -> anyhow::Result<()> {
    let mut source = StillCapture::new(Frame::filled(4, 4, 3, 200)?);
    let frame = source.capture().await?;
    assert_eq!(frame.channels(), 1);
    assert!(source.capture().await.is_err());
    Ok(())
}
