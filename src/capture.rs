use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::frame::Frame;

/// Something that can deliver a still grayscale frame on demand.
///
/// Acquisition may complete on another execution context; everything after
/// delivery is synchronous.
#[allow(async_fn_in_trait)]
pub trait CaptureSource {
    async fn capture(&mut self) -> anyhow::Result<Frame>;
}

/// Reads and decodes an image file on a blocking worker thread.
#[derive(Debug, Clone)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaptureSource for FileCapture {
    async fn capture(&mut self) -> anyhow::Result<Frame> {
        let path = self.path.clone();
        let gray = tokio::task::spawn_blocking(move || image::open(&path).map(|img| img.to_luma8()))
            .await
            .context("capture worker panicked")?
            .with_context(|| format!("failed to decode image {}", self.path.display()))?;

        debug!(path = %self.path.display(), width = gray.width(), height = gray.height(), "frame captured");
        Ok(Frame::from_gray(gray))
    }
}

/// Hands out one pre-built frame, then reports that nothing is left.
#[derive(Debug, Clone)]
pub struct StillCapture {
    frame: Option<Frame>,
}

impl StillCapture {
    pub fn new(frame: Frame) -> Self {
        Self { frame: Some(frame) }
    }
}

impl CaptureSource for StillCapture {
    async fn capture(&mut self) -> anyhow::Result<Frame> {
        let frame = self
            .frame
            .take()
            .ok_or_else(|| anyhow::anyhow!("still capture already consumed"))?;
        frame.to_gray().map_err(Into::into)
    }
}
