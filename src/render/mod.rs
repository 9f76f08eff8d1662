// Rendering: turns word frequencies and scored graphs into image files.
//
// Each picture is a `Scene` that knows how to draw itself on any plotters
// backend. `render_to_file` picks the backend from the file extension: SVG
// always, PNG when built with the `png` feature.

pub mod colors;
pub mod graph;
pub mod layout;
pub mod wordcloud;

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::RenderError;

/// Something that can be drawn onto a fixed-size canvas.
pub trait Scene {
    /// Canvas size in pixels.
    fn size(&self) -> (u32, u32);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError>;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Choose a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" if cfg!(feature = "png") => Ok(OutputFormat::Png),
            _ => Err(RenderError::UnsupportedFormat(ext)),
        }
    }
}

/// Map any plotters drawing error into ours.
pub(crate) fn draw_err<E>(err: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Draw(err.to_string())
}

/// Draw `scene` into `path`, creating the parent directory if needed.
pub fn render_to_file<S: Scene>(scene: &S, path: &Path) -> Result<(), RenderError> {
    let format = OutputFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let size = scene.size();
    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            scene.draw(&root)?;
            root.present().map_err(draw_err)?;
        }
        OutputFormat::Png => render_png(scene, path, size)?,
    }

    info!(path = %path.display(), width = size.0, height = size.1, "Wrote image");
    Ok(())
}

#[cfg(feature = "png")]
fn render_png<S: Scene>(scene: &S, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    scene.draw(&root)?;
    root.present().map_err(draw_err)
}

#[cfg(not(feature = "png"))]
fn render_png<S: Scene>(_scene: &S, _path: &Path, _size: (u32, u32)) -> Result<(), RenderError> {
    Err(RenderError::UnsupportedFormat("png".to_string()))
}
