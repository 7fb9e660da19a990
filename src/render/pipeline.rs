use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    foundation::error::{BlobError, BlobResult},
    foundation::random::RandomSource,
    render::raster::{FrameRgba, rasterize_svg},
    render::svg::render_svg,
    runtime::animator::Animator,
};

/// File format for exported frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick a format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> BlobResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(BlobError::validation(format!(
                "cannot infer output format from '{}' (expected .svg or .png)",
                path.display()
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Options for [`export_sequence`].
#[derive(Clone, Debug)]
pub struct SequenceOpts {
    pub frames: u64,
    pub format: OutputFormat,
    /// Raster size; ignored for SVG output.
    pub width: u32,
    pub height: u32,
    /// Worker threads for rasterization; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Step `animator` `count` times and render each resulting frame to SVG.
pub fn collect_svg_frames<R: RandomSource>(animator: &mut Animator<R>, count: u64) -> Vec<String> {
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        animator.step();
        out.push(render_svg(animator.scene(), animator.current()));
    }
    out
}

/// Rasterize SVG documents in parallel, preserving order.
pub fn rasterize_frames(
    svgs: &[String],
    width: u32,
    height: u32,
    threads: Option<usize>,
) -> BlobResult<Vec<FrameRgba>> {
    let pool = build_thread_pool(threads)?;
    pool.install(|| {
        svgs.par_iter()
            .map(|svg| rasterize_svg(svg, width, height))
            .collect::<BlobResult<Vec<_>>>()
    })
}

/// Write `opts.frames` consecutive frames into `out_dir` as `frame_00000.<ext>`, ...
///
/// Frames are generated sequentially (the animator is stateful); PNG encoding runs on a rayon
/// pool. Returns the written paths in frame order.
#[tracing::instrument(skip(animator, opts), fields(frames = opts.frames, format = ?opts.format))]
pub fn export_sequence<R: RandomSource>(
    animator: &mut Animator<R>,
    out_dir: &Path,
    opts: &SequenceOpts,
) -> BlobResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let svgs = collect_svg_frames(animator, opts.frames);
    let paths: Vec<PathBuf> = (0..svgs.len())
        .map(|i| out_dir.join(format!("frame_{i:05}.{}", opts.format.extension())))
        .collect();

    match opts.format {
        OutputFormat::Svg => {
            for (svg, path) in svgs.iter().zip(&paths) {
                std::fs::write(path, svg)
                    .with_context(|| format!("write svg '{}'", path.display()))?;
            }
        }
        OutputFormat::Png => {
            let pool = build_thread_pool(opts.threads)?;
            pool.install(|| {
                svgs.par_iter().zip(paths.par_iter()).try_for_each(|(svg, path)| {
                    rasterize_svg(svg, opts.width, opts.height)?.save_png(path)
                })
            })?;
        }
    }

    tracing::debug!(written = paths.len(), "sequence exported");
    Ok(paths)
}

fn build_thread_pool(threads: Option<usize>) -> BlobResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BlobError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BlobError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
