//! Animation system
//!
//! Runs render passes back to back:
//! - The first pass uses the configured slider positions
//! - Later passes step the auto-rotator (when enabled)
//! - Each pass projects the tesseract and writes one SVG file
//!
//! A pass runs to completion before the next one starts.

use std::path::PathBuf;
use std::time::Duration;

use hyperwire_math::projection::project_frame;
use hyperwire_math::{Frame, Tesseract};
use hyperwire_render::{AutoRotator, RenderError, RotationSliders, SvgRenderer};

use crate::config::AppConfig;

/// Result of a full animation run
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSummary {
    /// Number of frames written
    pub frames_written: u32,
    /// Total vertices skipped at the projection singularity
    pub degenerate_vertices: usize,
    /// Slider positions of the last frame
    pub last_sliders: RotationSliders,
}

/// Drives render passes and writes frames
pub struct AnimationSystem {
    tesseract: Tesseract,
    rotator: AutoRotator,
    renderer: SvgRenderer,
    sliders: RotationSliders,
    auto_rotate: bool,
    frames: u32,
    interval: Duration,
    realtime: bool,
    output_dir: PathBuf,
    file_prefix: String,
    passes: u32,
}

impl AnimationSystem {
    /// Create the system from config
    pub fn new(config: &AppConfig) -> Self {
        let rotator = AutoRotator::new()
            .with_tick_step(config.animation.tick_step)
            .with_frequencies(config.animation.frequencies);

        let tesseract = Tesseract::new();
        log::info!(
            "Tesseract: {} vertices, {} edges",
            tesseract.vertex_count(),
            tesseract.edge_count()
        );

        Self {
            tesseract,
            rotator,
            renderer: SvgRenderer::new(config.output.width, config.output.height),
            sliders: config.rotation.to_sliders(),
            auto_rotate: config.animation.auto_rotate,
            frames: config.animation.frames,
            interval: Duration::from_millis(config.animation.interval_ms),
            realtime: config.animation.realtime,
            output_dir: config.output.directory.clone(),
            file_prefix: config.output.file_prefix.clone(),
            passes: 0,
        }
    }

    /// Current slider positions
    pub fn sliders(&self) -> RotationSliders {
        self.sliders
    }

    /// Set slider positions for the next pass
    pub fn set_sliders(&mut self, sliders: RotationSliders) {
        self.sliders = sliders;
    }

    /// Run one render pass and return its frame
    pub fn render_pass(&mut self) -> Frame<'_> {
        if self.auto_rotate && self.passes > 0 {
            self.sliders = self.rotator.step();
        }
        self.passes += 1;

        let rotations = self.sliders.to_rotations();
        log::trace!(
            "Pass {}: wx={:.4} wy={:.4} wz={:.4}",
            self.passes,
            rotations.wx,
            rotations.wy,
            rotations.wz
        );
        project_frame(&self.tesseract, rotations)
    }

    /// Path of the frame with the given index
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.output_dir
            .join(format!("{}_{:04}.svg", self.file_prefix, index))
    }

    /// Render and write every configured frame
    pub fn run(&mut self) -> Result<AnimationSummary, RenderError> {
        std::fs::create_dir_all(&self.output_dir)?;
        log::info!(
            "Rendering {} frames to {}",
            self.frames,
            self.output_dir.display()
        );

        // The frame borrows self, so write through a copy of the renderer
        let renderer = self.renderer.clone();
        let mut degenerate_vertices = 0;
        for index in 0..self.frames {
            let path = self.frame_path(index);
            let frame = self.render_pass();
            degenerate_vertices += frame.degenerate_vertices().len();
            renderer.write_to(&frame, &path)?;

            if self.realtime && index + 1 < self.frames {
                std::thread::sleep(self.interval);
            }
        }

        log::info!("Wrote {} frames", self.frames);
        Ok(AnimationSummary {
            frames_written: self.frames,
            degenerate_vertices,
            last_sliders: self.sliders,
        })
    }
}
