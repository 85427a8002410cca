//! Rotation controls
//!
//! Slider values are kept in degrees (conventionally 0..360) and converted to
//! radians only when a frame is projected. The auto-rotation driver moves the
//! sliders along three sine waves of different frequency; it owns no timer,
//! the caller steps it at its own cadence.

use hyperwire_math::{Rotations, RotationPlane};

/// Slider midpoint and amplitude used by the auto-rotation driver, in degrees
const SLIDER_CENTER: f64 = 180.0;

/// Default tick advance per step
pub const DEFAULT_TICK_STEP: f64 = 0.5;

/// Default per-plane frequencies (WX, WY, WZ)
pub const DEFAULT_FREQUENCIES: [f64; 3] = [0.02, 0.015, 0.01];

/// Nominal time between steps, in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// Current slider positions, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationSliders {
    pub wx: f64,
    pub wy: f64,
    pub wz: f64,
}

impl RotationSliders {
    pub const fn new(wx: f64, wy: f64, wz: f64) -> Self {
        Self { wx, wy, wz }
    }

    /// Set a single slider
    pub fn set(&mut self, plane: RotationPlane, degrees: f64) {
        match plane {
            RotationPlane::WX => self.wx = degrees,
            RotationPlane::WY => self.wy = degrees,
            RotationPlane::WZ => self.wz = degrees,
        }
    }

    /// Read a single slider
    pub fn get(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::WX => self.wx,
            RotationPlane::WY => self.wy,
            RotationPlane::WZ => self.wz,
        }
    }

    /// Convert to radians. Values outside 0..360 pass through unchanged.
    pub fn to_rotations(&self) -> Rotations {
        Rotations::new(
            self.wx.to_radians(),
            self.wy.to_radians(),
            self.wz.to_radians(),
        )
    }
}

/// Sine-wave slider animation
///
/// Each step advances the tick and sets every slider to
/// `sin(tick * frequency) * 180 + 180`.
#[derive(Clone, Debug)]
pub struct AutoRotator {
    tick: f64,
    pub tick_step: f64,
    pub frequencies: [f64; 3],
}

impl Default for AutoRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoRotator {
    pub fn new() -> Self {
        Self {
            tick: 0.0,
            tick_step: DEFAULT_TICK_STEP,
            frequencies: DEFAULT_FREQUENCIES,
        }
    }

    /// Builder: set the tick advance per step
    pub fn with_tick_step(mut self, tick_step: f64) -> Self {
        self.tick_step = tick_step;
        self
    }

    /// Builder: set the WX, WY, WZ frequencies
    pub fn with_frequencies(mut self, frequencies: [f64; 3]) -> Self {
        self.frequencies = frequencies;
        self
    }

    /// Current tick
    #[inline]
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Slider positions at the current tick
    pub fn sliders(&self) -> RotationSliders {
        let mut sliders = RotationSliders::default();
        for (plane, freq) in RotationPlane::ALL.into_iter().zip(self.frequencies) {
            sliders.set(plane, (self.tick * freq).sin() * SLIDER_CENTER + SLIDER_CENTER);
        }
        sliders
    }

    /// Advance one step and return the new slider positions
    pub fn step(&mut self) -> RotationSliders {
        self.tick += self.tick_step;
        self.sliders()
    }
}
