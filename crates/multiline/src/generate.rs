// File: crates/multiline/src/generate.rs
// Summary: Synthetic multiline data: phase-shifted sines with Gaussian noise.

use std::f64::consts::FRAC_PI_4;

use chart_core::grid::linspace;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::DataError;
use crate::frame::MultilineFrame;

pub const DEFAULT_LINES: usize = 3;
pub const DEFAULT_POINTS: usize = 100_000;
pub const DEFAULT_NOISE_STD: f64 = 0.1;
pub const X_START: f64 = 0.0;
pub const X_END: f64 = 10.0;

/// Parameters of one generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub num_lines: usize,
    pub num_points: usize,
    pub x_start: f64,
    pub x_end: f64,
    /// Standard deviation of the additive noise (mean 0).
    pub noise_std: f64,
    /// Phase added per line index inside the sine.
    pub phase_step: f64,
    /// Seed for a reproducible ChaCha stream; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LINES, DEFAULT_POINTS)
    }
}

impl GeneratorConfig {
    pub fn new(num_lines: usize, num_points: usize) -> Self {
        Self {
            num_lines,
            num_points,
            x_start: X_START,
            x_end: X_END,
            noise_std: DEFAULT_NOISE_STD,
            phase_step: FRAC_PI_4,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn rows(&self) -> usize {
        self.num_lines * self.num_points
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(DataError::InvalidNoise(self.noise_std));
        }
        if !self.x_start.is_finite() || !self.x_end.is_finite() {
            return Err(DataError::InvalidRange { start: self.x_start, end: self.x_end });
        }
        Ok(())
    }

    /// Generate with the configured seed, or the thread RNG when unseeded.
    pub fn generate(&self) -> Result<MultilineFrame, DataError> {
        match self.seed {
            Some(seed) => generate_with_rng(self, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => generate_with_rng(self, &mut rand::rng()),
        }
    }
}

/// Label of the `index`-th line.
pub fn line_label(index: usize) -> String {
    format!("line_{index}")
}

/// `num_lines` noisy sines over `num_points` shared x values in `[0, 10]`,
/// noise std 0.1, drawn from the thread RNG. Zero lines or points give an empty frame.
pub fn generate(num_lines: usize, num_points: usize) -> MultilineFrame {
    build(&GeneratorConfig::new(num_lines, num_points), &mut rand::rng())
}

/// Like [`generate`] but reproducible: equal inputs and seed give equal `y` values.
pub fn generate_seeded(num_lines: usize, num_points: usize, seed: u64) -> MultilineFrame {
    build(&GeneratorConfig::new(num_lines, num_points), &mut ChaCha8Rng::seed_from_u64(seed))
}

/// General form: validate `config` and draw the noise from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<MultilineFrame, DataError> {
    config.validate()?;
    Ok(build(config, rng))
}

/// Line `i` is `sin(x + i * phase_step) + noise`; lines are stacked in index order.
fn build<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> MultilineFrame {
    let xs = linspace(config.x_start, config.x_end, config.num_points);
    let lines = (0..config.num_lines).map(|i| {
        let phase = i as f64 * config.phase_step;
        let label = line_label(i);
        let mut line = MultilineFrame::with_capacity(xs.len());
        for &x in &xs {
            let z: f64 = StandardNormal.sample(&mut *rng);
            line.push(x, (x + phase).sin() + config.noise_std * z, &label);
        }
        line
    });
    let frame = MultilineFrame::concat(lines);
    debug!(
        "generated {} rows ({} lines x {} points)",
        frame.len(),
        config.num_lines,
        config.num_points
    );
    frame
}
