//! Multi-stop gradient interpolator.
//!
//! A [`Gradient`] is constructed fresh for each render pass from an ordered
//! stop list and the number of visible characters, and yields exactly that
//! many colors by walking piecewise-linearly across consecutive stop pairs.
//! It is a plain finite iterator: no suspension, no restart.

use tracing::debug;

use crate::color::Rgb;

/// Fallback stop pair used when fewer than two stops are supplied.
pub const DEFAULT_STOPS: [Rgb; 2] = [Rgb::new(0x00, 0xFF, 0xE0), Rgb::new(0xEB, 0x00, 0xFF)];

/// One render pass worth of interpolated colors.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<Rgb>,
    steps: usize,
    pos: usize,
}

impl Gradient {
    /// Build an interpolator over `stops` producing `steps` colors.
    ///
    /// Fewer than two stops falls back to [`DEFAULT_STOPS`]. Callers are
    /// expected to guarantee `steps >= 1` by substituting a default text for
    /// empty input; a zero-step gradient simply yields nothing.
    pub fn new(stops: Vec<Rgb>, steps: usize) -> Self {
        let stops = if stops.len() < 2 {
            debug!(supplied = stops.len(), "normalizing to default stop pair");
            DEFAULT_STOPS.to_vec()
        } else {
            stops
        };
        Self { stops, steps, pos: 0 }
    }

    /// Color at position `i` of `self.steps`.
    ///
    /// Positions are spread over `stops.len() - 1` segments so that position
    /// 0 sits exactly on the first stop and position `steps - 1` exactly on
    /// the last. Interior stops are hit (or closely bracketed) where the
    /// segment index rolls over.
    fn color_at(&self, i: usize) -> Rgb {
        let segments = self.stops.len() - 1;
        let span = self.steps.saturating_sub(1);
        let t = if span == 0 {
            0.0
        } else {
            i as f64 * segments as f64 / span as f64
        };

        // The final position lands on t == segments; fold it into the last
        // segment at frac = 1.0.
        let segment = (t.floor() as usize).min(segments - 1);
        let frac = t - segment as f64;

        let a = self.stops[segment];
        let b = self.stops[segment + 1];
        Rgb::from_channels(
            lerp(a.r, b.r, frac),
            lerp(a.g, b.g, frac),
            lerp(a.b, b.b, frac),
        )
    }
}

impl Iterator for Gradient {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.pos >= self.steps {
            return None;
        }
        let color = self.color_at(self.pos);
        self.pos += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.steps - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Gradient {}

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    a as f64 + (b as f64 - a as f64) * t
}
