use crate::constants::{
    ANALOG_NOISE, DEADZONE, HALL_NOISE, TMR_JITTER_AMPLITUDE, TMR_JITTER_PERIOD_MS, TMR_NOISE,
};
use rand::prelude::*;

/// Which sensor technology a widget simulates. `Comparison` widgets run all
/// three single-technology models side by side on the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorType {
    Hall,
    Tmr,
    Analog,
    Comparison,
}

/// Noise characteristics of a single technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseProfile {
    /// Uniform noise amplitude in counts.
    pub amplitude: i32,
    /// Whether a time-based sinusoidal jitter term is added.
    pub jitter: bool,
    /// Deadzone applied to the pre-noise normalized value.
    pub deadzone: i32,
}

impl SensorType {
    pub fn profile(self) -> NoiseProfile {
        match self {
            SensorType::Hall => NoiseProfile {
                amplitude: HALL_NOISE,
                jitter: false,
                deadzone: 0,
            },
            SensorType::Tmr => NoiseProfile {
                amplitude: TMR_NOISE,
                jitter: true,
                deadzone: 0,
            },
            SensorType::Analog => NoiseProfile {
                amplitude: ANALOG_NOISE,
                jitter: false,
                deadzone: DEADZONE,
            },
            // Deadzone is applied inside the analog channel instead of at
            // the mapper, so the hall/tmr channels see the raw value.
            SensorType::Comparison => NoiseProfile {
                amplitude: 0,
                jitter: false,
                deadzone: 0,
            },
        }
    }

    /// Deadzone the pointer mapper applies before any noise injection.
    #[inline]
    pub fn mapper_deadzone(self) -> i32 {
        self.profile().deadzone
    }
}

/// Sinusoidal drift shared by every TMR reading. A function of wall-clock
/// time, so readings wander even while the knob is stationary.
#[inline]
pub fn tmr_jitter(now_ms: f64) -> f64 {
    (now_ms / TMR_JITTER_PERIOD_MS).sin() * TMR_JITTER_AMPLITUDE
}

#[inline]
fn uniform_noise<R: Rng>(rng: &mut R, amplitude: i32) -> i32 {
    rng.gen_range(-amplitude..=amplitude)
}

pub fn hall_reading<R: Rng>(rng: &mut R, value: i32) -> f64 {
    (value + uniform_noise(rng, HALL_NOISE)) as f64
}

pub fn tmr_reading<R: Rng>(rng: &mut R, value: i32, now_ms: f64) -> f64 {
    (value + uniform_noise(rng, TMR_NOISE)) as f64 + tmr_jitter(now_ms)
}

/// One analog sample. The deadzone clamps the true value before noise is
/// added, and the clamped value is also the target the statistics compare
/// readings against.
#[derive(Clone, Copy, Debug)]
pub struct AnalogSample {
    pub target: i32,
    pub reading: f64,
}

pub fn analog_reading<R: Rng>(rng: &mut R, value: i32) -> AnalogSample {
    let target = if value.abs() < DEADZONE { 0 } else { value };
    AnalogSample {
        target,
        reading: (target + uniform_noise(rng, ANALOG_NOISE)) as f64,
    }
}

/// Readings from all three technologies for one source value.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonSample {
    pub hall: f64,
    pub tmr: f64,
    pub analog: AnalogSample,
}

/// Per-channel noise sources. Each technology owns its own PRNG stream
/// derived from the base seed, so the channels stay independent.
pub struct NoiseModel {
    hall: StdRng,
    tmr: StdRng,
    analog: StdRng,
}

impl NoiseModel {
    pub fn new(seed: u64) -> Self {
        let stream = |i: u64| StdRng::seed_from_u64(seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            hall: stream(0),
            tmr: stream(1),
            analog: stream(2),
        }
    }

    pub fn hall(&mut self, value: i32) -> f64 {
        hall_reading(&mut self.hall, value)
    }

    pub fn tmr(&mut self, value: i32, now_ms: f64) -> f64 {
        tmr_reading(&mut self.tmr, value, now_ms)
    }

    pub fn analog(&mut self, value: i32) -> AnalogSample {
        analog_reading(&mut self.analog, value)
    }

    pub fn comparison(&mut self, value: i32, now_ms: f64) -> ComparisonSample {
        ComparisonSample {
            hall: self.hall(value),
            tmr: self.tmr(value, now_ms),
            analog: self.analog(value),
        }
    }
}
