//! Time-dilation controller.
//!
//! Turns the trailing pointer-speed average into a smoothed time scale and
//! splits each frame into a real delta (player, cooldowns) and a dilated
//! delta (everything else).

use std::collections::VecDeque;

use chronoshift_core::constants::*;

/// One pointer-motion sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub speed: f32,
    pub timestamp_secs: f64,
}

/// Result of one controller update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilationStep {
    pub real_dt: f32,
    pub dilated_dt: f32,
    pub time_scale: f32,
    /// The scale crossed down through the shield threshold this tick while
    /// the player owns the time shield.
    pub shield_armed: bool,
}

impl DilationStep {
    /// A step that advances nothing, at the given scale.
    pub fn frozen(time_scale: f32) -> Self {
        Self {
            real_dt: 0.0,
            dilated_dt: 0.0,
            time_scale,
            shield_armed: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeDilationController {
    samples: VecDeque<PointerSample>,
    scale: f32,
}

impl Default for TimeDilationController {
    fn default() -> Self {
        Self {
            samples: VecDeque::new(),
            scale: 1.0,
        }
    }
}

impl TimeDilationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current smoothed time scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn record_sample(&mut self, speed: f32, timestamp_secs: f64) {
        self.samples.push_back(PointerSample {
            speed: speed.max(0.0),
            timestamp_secs,
        });
    }

    /// Drop samples older than the window and average the rest (0 if none).
    pub fn average_speed(&mut self, now_secs: f64) -> f32 {
        let cutoff = now_secs - POINTER_SAMPLE_WINDOW_SECS;
        self.samples.retain(|s| s.timestamp_secs >= cutoff);
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f32 = self.samples.iter().map(|s| s.speed).sum();
        total / self.samples.len() as f32
    }

    /// Advance the controller by one frame.
    pub fn update(
        &mut self,
        now_secs: f64,
        real_dt: f32,
        min_time_scale: f32,
        has_time_shield: bool,
    ) -> DilationStep {
        let real_dt = real_dt.clamp(0.0, MAX_REAL_DT);
        let target = target_time_scale(self.average_speed(now_secs), min_time_scale);

        let previous = self.scale;
        self.scale = smooth_toward(previous, target, real_dt).clamp(min_time_scale, 1.0);

        let shield_armed = has_time_shield
            && previous > TIME_SHIELD_THRESHOLD
            && self.scale <= TIME_SHIELD_THRESHOLD;

        DilationStep {
            real_dt,
            dilated_dt: real_dt * self.scale,
            time_scale: self.scale,
            shield_armed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Map an average pointer speed to a target scale in `[min_time_scale, 1]`.
///
/// Linear normalisation between the speed thresholds, then a quadratic ease.
pub fn target_time_scale(average_speed: f32, min_time_scale: f32) -> f32 {
    let t = ((average_speed - POINTER_SPEED_MIN) / (POINTER_SPEED_MAX - POINTER_SPEED_MIN))
        .clamp(0.0, 1.0);
    min_time_scale + t * t * (1.0 - min_time_scale)
}

/// Exponential approach with a fixed rate; never overshoots.
pub fn smooth_toward(current: f32, target: f32, real_dt: f32) -> f32 {
    let t = (real_dt * TIME_SCALE_SMOOTHING_RATE).min(1.0);
    current + (target - current) * t
}
