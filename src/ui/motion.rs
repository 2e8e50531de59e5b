/// Enter/exit transitions
///
/// A transition is a start instant plus a duration. Everything the views
/// need (opacity, vertical offset) is derived from `progress` at render
/// time, so state changes never wait on an animation.
use std::time::{Duration, Instant};

/// Detail overlay content: fade in while sliding up 40px
pub const OVERLAY_DURATION: Duration = Duration::from_millis(400);
pub const OVERLAY_DISTANCE: f32 = 40.0;

/// Page sections: fade in while sliding up 12px
pub const FADE_UP_DURATION: Duration = Duration::from_millis(600);
pub const FADE_UP_DISTANCE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enter,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    started: Instant,
    duration: Duration,
    distance: f32,
}

impl Transition {
    pub fn enter(now: Instant, duration: Duration, distance: f32) -> Self {
        Self {
            direction: Direction::Enter,
            started: now,
            duration,
            distance,
        }
    }

    pub fn exit(now: Instant, duration: Duration, distance: f32) -> Self {
        Self {
            direction: Direction::Exit,
            ..Self::enter(now, duration, distance)
        }
    }

    /// Start in `direction` from the given visibility instead of from the
    /// far end, so interrupting a transition never makes the content jump
    pub fn resume(
        direction: Direction,
        visibility: f32,
        now: Instant,
        duration: Duration,
        distance: f32,
    ) -> Self {
        let progress = match direction {
            Direction::Enter => visibility,
            Direction::Exit => 1.0 - visibility,
        }
        .clamp(0.0, 1.0);

        let elapsed = duration.mul_f32(ease_out_inverse(progress));
        Self {
            direction,
            started: now.checked_sub(elapsed).unwrap_or(now),
            duration,
            distance,
        }
    }

    #[cfg(test)]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_out(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// 0.0 = fully hidden, 1.0 = fully shown
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.direction {
            Direction::Enter => self.progress(now),
            Direction::Exit => 1.0 - self.progress(now),
        }
    }

    /// Downward offset in pixels; zero once settled
    pub fn offset(&self, now: Instant) -> f32 {
        (1.0 - self.visibility(now)) * self.distance
    }
}

/// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_inverse(p: f32) -> f32 {
    1.0 - (1.0 - p).cbrt()
}
