//! Movement domain: countdown timers owned by the controller tick.

/// Remaining times at or below this are treated as expired.
pub const TIMER_EPSILON: f32 = 1.0e-4;

/// A one-shot countdown.
///
/// `start` arms it; `tick` subtracts the frame delta and disarms it once the
/// remaining time reaches zero. A zero-length countdown is running on the tick
/// that started it and expires on the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
    running: bool,
}

impl Countdown {
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
        self.running = true;
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.running = false;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= TIMER_EPSILON {
            self.clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Every countdown a controller owns.
///
/// `advance` ticks the timers that always run down (jump buffer, dash and
/// dash cooldown). Coyote time and the footstep interval only run down under
/// conditions decided by the tick, so the tick drives those directly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerBank {
    pub coyote: Countdown,
    pub jump_buffer: Countdown,
    pub dash: Countdown,
    pub dash_cooldown: Countdown,
    pub step: Countdown,
}

impl TimerBank {
    pub fn advance(&mut self, dt: f32) {
        self.jump_buffer.tick(dt);
        self.dash.tick(dt);
        self.dash_cooldown.tick(dt);
    }
}
