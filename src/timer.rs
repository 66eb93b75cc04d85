//! Frame-driven countdowns.
//!
//! Components own their timers and feed them the frame delta, the same way
//! the render loop accumulates `dt` into display and cleanup timers. Re-arming
//! a timer always discards whatever was left of the previous countdown.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TimerMode {
    Once,      // Fires a single time, then stops
    Repeating, // Fires every `duration` until stopped
}

#[derive(Debug, Clone)]
pub struct Timer {
    duration: f32,
    mode: TimerMode,
    elapsed: f32,
    running: bool,
}

impl Timer {
    pub fn once(duration: f32) -> Self {
        Self::new(duration, TimerMode::Once)
    }

    pub fn repeating(duration: f32) -> Self {
        Self::new(duration, TimerMode::Repeating)
    }

    fn new(duration: f32, mode: TimerMode) -> Self {
        Self {
            duration,
            mode,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Arms the timer from a full interval. Does nothing if it is already running.
    pub fn start(&mut self) {
        if !self.running {
            self.elapsed = 0.0;
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    /// Cancels any pending countdown and starts again from a full interval.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    /// Replaces the duration and re-arms.
    pub fn arm(&mut self, duration: f32) {
        self.duration = duration;
        self.reset();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time left before the next fire, if armed.
    pub fn remaining(&self) -> Option<f32> {
        self.running.then(|| (self.duration - self.elapsed).max(0.0))
    }

    /// Advances the countdown and returns how many times it fired during `dt`.
    pub fn update(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;

        match self.mode {
            TimerMode::Once => {
                if self.elapsed >= self.duration {
                    self.stop();
                    1
                } else {
                    0
                }
            }
            TimerMode::Repeating => {
                // A zero period would never drain the accumulator
                if self.duration <= 0.0 {
                    self.elapsed = 0.0;
                    return 1;
                }
                let mut fires = 0;
                while self.elapsed >= self.duration {
                    self.elapsed -= self.duration;
                    fires += 1;
                }
                fires
            }
        }
    }
}
