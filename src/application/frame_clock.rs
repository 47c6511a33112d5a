use std::time::Duration;

/// Delay used by the lesson demos (~60 fps)
pub const LESSON_FRAME_DELAY: Duration = Duration::from_millis(16);

/// Fixed-cadence frame pacing: one blocking sleep per frame, no compensation
/// for time spent drawing.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    delay: Duration,
    frame: u64,
}

impl FrameClock {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, frame: 0 }
    }

    /// Frames completed so far
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Count the frame without sleeping
    pub fn advance(&mut self) -> u64 {
        self.frame = self.frame.wrapping_add(1);
        self.frame
    }

    /// Sleep the fixed delay and count the frame
    pub fn pace(&mut self) -> u64 {
        std::thread::sleep(self.delay);
        self.advance()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(LESSON_FRAME_DELAY)
    }
}
