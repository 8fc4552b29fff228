//! Gallery rotation state machine
//!
//! The pure per-modal session behind the auto-rotating image gallery. The
//! browser layer owns the actual interval handles and must cancel both of
//! them together on every transition; this machine tracks which image is
//! shown, how far the progress bar has filled, and which transitions are
//! legal. Keeping it platform-free makes the timing rules natively testable.

/// Period of the progress timer. Each tick adds
/// `100 / (interval / PROGRESS_TICK_MS)` percent, so the bar completes one
/// fill per rotation interval.
pub const PROGRESS_TICK_MS: u32 = 50;

/// Delay before a session restarts after a manual thumbnail jump, matching
/// the progress-bar reset transition.
pub const RESTART_DELAY_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
}

/// One modal's rotation session: an image list, the displayed index and the
/// progress bar percentage. `Idle → Running → Paused → Running → Stopped`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSession {
    image_count: usize,
    index: usize,
    progress: f32,
    interval_ms: u32,
    phase: RotationPhase,
}

impl Default for RotationSession {
    fn default() -> Self {
        Self {
            image_count: 0,
            index: 0,
            progress: 0.0,
            interval_ms: crate::config::DEFAULT_ROTATION_INTERVAL_MS,
            phase: RotationPhase::Idle,
        }
    }
}

impl RotationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin rotating `image_count` images from `start_index`. Resets
    /// progress to 0 and replaces any previous session state, mirroring the
    /// timer layer which cancels existing handles before arming new ones.
    ///
    /// Returns `false` (and stays put) for fewer than two images: a single
    /// image never rotates.
    pub fn start(&mut self, image_count: usize, start_index: usize, interval_ms: u32) -> bool {
        if image_count < 2 {
            return false;
        }
        self.image_count = image_count;
        self.index = start_index % image_count;
        self.interval_ms = interval_ms.max(PROGRESS_TICK_MS);
        self.progress = 0.0;
        self.phase = RotationPhase::Running;
        true
    }

    /// Percent added per progress tick.
    #[must_use]
    pub fn progress_step(&self) -> f32 {
        100.0 / (self.interval_ms as f32 / PROGRESS_TICK_MS as f32)
    }

    /// One progress-timer tick. Progress grows monotonically within an
    /// interval window and clamps at 100.
    pub fn progress_tick(&mut self) -> f32 {
        if self.phase == RotationPhase::Running {
            self.progress = (self.progress + self.progress_step()).min(100.0);
        }
        self.progress
    }

    /// One advance-timer tick: move to the next image and reset the bar.
    pub fn advance(&mut self) -> usize {
        if self.phase == RotationPhase::Running && self.image_count > 0 {
            self.index = (self.index + 1) % self.image_count;
            self.progress = 0.0;
        }
        self.index
    }

    /// Cancel rotation while keeping index and progress (hover enter).
    pub fn pause(&mut self) {
        if self.phase == RotationPhase::Running {
            self.phase = RotationPhase::Paused;
        }
    }

    /// Re-arm a paused session from the current index. The bar restarts at
    /// 0% rather than the pre-pause percentage; the original behaves this
    /// way and product has not asked for it to change.
    pub fn resume(&mut self) -> bool {
        if self.phase != RotationPhase::Paused {
            return false;
        }
        self.progress = 0.0;
        self.phase = RotationPhase::Running;
        true
    }

    /// End the session and reset the bar (modal close).
    pub fn stop(&mut self) {
        self.phase = RotationPhase::Stopped;
        self.progress = 0.0;
    }

    /// Manual thumbnail jump: show `index`, reset the bar and hold in
    /// `Paused` until the caller restarts the session after
    /// [`RESTART_DELAY_MS`].
    pub fn select(&mut self, index: usize) {
        if self.image_count == 0 {
            return;
        }
        self.index = index % self.image_count;
        self.progress = 0.0;
        if self.phase == RotationPhase::Running || self.phase == RotationPhase::Paused {
            self.phase = RotationPhase::Paused;
        }
    }

    #[must_use]
    pub fn phase(&self) -> RotationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == RotationPhase::Running
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Number of progress ticks in one rotation interval.
    #[must_use]
    pub fn ticks_per_interval(&self) -> u32 {
        self.interval_ms / PROGRESS_TICK_MS
    }
}
