use crate::config::MAX_FRAME_INTERVAL_MS;
use crate::sort::{Algorithm, Sorter, StepEvent, StepProducer};
use crate::ui::mvi::Reducer;
use crate::ui::playback::{PlaybackIntent, PlaybackReducer, PlaybackState};
use std::time::{Duration, Instant};

/// Redraw cadence while nothing is animating.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    sorter: Sorter<u32>,
    max_value: u32,
    /// Playback state (MVI pattern).
    playback: PlaybackState,
    last_event: Option<StepEvent>,
    frame_interval: Duration,
    steps_per_frame: usize,
    started: Instant,
    finished_at: Option<Instant>,
    last_frame: Instant,
}

impl App {
    pub fn new(
        algorithm: Algorithm,
        data: Vec<u32>,
        frame_interval: Duration,
        steps_per_frame: usize,
        now: Instant,
    ) -> Self {
        let max_value = data.iter().copied().max().unwrap_or(0);
        Self {
            should_quit: false,
            sorter: algorithm.sorter(data),
            max_value,
            playback: PlaybackState::default(),
            last_event: None,
            frame_interval,
            steps_per_frame: steps_per_frame.max(1),
            started: now,
            finished_at: None,
            last_frame: now,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.sorter.algorithm()
    }

    /// Live array, borrowed between steps.
    pub fn values(&self) -> &[u32] {
        self.sorter.array()
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Steps the whole run will take, when the algorithm makes that knowable.
    pub fn total_steps(&self) -> Option<usize> {
        self.algorithm().step_count(self.values().len())
    }

    /// Wall-clock time since start; stops once the sort is exhausted.
    pub fn runtime(&self, now: Instant) -> Duration {
        self.finished_at
            .unwrap_or(now)
            .saturating_duration_since(self.started)
    }

    /// Indices touched by the most recent step.
    pub fn highlighted(&self) -> Vec<usize> {
        match self.last_event {
            None => Vec::new(),
            Some(StepEvent::Swap { a, b }) => vec![a, b],
            Some(StepEvent::Insert { to, .. }) => vec![to],
            Some(StepEvent::Compare { i, j, .. }) => vec![i, j],
            Some(StepEvent::Merge { start, end }) | Some(StepEvent::MergeDone { start, end }) => {
                (start..=end).collect()
            }
            Some(StepEvent::PivotPlaced { index }) => vec![index],
        }
    }

    /// How long the event loop may block before the next frame is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if !self.playback.is_playing() {
            return IDLE_TICK;
        }
        self.frame_interval
            .saturating_sub(now.saturating_duration_since(self.last_frame))
            .min(IDLE_TICK)
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.playback.is_playing() {
            return;
        }
        if now.saturating_duration_since(self.last_frame) < self.frame_interval {
            return;
        }
        self.last_frame = now;
        self.advance(self.steps_per_frame, now);
    }

    pub fn toggle_pause(&mut self) {
        dispatch_mvi!(self, playback, PlaybackReducer, PlaybackIntent::TogglePause);
        tracing::debug!(state = self.playback.label(), "playback toggled");
    }

    /// Single step while paused.
    pub fn step_once(&mut self, now: Instant) {
        if self.playback.is_paused() {
            self.advance(1, now);
        }
    }

    pub fn speed_up(&mut self) {
        self.frame_interval = (self.frame_interval / 2)
            .max(Duration::from_millis(1))
            .min(self.frame_interval);
        tracing::debug!(interval = ?self.frame_interval, "faster");
    }

    pub fn slow_down(&mut self) {
        self.frame_interval = (self.frame_interval * 2)
            .max(Duration::from_millis(1))
            .min(Duration::from_millis(MAX_FRAME_INTERVAL_MS));
        tracing::debug!(interval = ?self.frame_interval, "slower");
    }

    fn advance(&mut self, steps: usize, now: Instant) {
        for _ in 0..steps {
            match self.sorter.next_step() {
                Some(event) => {
                    self.last_event = Some(event);
                    dispatch_mvi!(self, playback, PlaybackReducer, PlaybackIntent::Stepped);
                }
                None => {
                    self.last_event = None;
                    self.finished_at = Some(now);
                    dispatch_mvi!(self, playback, PlaybackReducer, PlaybackIntent::Exhausted);
                    tracing::info!(
                        algorithm = %self.algorithm(),
                        steps = self.playback.steps(),
                        runtime = ?self.runtime(now),
                        "sort finished"
                    );
                    break;
                }
            }
        }
    }
}
