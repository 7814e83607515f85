use crate::types::{EncodedMixtape, PlayerStatus};

/// A track counts as complete once the reported position is within this
/// tolerance of the reported duration. The widget's status reports are
/// periodic, so the exact final position is never observed.
pub const COMPLETION_TOLERANCE_MS: u64 = 1500;

/// Control surface of the external single-track player widget.
///
/// The widget is bound to exactly one track at a time; the controller drives
/// it exclusively through this trait and never observes it except through
/// the status events fed into [`SequentialPlayer::on_status`].
pub trait TrackPlayer {
    fn load_track(&mut self, uri: &str);
    fn play(&mut self);
    fn toggle_play(&mut self);
    fn destroy(&mut self);
}

/// Where a listening session currently stands.
///
/// `Loading` doubles as the navigation in-flight marker: while a target is
/// loading, further navigation requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    NotStarted,
    Loading { target: usize },
    Playing { index: usize },
    Paused { index: usize },
    Finished,
}

/// The sequential playback state machine.
///
/// Owns the external player handle for the lifetime of a listening session
/// and enforces strict forward order: the listener can step ±1 and the
/// machine advances forward on its own when a track completes, but no two
/// navigations can ever be in flight at once and no track advances twice.
///
/// All methods are synchronous; the host event loop decides *when* they run
/// (see [`crate::player::session`]). Out-of-bounds and in-flight navigation
/// requests are silently ignored rather than reported; they are expected
/// races, not errors.
pub struct SequentialPlayer<P: TrackPlayer> {
    tracks: Vec<String>,
    phase: PlaybackPhase,
    player: P,
    /// One-shot completion guard for the track currently playing.
    track_ended: bool,
    /// Whether the pending load came from auto-advance rather than the user.
    auto_advance: bool,
    /// Paused flag from the most recent status report.
    last_paused: bool,
}

impl<P: TrackPlayer> SequentialPlayer<P> {
    pub fn new(mixtape: &EncodedMixtape, player: P) -> Self {
        Self {
            tracks: mixtape.t.clone(),
            phase: PlaybackPhase::NotStarted,
            player,
            track_ended: false,
            auto_advance: false,
            last_paused: false,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Index of the track currently loading, playing or paused.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            PlaybackPhase::Loading { target } => Some(target),
            PlaybackPhase::Playing { index } | PlaybackPhase::Paused { index } => Some(index),
            PlaybackPhase::NotStarted | PlaybackPhase::Finished => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Loading { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PlaybackPhase::Finished
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Begins the session: loads track 0 into the external player.
    ///
    /// Only meaningful from `NotStarted`; repeated start requests are no-ops.
    pub fn start(&mut self) {
        if self.phase == PlaybackPhase::NotStarted && !self.tracks.is_empty() {
            self.begin_load(0, false);
        }
    }

    /// Requests a jump to `target`.
    ///
    /// Accepted only when no navigation is in flight, the target is in
    /// bounds, and a session is running (playing or paused). Everything else
    /// is a no-op; rejecting instead of erroring is what prevents
    /// double-advance races between the user and the completion signal.
    pub fn navigate(&mut self, target: usize) {
        if self.is_loading() || target >= self.tracks.len() {
            return;
        }
        match self.phase {
            PlaybackPhase::Playing { .. } | PlaybackPhase::Paused { .. } => {
                self.begin_load(target, false);
            }
            _ => {}
        }
    }

    pub fn next(&mut self) {
        if let Some(index) = self.current_index() {
            self.navigate(index + 1);
        }
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.current_index() {
            if let Some(target) = index.checked_sub(1) {
                self.navigate(target);
            }
        }
    }

    /// Returns to track 0 after the mixtape has finished.
    pub fn restart(&mut self) {
        if self.phase == PlaybackPhase::Finished {
            self.begin_load(0, false);
        }
    }

    /// Signals that the pending load's hold window has elapsed.
    ///
    /// Ends `Loading` into `Playing` or `Paused` depending on the widget's
    /// last reported state. Auto-advance transitions are nudged with an
    /// explicit play command so strict listening continues uninterrupted.
    pub fn loaded(&mut self) {
        let PlaybackPhase::Loading { target } = self.phase else {
            return;
        };
        self.phase = if self.auto_advance {
            self.player.play();
            PlaybackPhase::Playing { index: target }
        } else if self.last_paused {
            PlaybackPhase::Paused { index: target }
        } else {
            PlaybackPhase::Playing { index: target }
        };
        self.auto_advance = false;
    }

    /// Feeds one periodic status report from the external player.
    ///
    /// Completion detection runs first: a position within
    /// [`COMPLETION_TOLERANCE_MS`] of the duration advances the machine,
    /// exactly once per track. Otherwise the paused flag reconciles
    /// `Playing` and `Paused`. Reports arriving during `Loading` only update
    /// the remembered paused flag; the superseded track can no longer
    /// advance anything.
    pub fn on_status(&mut self, status: &PlayerStatus) {
        self.last_paused = status.paused;

        let index = match self.phase {
            PlaybackPhase::Playing { index } | PlaybackPhase::Paused { index } => index,
            _ => return,
        };

        let complete = status.duration_ms > 0
            && status.position_ms > 0
            && status.position_ms + COMPLETION_TOLERANCE_MS >= status.duration_ms;

        if complete && !self.track_ended {
            self.track_ended = true;
            if index + 1 < self.tracks.len() {
                self.begin_load(index + 1, true);
            } else {
                self.phase = PlaybackPhase::Finished;
            }
            return;
        }

        self.phase = if status.paused {
            PlaybackPhase::Paused { index }
        } else {
            PlaybackPhase::Playing { index }
        };
    }

    /// The embed API re-announced readiness; the host recreated the widget,
    /// so the current track must be loaded into the fresh handle.
    pub fn on_ready(&mut self) {
        if let Some(index) = self.current_index() {
            let uri = track_uri(&self.tracks[index]);
            self.player.load_track(&uri);
        }
    }

    /// Passes a play/pause toggle through to the widget. The resulting state
    /// change comes back through the next status report.
    pub fn toggle_play(&mut self) {
        if self.phase != PlaybackPhase::NotStarted {
            self.player.toggle_play();
        }
    }

    /// Tears down the external player handle at the end of a session.
    pub fn shutdown(&mut self) {
        self.player.destroy();
    }

    fn begin_load(&mut self, target: usize, auto: bool) {
        self.phase = PlaybackPhase::Loading { target };
        self.track_ended = false;
        self.auto_advance = auto;
        let uri = track_uri(&self.tracks[target]);
        self.player.load_track(&uri);
    }
}

fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}
