use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};

use crate::{
    player::controller::{SequentialPlayer, TrackPlayer},
    types::{EncodedMixtape, PlayerEvent},
};

/// How long a freshly loaded track stays hidden before the view is revealed.
///
/// The widget takes a nonzero, variable time to mount a new track, and it
/// does not reliably emit a "ready" signal, so this is a fixed timer, not a
/// readiness acknowledgment. Known race: a genuinely slow load can finish
/// after the window closes and briefly expose a stale frame.
pub const TRANSITION_HOLD: Duration = Duration::from_millis(1200);

/// Everything a listening session can receive: user controls and the events
/// forwarded from the external player integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionInput {
    Start,
    Next,
    Previous,
    Navigate(usize),
    Restart,
    TogglePlay,
    Player(PlayerEvent),
    Shutdown,
}

/// Single-task event loop around a [`SequentialPlayer`].
///
/// All state transitions happen here, one input at a time; the only other
/// wake-up source is the transition-hold timer, armed whenever the
/// controller enters `Loading` and feeding `loaded` back exactly once. That
/// makes completion-triggered auto-advance and user navigation mutually
/// exclusive without any locking.
pub struct PlaybackSession<P: TrackPlayer> {
    controller: SequentialPlayer<P>,
    inputs: mpsc::Receiver<SessionInput>,
    hold: Duration,
}

impl<P: TrackPlayer> PlaybackSession<P> {
    /// Creates a session and the sender half its host pushes inputs through.
    pub fn new(mixtape: &EncodedMixtape, player: P) -> (Self, mpsc::Sender<SessionInput>) {
        let (tx, rx) = mpsc::channel(32);
        let session = Self {
            controller: SequentialPlayer::new(mixtape, player),
            inputs: rx,
            hold: TRANSITION_HOLD,
        };
        (session, tx)
    }

    /// Overrides the transition-hold window. Tests run with a short one.
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Runs the session until shutdown or until all senders are dropped.
    ///
    /// Returns the controller so the host can inspect the final state. The
    /// external player handle is destroyed before returning; navigating away
    /// mid-load simply abandons that load, there is no cancellation protocol
    /// with the widget.
    pub async fn run(mut self) -> SequentialPlayer<P> {
        let mut reveal_at: Option<Instant> = None;

        loop {
            if self.controller.is_loading() {
                if reveal_at.is_none() {
                    reveal_at = Some(Instant::now() + self.hold);
                }
            } else {
                reveal_at = None;
            }

            let deadline = reveal_at.unwrap_or_else(Instant::now);
            tokio::select! {
                _ = sleep_until(deadline), if reveal_at.is_some() => {
                    self.controller.loaded();
                    reveal_at = None;
                }
                input = self.inputs.recv() => match input {
                    Some(SessionInput::Start) => self.controller.start(),
                    Some(SessionInput::Next) => self.controller.next(),
                    Some(SessionInput::Previous) => self.controller.previous(),
                    Some(SessionInput::Navigate(target)) => self.controller.navigate(target),
                    Some(SessionInput::Restart) => self.controller.restart(),
                    Some(SessionInput::TogglePlay) => self.controller.toggle_play(),
                    Some(SessionInput::Player(PlayerEvent::Status(status))) => {
                        self.controller.on_status(&status)
                    }
                    Some(SessionInput::Player(PlayerEvent::Ready)) => self.controller.on_ready(),
                    Some(SessionInput::Shutdown) | None => break,
                }
            }
        }

        self.controller.shutdown();
        self.controller
    }
}
