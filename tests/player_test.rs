use std::time::Duration;

use mixtapecli::player::{
    PlaybackPhase, PlaybackSession, SequentialPlayer, SessionInput, TrackPlayer,
};
use mixtapecli::types::{EncodedMixtape, PlayerEvent, PlayerStatus};

// Helper player that records every command issued to it
#[derive(Debug, Default)]
struct RecordingPlayer {
    loads: Vec<String>,
    plays: usize,
    toggles: usize,
    destroyed: bool,
}

impl TrackPlayer for RecordingPlayer {
    fn load_track(&mut self, uri: &str) {
        self.loads.push(uri.to_string());
    }

    fn play(&mut self) {
        self.plays += 1;
    }

    fn toggle_play(&mut self) {
        self.toggles += 1;
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

fn create_test_mixtape(track_ids: &[&str]) -> EncodedMixtape {
    EncodedMixtape {
        n: "Test Tape".to_string(),
        o: "Alice".to_string(),
        d: String::new(),
        t: track_ids.iter().map(|id| id.to_string()).collect(),
    }
}

fn controller(track_ids: &[&str]) -> SequentialPlayer<RecordingPlayer> {
    SequentialPlayer::new(&create_test_mixtape(track_ids), RecordingPlayer::default())
}

// Status report from somewhere in the middle of a playing track
fn mid_track() -> PlayerStatus {
    PlayerStatus {
        paused: false,
        buffering: false,
        duration_ms: 180_000,
        position_ms: 60_000,
    }
}

// Status report within the completion tolerance of the track end
fn near_end() -> PlayerStatus {
    PlayerStatus {
        paused: false,
        buffering: false,
        duration_ms: 180_000,
        position_ms: 179_000,
    }
}

fn paused_at(position_ms: u64) -> PlayerStatus {
    PlayerStatus {
        paused: true,
        buffering: false,
        duration_ms: 180_000,
        position_ms,
    }
}

#[test]
fn test_start_loads_first_track() {
    let mut player = controller(&["a", "b", "c"]);
    assert_eq!(player.phase(), PlaybackPhase::NotStarted);

    player.start();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 0 });
    assert_eq!(player.player().loads, vec!["spotify:track:a"]);

    // repeated start requests are no-ops
    player.start();
    assert_eq!(player.player().loads.len(), 1);
}

#[test]
fn test_start_on_empty_mixtape_is_noop() {
    let mut player = controller(&[]);
    player.start();
    assert_eq!(player.phase(), PlaybackPhase::NotStarted);
    assert!(player.player().loads.is_empty());
}

#[test]
fn test_loaded_enters_playing() {
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });
    // a user-initiated load is not nudged with a play command
    assert_eq!(player.player().plays, 0);
}

#[test]
fn test_full_run_finishes_exactly_once() {
    let mut player = controller(&["a", "b", "c"]);
    player.start();
    player.loaded();

    // track 0 completes
    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 1 });
    player.loaded();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 1 });

    // track 1 completes
    player.on_status(&near_end());
    player.loaded();

    // track 2 completes: no advance past the last index
    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Finished);

    // stray reports after the end change nothing
    player.on_status(&near_end());
    player.on_status(&mid_track());
    assert_eq!(player.phase(), PlaybackPhase::Finished);

    assert_eq!(
        player.player().loads,
        vec!["spotify:track:a", "spotify:track:b", "spotify:track:c"]
    );
    // each auto-advance nudged the widget to keep playing
    assert_eq!(player.player().plays, 2);
}

#[test]
fn test_duplicate_completion_signals_advance_once() {
    let mut player = controller(&["a", "b", "c"]);
    player.start();
    player.loaded();

    player.on_status(&near_end());
    player.on_status(&near_end());

    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 1 });
    assert_eq!(player.player().loads.len(), 2);
}

#[test]
fn test_completion_guard_fires_once_per_track() {
    let mut player = controller(&["a"]);
    player.start();
    player.loaded();

    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Finished);
    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Finished);
}

#[test]
fn test_zero_duration_report_never_completes() {
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();

    // the widget reports zeros while it is still buffering metadata
    player.on_status(&PlayerStatus {
        paused: false,
        buffering: true,
        duration_ms: 0,
        position_ms: 0,
    });
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });
}

#[test]
fn test_navigation_bounds() {
    let mut player = controller(&["a", "b", "c"]);
    player.start();
    player.loaded();

    // previous at index 0 is a no-op
    player.previous();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });

    // out-of-range target is a no-op
    player.navigate(3);
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });

    // next at the last index is a no-op
    player.navigate(2);
    player.loaded();
    player.next();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 2 });
}

#[test]
fn test_navigation_ignored_while_load_in_flight() {
    let mut player = controller(&["a", "b", "c"]);
    player.start();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 0 });

    player.navigate(2);
    player.next();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 0 });
    assert_eq!(player.player().loads.len(), 1);
}

#[test]
fn test_user_navigation_steps_both_ways() {
    let mut player = controller(&["a", "b", "c"]);
    player.start();
    player.loaded();

    player.next();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 1 });
    player.loaded();

    player.previous();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 0 });
    player.loaded();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });

    assert_eq!(
        player.player().loads,
        vec!["spotify:track:a", "spotify:track:b", "spotify:track:a"]
    );
    // manual navigation never issues play commands
    assert_eq!(player.player().plays, 0);
}

#[test]
fn test_pause_state_follows_status_reports() {
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();

    player.on_status(&paused_at(60_000));
    assert_eq!(player.phase(), PlaybackPhase::Paused { index: 0 });

    player.on_status(&mid_track());
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });
}

#[test]
fn test_loaded_respects_last_reported_pause() {
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();

    // user pauses, then steps to the next track
    player.on_status(&paused_at(60_000));
    player.next();
    player.loaded();
    assert_eq!(player.phase(), PlaybackPhase::Paused { index: 1 });
}

#[test]
fn test_completion_also_fires_from_paused_phase() {
    // the widget reports paused=true together with the final position when a
    // track runs out on its own
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();

    player.on_status(&paused_at(179_500));
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 1 });
}

#[test]
fn test_restart_only_from_finished() {
    let mut player = controller(&["a"]);
    player.start();
    player.loaded();

    player.restart();
    assert_eq!(player.phase(), PlaybackPhase::Playing { index: 0 });

    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Finished);

    player.restart();
    assert_eq!(player.phase(), PlaybackPhase::Loading { target: 0 });
    assert_eq!(player.player().loads.len(), 2);

    // the restarted run can complete again
    player.loaded();
    player.on_status(&near_end());
    assert_eq!(player.phase(), PlaybackPhase::Finished);
}

#[test]
fn test_toggle_play_passthrough() {
    let mut player = controller(&["a"]);

    // nothing to toggle before the session starts
    player.toggle_play();
    assert_eq!(player.player().toggles, 0);

    player.start();
    player.loaded();
    player.toggle_play();
    assert_eq!(player.player().toggles, 1);
}

#[test]
fn test_ready_reloads_current_track() {
    let mut player = controller(&["a", "b"]);
    player.start();
    player.loaded();
    player.next();
    player.loaded();

    player.on_ready();
    assert_eq!(
        player.player().loads,
        vec!["spotify:track:a", "spotify:track:b", "spotify:track:b"]
    );
}

#[tokio::test]
async fn test_session_runs_mixtape_to_finish() {
    let mixtape = create_test_mixtape(&["a", "b"]);
    let (session, tx) = PlaybackSession::new(&mixtape, RecordingPlayer::default());
    let session = session.with_hold(Duration::from_millis(10));
    let handle = tokio::spawn(session.run());

    tx.send(SessionInput::Start).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    tx.send(SessionInput::Player(PlayerEvent::Status(near_end())))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    tx.send(SessionInput::Player(PlayerEvent::Status(near_end())))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    tx.send(SessionInput::Shutdown).await.unwrap();
    let controller = handle.await.unwrap();

    assert_eq!(controller.phase(), PlaybackPhase::Finished);
    assert_eq!(
        controller.player().loads,
        vec!["spotify:track:a", "spotify:track:b"]
    );
    assert!(controller.player().destroyed);
}

#[tokio::test]
async fn test_session_holds_navigation_while_loading() {
    let mixtape = create_test_mixtape(&["a", "b", "c"]);
    let (session, tx) = PlaybackSession::new(&mixtape, RecordingPlayer::default());
    let session = session.with_hold(Duration::from_millis(200));
    let handle = tokio::spawn(session.run());

    tx.send(SessionInput::Start).await.unwrap();
    // arrives well inside the hold window; must be dropped
    tx.send(SessionInput::Navigate(2)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;

    tx.send(SessionInput::Shutdown).await.unwrap();
    let controller = handle.await.unwrap();

    assert_eq!(controller.phase(), PlaybackPhase::Playing { index: 0 });
    assert_eq!(controller.player().loads.len(), 1);
}

#[tokio::test]
async fn test_session_ends_when_sender_dropped() {
    let mixtape = create_test_mixtape(&["a"]);
    let (session, tx) = PlaybackSession::new(&mixtape, RecordingPlayer::default());
    drop(tx);

    let controller = session.run().await;
    assert!(controller.player().destroyed);
}
