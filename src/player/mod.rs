//! # Player Module
//!
//! The sequential-listening engine. A decoded mixtape plus a handle to the
//! external single-track player widget become a strict forward-progress
//! state machine: one track at a time, in order, auto-advancing when a track
//! completes.
//!
//! ## Architecture
//!
//! The split keeps timing out of the state machine:
//!
//! - [`controller`] - `SequentialPlayer`, a synchronous state machine. Every
//!   transition is a plain method call; the only inputs are user navigation,
//!   the typed player event union, and a `loaded` notification. It owns the
//!   external player handle and issues `load`/`play` commands to it as side
//!   effects of transitions.
//! - [`session`] - `PlaybackSession`, the cooperative event loop. A single
//!   task multiplexes user actions and player events over one channel and
//!   owns the fixed transition-hold timer that feeds `loaded` back into the
//!   controller. At most one navigation is ever in flight, by construction.
//!
//! ## Guards
//!
//! Two one-shot guards make the ordering safe without locks:
//!
//! - the *in-flight* guard: navigation requests are ignored while a load is
//!   pending, so a late completion report for a superseded track can never
//!   cause a double advance;
//! - the *completion* guard: each track advances at most once, however many
//!   near-boundary status reports arrive.

pub mod controller;
pub mod session;

pub use controller::{PlaybackPhase, SequentialPlayer, TrackPlayer};
pub use session::{PlaybackSession, SessionInput};
