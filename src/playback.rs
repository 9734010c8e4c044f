//! Cadence-based replay of a simulation trace.
//!
//! The engine computes a whole run up front; the [`PlaybackDriver`] presents
//! it one pose per fixed tick so a UI can animate the agent. The driver owns
//! its timer task outright: starting a run spawns one tokio task, stopping
//! aborts it, and a stale handle from a finished run is simply dropped on the
//! next start. Only one run can be live per driver at a time.

use crate::engine::{ExecutionResult, simulate};
use crate::pose::{Pose, RoomBounds};
use crate::program::InstructionProgram;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Where the driver currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No run has been started yet.
    Idle,
    /// A run is ticking through its trace.
    Running,
    /// The last run delivered its final result.
    Completed,
    /// The last run was stopped before completion; its result was suppressed.
    Cancelled,
}

/// Timing of a playback run.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackConfig {
    /// Delay before each trace pose is delivered.
    pub step_interval: Duration,

    /// Extra delay between the last trace pose and the final result.
    pub completion_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_secs(1),
            completion_delay: Duration::from_secs(1),
        }
    }
}

/// Receiver for playback output.
///
/// Implemented by the UI collaborator. `on_step` fires once per executed
/// instruction, strictly in trace order; `on_complete` fires exactly once per
/// run that finishes naturally, and never after [`PlaybackDriver::stop`].
pub trait PlaybackSink: Send + Sync {
    /// An intermediate pose, with its zero-based index into the trace.
    fn on_step(&self, index: usize, pose: Pose);

    /// The final result of a run that was not cancelled.
    fn on_complete(&self, result: ExecutionResult);
}

/// Reasons a start request is refused. The driver's state is unchanged in
/// both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The instruction program has no instructions to execute.
    #[error("instruction program is empty")]
    EmptyProgram,

    /// A previous run is still ticking; stop it before starting another.
    #[error("a playback run is already active")]
    AlreadyRunning,
}

/// Replays simulation traces at a fixed cadence.
///
/// Must be used inside a tokio runtime: [`start`](Self::start) spawns the
/// ticking task with [`tokio::spawn`].
pub struct PlaybackDriver {
    config: PlaybackConfig,
    phase: Arc<Mutex<PlaybackPhase>>,
    task: Option<JoinHandle<()>>,
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl PlaybackDriver {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            phase: Arc::new(Mutex::new(PlaybackPhase::Idle)),
            task: None,
        }
    }

    /// The driver's current lifecycle phase.
    pub fn phase(&self) -> PlaybackPhase {
        *lock(&self.phase)
    }

    /// Runs `program` from `start` and replays the trace through `sink`.
    ///
    /// The whole trace is computed eagerly via [`simulate`] before the first
    /// tick. Each pose is delivered after one `step_interval`; after the last
    /// pose and one further `completion_delay`, the sink receives the
    /// [`ExecutionResult`] and the driver transitions to
    /// [`PlaybackPhase::Completed`].
    ///
    /// A Completed or Cancelled driver restarts implicitly: the trace is
    /// recomputed from the program as it stands now. A Running driver refuses
    /// with [`PlaybackError::AlreadyRunning`]; an empty program refuses with
    /// [`PlaybackError::EmptyProgram`]. Neither refusal changes any state.
    pub fn start(
        &mut self,
        start: Pose,
        bounds: RoomBounds,
        program: &InstructionProgram,
        sink: Arc<dyn PlaybackSink>,
    ) -> Result<(), PlaybackError> {
        if program.is_empty() {
            return Err(PlaybackError::EmptyProgram);
        }
        if let Some(task) = &self.task
            && !task.is_finished()
        {
            return Err(PlaybackError::AlreadyRunning);
        }
        // Previous run's handle (if any) is finished; release it.
        self.task = None;

        let run = simulate(start, bounds, program.as_slice());
        debug!(steps = run.trace.len(), "starting playback");

        *lock(&self.phase) = PlaybackPhase::Running;
        let phase = Arc::clone(&self.phase);
        let config = self.config;

        self.task = Some(tokio::spawn(async move {
            for (index, pose) in run.trace.iter().copied().enumerate() {
                tokio::time::sleep(config.step_interval).await;
                if *lock(&phase) != PlaybackPhase::Running {
                    return;
                }
                trace!(index, ?pose, "playback step");
                sink.on_step(index, pose);
            }

            tokio::time::sleep(config.completion_delay).await;
            if *lock(&phase) != PlaybackPhase::Running {
                return;
            }
            let result = run.report();
            debug!(?result, "playback complete");
            sink.on_complete(result);
            *lock(&phase) = PlaybackPhase::Completed;
        }));

        Ok(())
    }

    /// Halts a running playback immediately.
    ///
    /// Remaining trace steps are discarded and the completion result is
    /// suppressed; the sink hears nothing further from this run. Outside
    /// [`PlaybackPhase::Running`] this is a no-op.
    pub fn stop(&mut self) {
        let mut phase = lock(&self.phase);
        if *phase != PlaybackPhase::Running {
            return;
        }
        *phase = PlaybackPhase::Cancelled;
        drop(phase);

        if let Some(task) = self.task.take() {
            task.abort();
        }
        debug!("playback cancelled");
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// A poisoned phase lock only means a sink panicked mid-callback; the phase
// value itself is always valid, so recover it rather than propagate.
fn lock(phase: &Mutex<PlaybackPhase>) -> MutexGuard<'_, PlaybackPhase> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullSink;

    impl PlaybackSink for NullSink {
        fn on_step(&self, _index: usize, _pose: Pose) {}
        fn on_complete(&self, _result: ExecutionResult) {}
    }

    #[test]
    fn new_driver_is_idle() {
        let driver = PlaybackDriver::default();
        assert_eq!(driver.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn empty_program_is_refused_without_state_change() {
        let mut driver = PlaybackDriver::default();
        let err = driver.start(
            Pose::new(0, 0, 0),
            RoomBounds::new(4, 3),
            &InstructionProgram::default(),
            Arc::new(NullSink),
        );
        assert_eq!(err, Err(PlaybackError::EmptyProgram));
        assert_eq!(driver.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut driver = PlaybackDriver::default();
        driver.stop();
        assert_eq!(driver.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn errors_render_for_display() {
        assert_eq!(
            PlaybackError::EmptyProgram.to_string(),
            "instruction program is empty"
        );
        assert_eq!(
            PlaybackError::AlreadyRunning.to_string(),
            "a playback run is already active"
        );
    }
}
