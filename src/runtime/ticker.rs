use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{BlobError, BlobResult},
    foundation::random::RandomSource,
    runtime::animator::{Animator, SceneFrame},
    scene::model::SceneConfig,
};

/// Fixed-interval driver for an [`Animator`].
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> BlobResult<Self> {
        if interval.is_zero() {
            return Err(BlobError::validation("ticker interval must be > 0"));
        }
        Ok(Self { interval })
    }

    pub fn from_scene(scene: &SceneConfig) -> BlobResult<Self> {
        Self::new(Duration::from_millis(scene.tick_interval_ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `animator` on a dedicated thread, calling `on_frame` after every step.
    ///
    /// The loop runs until the returned handle is stopped or dropped. A late tick does not
    /// build up a backlog: the next deadline is measured from the time the late tick finished.
    pub fn start<R, F>(
        &self,
        mut animator: Animator<R>,
        mut on_frame: F,
    ) -> BlobResult<TickerHandle<R>>
    where
        R: RandomSource + Send + 'static,
        F: FnMut(&SceneFrame) + Send + 'static,
    {
        let interval = self.interval;
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let join = std::thread::Builder::new()
            .name("blobdrift-ticker".to_string())
            .spawn(move || {
                let mut deadline = Instant::now() + interval;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }

                    on_frame(animator.step());

                    let now = Instant::now();
                    deadline += interval;
                    if deadline < now {
                        deadline = now + interval;
                    }
                }
                animator
            })
            .context("spawn ticker thread")?;

        tracing::info!(?interval, "ticker started");
        Ok(TickerHandle {
            stop_tx: Some(stop_tx),
            join: Some(join),
        })
    }
}

/// Owner of a running ticker thread. Dropping it stops the loop and joins the thread.
pub struct TickerHandle<R> {
    stop_tx: Option<mpsc::Sender<()>>,
    join: Option<JoinHandle<Animator<R>>>,
}

impl<R> TickerHandle<R> {
    /// Stop the loop, join the thread and hand the animator back.
    ///
    /// No `on_frame` call is in flight once this returns; [`Animator::ticks`] on the returned
    /// animator counts every tick that was delivered.
    pub fn stop(mut self) -> BlobResult<Animator<R>> {
        self.shutdown()
            .ok_or_else(|| BlobError::Other(anyhow::anyhow!("ticker already stopped")))?
    }

    pub fn is_running(&self) -> bool {
        self.join.as_ref().is_some_and(|j| !j.is_finished())
    }

    fn shutdown(&mut self) -> Option<BlobResult<Animator<R>>> {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let join = self.join.take()?;
        let res = join
            .join()
            .map_err(|_| BlobError::Other(anyhow::anyhow!("ticker thread panicked")));
        if let Ok(animator) = &res {
            tracing::info!(ticks = animator.ticks(), "ticker stopped");
        }
        Some(res)
    }
}

impl<R> Drop for TickerHandle<R> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/ticker.rs"]
mod tests;
