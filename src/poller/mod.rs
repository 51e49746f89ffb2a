//! Poll → clear → render → sleep loop
//!
//! Each cycle lists the running containers, turns them into rows and writes
//! a whole frame (clear sequence plus table) to the output in one write.
//! The loop stops when the shutdown future resolves, when the runtime stays
//! unreachable for too long, or on any non-transient error.

use std::future::Future;
use std::io::Write;

use crate::config::Config;
use crate::runtime::{ContainerSource, SourceError};
use crate::table::{build_rows, render_frame};

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("giving up after {attempts} consecutive failed polls: {last}")]
    GaveUp { attempts: u32, last: SourceError },

    #[error("failed to write frame: {0}")]
    Output(#[from] std::io::Error),
}

pub struct Poller<S, W> {
    source: S,
    out: W,
    config: Config,
}

impl<S: ContainerSource, W: Write> Poller<S, W> {
    pub fn new(source: S, out: W, config: Config) -> Self {
        Self {
            source,
            out,
            config,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run a single cycle. Returns the number of rows rendered.
    pub async fn cycle(&mut self) -> Result<usize, PollError> {
        let records = self.source.list_running().await?;
        let rows = build_rows(&records);
        let frame = render_frame(&rows, self.config.palette)?;

        self.out.write_all(&frame)?;
        self.out.flush()?;
        Ok(rows.len())
    }

    /// Poll until `shutdown` resolves or an unrecoverable error occurs.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<(), PollError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut failures: u32 = 0;

        loop {
            let result = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping poller");
                    return Ok(());
                }
                result = self.cycle() => result,
            };

            if self.config.once {
                return result.map(|_| ());
            }

            match result {
                Ok(count) => {
                    if failures > 0 {
                        tracing::info!(
                            "Container runtime reachable again after {} failed polls",
                            failures
                        );
                    }
                    failures = 0;
                    tracing::debug!("Rendered {} containers", count);
                }
                // Only an unreachable runtime is worth another try
                Err(PollError::Source(err)) if err.is_transient() => {
                    failures += 1;
                    tracing::warn!(
                        "Poll failed ({}/{}): {}",
                        failures,
                        self.config.max_consecutive_failures,
                        err
                    );
                    if failures >= self.config.max_consecutive_failures {
                        return Err(PollError::GaveUp {
                            attempts: failures,
                            last: err,
                        });
                    }
                }
                Err(err) => return Err(err),
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping poller");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.config.interval) => {}
            }
        }
    }
}
