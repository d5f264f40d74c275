//! Concurrent scaffolding pipeline
//!
//! Streams many source files through three independently sized worker pools:
//!
//! ```text
//! inputs ─▶ [Read × R] ─▶ [Generate × G] ─▶ [Write × W] ─▶ <output_dir>/<QualifiedName>.<ext>
//!        paths        sources            generated tests
//! ```
//!
//! Stages are connected by bounded `tokio::sync::mpsc` queues; the workers of a pool share the stage's receiver.
//! Completion propagates by channel closure: the feeder drops its sender once every input is queued, and each pool's
//! senders drop when its workers drain, closing the next queue. A run is complete when every worker has joined.
//!
//! ## Faults
//!
//! Under [`FaultPolicy::Abort`] the first failing item aborts all workers and [`Pipeline::run`] returns its error.
//! Under [`FaultPolicy::Skip`] the item is logged, recorded in [`PipelineReport::failures`] and the run continues.
//! Two fixtures with the same qualified name would write the same file; the second claim is a
//! [`PipelineError::DuplicateOutput`].

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod stages;

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use testgen_core::lang::conventions;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

use crate::scaffold::{ParseError, ScaffoldEngine};

use stages::{OutputSink, StageTally};

/// What to do when one item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Stop every worker and fail the run
    #[default]
    Abort,
    /// Record the failure and keep going
    Skip,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub read_workers: NonZeroUsize,
    pub generate_workers: NonZeroUsize,
    pub write_workers: NonZeroUsize,
    /// Capacity of each inter-stage queue
    pub queue_capacity: NonZeroUsize,
    pub output_dir: PathBuf,
    /// Extension of written files, without the dot
    pub extension: String,
    pub fault_policy: FaultPolicy,
}

const DEFAULT_QUEUE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

impl PipelineConfig {
    /// One worker per stage, writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            read_workers: NonZeroUsize::MIN,
            generate_workers: NonZeroUsize::MIN,
            write_workers: NonZeroUsize::MIN,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            output_dir: output_dir.into(),
            extension: conventions::SOURCE_EXTENSION.to_string(),
            fault_policy: FaultPolicy::default(),
        }
    }

    /// Set the read, generate and write pool sizes.
    pub fn with_workers(mut self, read: NonZeroUsize, generate: NonZeroUsize, write: NonZeroUsize) -> Self {
        self.read_workers = read;
        self.generate_workers = generate;
        self.write_workers = write;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }
}

/// Failure of one item, or of the run itself.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("cannot create output directory `{}`: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{qualified_name}` generated from `{}` would overwrite `{}`", origin.display(), path.display())]
    DuplicateOutput {
        qualified_name: String,
        origin: PathBuf,
        path: PathBuf,
    },

    #[error("pipeline worker failed: {0}")]
    WorkerPanicked(String),
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Sources read successfully
    pub files_read: usize,
    /// Sources parsed and scaffolded successfully
    pub sources_generated: usize,
    /// Test sources produced by the engine
    pub tests_generated: usize,
    /// Files written, sorted
    pub written: Vec<PathBuf>,
    /// Items skipped under [`FaultPolicy::Skip`]
    pub failures: Vec<PipelineError>,
}

/// Three-stage read/generate/write pipeline around a shared [`ScaffoldEngine`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    engine: Arc<ScaffoldEngine>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(engine: Arc<ScaffoldEngine>, config: PipelineConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Scaffold every file in `inputs` into the output directory.
    ///
    /// The output directory is created if missing. Items are processed in no particular order.
    ///
    /// ## Errors
    ///
    /// Returns the first item failure under [`FaultPolicy::Abort`], [`PipelineError::OutputDir`] if the output
    /// directory cannot be created, or [`PipelineError::WorkerPanicked`] if a worker task dies.
    #[tracing::instrument(skip_all, fields(inputs = inputs.len()))]
    pub async fn run(&self, inputs: Vec<PathBuf>) -> Result<PipelineReport, PipelineError> {
        let config = &self.config;
        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|source| PipelineError::OutputDir {
                path: config.output_dir.clone(),
                source,
            })?;

        let capacity = config.queue_capacity.get();
        let policy = config.fault_policy;
        let (path_tx, path_rx) = mpsc::channel(capacity);
        let (source_tx, source_rx) = mpsc::channel(capacity);
        let (test_tx, test_rx) = mpsc::channel(capacity);

        let mut workers: JoinSet<Result<StageTally, PipelineError>> = JoinSet::new();
        workers.spawn(stages::feed(inputs, path_tx));

        let path_rx = Arc::new(Mutex::new(path_rx));
        for _ in 0..config.read_workers.get() {
            workers.spawn(stages::read_worker(Arc::clone(&path_rx), source_tx.clone(), policy));
        }
        drop(source_tx);

        let source_rx = Arc::new(Mutex::new(source_rx));
        for _ in 0..config.generate_workers.get() {
            workers.spawn(stages::generate_worker(
                Arc::clone(&self.engine),
                Arc::clone(&source_rx),
                test_tx.clone(),
                policy,
            ));
        }
        drop(test_tx);

        let sink = Arc::new(OutputSink::new(config.output_dir.clone(), config.extension.clone()));
        let test_rx = Arc::new(Mutex::new(test_rx));
        for _ in 0..config.write_workers.get() {
            workers.spawn(stages::write_worker(Arc::clone(&sink), Arc::clone(&test_rx), policy));
        }

        let mut tally = StageTally::default();
        while let Some(joined) = workers.join_next().await {
            let outcome = joined.map_err(|e| PipelineError::WorkerPanicked(e.to_string())).and_then(|r| r);
            match outcome {
                Ok(worker_tally) => tally.merge(worker_tally),
                Err(err) => {
                    tracing::debug!(error = %err, "aborting pipeline");
                    workers.abort_all();
                    while workers.join_next().await.is_some() {}
                    return Err(err);
                }
            }
        }

        let report = tally.into_report();
        tracing::info!(
            files_read = report.files_read,
            tests_generated = report.tests_generated,
            written = report.written.len(),
            failures = report.failures.len(),
            "pipeline finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::new("out");
        assert_eq!(config.read_workers.get(), 1);
        assert_eq!(config.queue_capacity.get(), 64);
        assert_eq!(config.extension, "cs");
        assert_eq!(config.fault_policy, FaultPolicy::Abort);
    }

    #[test]
    fn test_config_builders() {
        let n = |v| NonZeroUsize::new(v).unwrap();
        let config = PipelineConfig::new("out")
            .with_workers(n(2), n(3), n(4))
            .with_queue_capacity(n(1))
            .with_extension("txt")
            .with_fault_policy(FaultPolicy::Skip);
        assert_eq!(
            (config.read_workers.get(), config.generate_workers.get(), config.write_workers.get()),
            (2, 3, 4)
        );
        assert_eq!(config.queue_capacity.get(), 1);
        assert_eq!(config.extension, "txt");
        assert_eq!(config.fault_policy, FaultPolicy::Skip);
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = PipelineError::Read {
            path: PathBuf::from("src/A.cs"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot read `src/A.cs`: missing");
    }
}
