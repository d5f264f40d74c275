//! Stage workers and the shared output sink.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::{FaultPolicy, PipelineError, PipelineReport};
use crate::scaffold::{GeneratedTest, ScaffoldEngine};

/// A source read by the Read stage.
#[derive(Debug)]
pub(super) struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// A generated test on its way to the Write stage.
#[derive(Debug)]
pub(super) struct TestFile {
    /// Source the test was generated from
    pub origin: PathBuf,
    pub test: GeneratedTest,
}

type SharedReceiver<T> = Arc<Mutex<mpsc::Receiver<T>>>;

/// Counters and results of one worker; merged when workers join.
#[derive(Debug, Default)]
pub(super) struct StageTally {
    files_read: usize,
    sources_generated: usize,
    tests_generated: usize,
    written: Vec<PathBuf>,
    failures: Vec<PipelineError>,
}

impl StageTally {
    pub fn merge(&mut self, other: StageTally) {
        self.files_read += other.files_read;
        self.sources_generated += other.sources_generated;
        self.tests_generated += other.tests_generated;
        self.written.extend(other.written);
        self.failures.extend(other.failures);
    }

    pub fn into_report(mut self) -> PipelineReport {
        self.written.sort();
        PipelineReport {
            files_read: self.files_read,
            sources_generated: self.sources_generated,
            tests_generated: self.tests_generated,
            written: self.written,
            failures: self.failures,
        }
    }

    /// Apply the fault policy to a failed item.
    fn fault(&mut self, policy: FaultPolicy, err: PipelineError) -> Result<(), PipelineError> {
        match policy {
            FaultPolicy::Abort => Err(err),
            FaultPolicy::Skip => {
                tracing::warn!(error = %err, "skipping item");
                self.failures.push(err);
                Ok(())
            }
        }
    }
}

/// Receive the next item; the lock is only held by one idle worker at a time.
async fn next_item<T>(rx: &SharedReceiver<T>) -> Option<T> {
    rx.lock().await.recv().await
}

/// Queue every input path, then close the queue.
pub(super) async fn feed(inputs: Vec<PathBuf>, tx: mpsc::Sender<PathBuf>) -> Result<StageTally, PipelineError> {
    for path in inputs {
        if tx.send(path).await.is_err() {
            break;
        }
    }
    Ok(StageTally::default())
}

pub(super) async fn read_worker(
    rx: SharedReceiver<PathBuf>,
    tx: mpsc::Sender<SourceFile>,
    policy: FaultPolicy,
) -> Result<StageTally, PipelineError> {
    let mut tally = StageTally::default();
    while let Some(path) = next_item(&rx).await {
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "read source");
                tally.files_read += 1;
                if tx.send(SourceFile { path, text }).await.is_err() {
                    break;
                }
            }
            Err(source) => tally.fault(policy, PipelineError::Read { path, source })?,
        }
    }
    Ok(tally)
}

pub(super) async fn generate_worker(
    engine: Arc<ScaffoldEngine>,
    rx: SharedReceiver<SourceFile>,
    tx: mpsc::Sender<TestFile>,
    policy: FaultPolicy,
) -> Result<StageTally, PipelineError> {
    let mut tally = StageTally::default();
    while let Some(SourceFile { path, text }) = next_item(&rx).await {
        let engine = Arc::clone(&engine);
        let generated = tokio::task::spawn_blocking(move || engine.generate(&text))
            .await
            .map_err(|e| PipelineError::WorkerPanicked(format!("generating `{}`: {e}", path.display())))?;

        match generated {
            Ok(tests) => {
                tracing::debug!(path = %path.display(), tests = tests.len(), "generated tests");
                tally.sources_generated += 1;
                tally.tests_generated += tests.len();
                for test in tests {
                    let item = TestFile {
                        origin: path.clone(),
                        test,
                    };
                    if tx.send(item).await.is_err() {
                        return Ok(tally);
                    }
                }
            }
            Err(err) => {
                let source = err.with_file_name(path.display().to_string());
                tally.fault(policy, PipelineError::Parse { path, source })?;
            }
        }
    }
    Ok(tally)
}

pub(super) async fn write_worker(
    sink: Arc<OutputSink>,
    rx: SharedReceiver<TestFile>,
    policy: FaultPolicy,
) -> Result<StageTally, PipelineError> {
    let mut tally = StageTally::default();
    while let Some(TestFile { origin, test }) = next_item(&rx).await {
        let path = match sink.claim(&test.qualified_name, &origin) {
            Ok(path) => path,
            Err(err) => {
                tally.fault(policy, err)?;
                continue;
            }
        };
        match tokio::fs::write(&path, test.source.as_bytes()).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "wrote test");
                tally.written.push(path);
            }
            Err(source) => tally.fault(policy, PipelineError::Write { path, source })?,
        }
    }
    Ok(tally)
}

/// Destination of generated tests; hands out each file name once.
#[derive(Debug)]
pub(super) struct OutputSink {
    dir: PathBuf,
    extension: String,
    claimed: std::sync::Mutex<HashSet<String>>,
}

impl OutputSink {
    pub fn new(dir: PathBuf, extension: String) -> Self {
        Self {
            dir,
            extension,
            claimed: std::sync::Mutex::new(HashSet::new()),
        }
    }

    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        let file_name = if self.extension.is_empty() {
            qualified_name.to_string()
        } else {
            format!("{qualified_name}.{}", self.extension)
        };
        self.dir.join(file_name)
    }

    /// Reserve the output path of `qualified_name`; a second claim of the same name fails.
    pub fn claim(&self, qualified_name: &str, origin: &Path) -> Result<PathBuf, PipelineError> {
        let path = self.path_for(qualified_name);
        let mut claimed = self.claimed.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if claimed.insert(qualified_name.to_string()) {
            Ok(path)
        } else {
            Err(PipelineError::DuplicateOutput {
                qualified_name: qualified_name.to_string(),
                origin: origin.to_path_buf(),
                path,
            })
        }
    }
}
