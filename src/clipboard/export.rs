//! Runs a platform strategy and turns its output into an [`ExportOutcome`].

use std::future::Future;
use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use super::outcome::{classify_output, is_single_line, ExportOutcome};
use super::scripts::ScriptStore;
use super::tool::ClipboardExportStrategy;

/// Anything that can save the clipboard image to a path.
pub trait ImageExporter {
    fn export(&self, target: &Path) -> impl Future<Output = ExportOutcome>;
}

impl<T: ImageExporter> ImageExporter for &T {
    fn export(&self, target: &Path) -> impl Future<Output = ExportOutcome> {
        (**self).export(target)
    }
}

/// Saves the clipboard image by running the platform script as a child
/// process.
///
/// The child is awaited without a timeout: a script that never exits keeps
/// the paste waiting.
pub struct ClipboardImageExporter {
    strategy: Box<dyn ClipboardExportStrategy>,
    scripts: ScriptStore,
}

impl ClipboardImageExporter {
    pub fn new(strategy: Box<dyn ClipboardExportStrategy>, scripts: ScriptStore) -> Self {
        Self { strategy, scripts }
    }

    pub fn strategy(&self) -> &dyn ClipboardExportStrategy {
        self.strategy.as_ref()
    }

    fn spawn_failure(&self, err: io::Error) -> ExportOutcome {
        if err.kind() == io::ErrorKind::NotFound {
            ExportOutcome::ToolMissing(self.strategy.name().to_string())
        } else {
            ExportOutcome::ExecutionError(err.to_string())
        }
    }
}

impl ImageExporter for ClipboardImageExporter {
    async fn export(&self, target: &Path) -> ExportOutcome {
        let script = match self.scripts.prepare(self.strategy.script()).await {
            Ok(path) => path,
            Err(e) => return ExportOutcome::ExecutionError(e.to_string()),
        };

        let program = self.strategy.program();
        let args = self.strategy.args(&script, target);
        tracing::debug!(
            program = %program.display(),
            script = %script.display(),
            target = %target.display(),
            "spawning clipboard script"
        );

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(program = %program.display(), error = %e, "clipboard script did not start");
                return self.spawn_failure(e);
            }
        };

        let outcome = classify_output(&output, self.strategy.missing_tool());
        if !is_single_line(&String::from_utf8_lossy(&output.stdout)) {
            tracing::warn!(
                script = %script.display(),
                "clipboard script printed more than one line"
            );
        }
        if let ExportOutcome::Saved(reported) = &outcome {
            if reported != target {
                tracing::warn!(
                    requested = %target.display(),
                    reported = %reported.display(),
                    "clipboard script reported a different path"
                );
            }
        }
        tracing::debug!(?outcome, status = %output.status, "clipboard script finished");
        outcome
    }
}
