//! Paste orchestration.
//!
//! A paste runs four steps in order and stops at the first failure:
//!
//! 1. check the document has been saved and derive the [`PasteRequest`]
//! 2. plan the image destination
//! 3. create the image folder
//! 4. export the clipboard image, then insert the markdown reference
//!
//! The document is only touched after the export reported a saved image.

mod error;

pub use error::PasteError;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::clipboard::{ExportOutcome, ImageExporter};
use crate::document::{Document, DocumentSource, InsertionPoint};
use crate::files::{ensure_folder, plan_image, ImagePlan};
use crate::notify::{Notifier, Severity};

/// Inputs of one paste, captured once when it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub document_path: PathBuf,
    pub document_base_name: String,
    pub insertion_point: InsertionPoint,
}

impl PasteRequest {
    /// Build a request for `document`, which must be saved.
    pub fn new<D: Document + ?Sized>(
        document: &D,
        insertion_point: InsertionPoint,
    ) -> Result<Self, PasteError> {
        let document_path = match document.source() {
            DocumentSource::Saved(path) => path,
            DocumentSource::Untitled => return Err(PasteError::UntitledDocument),
        };
        let document_base_name = document_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            document_path,
            document_base_name,
            insertion_point,
        })
    }

    /// Directory the document lives in.
    pub fn containing_folder(&self) -> &Path {
        self.document_path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// What a successful paste did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteReport {
    pub document: PathBuf,
    pub folder: PathBuf,
    pub file: PathBuf,
    pub markdown: String,
}

impl PasteReport {
    pub fn message(&self) -> String {
        format!("Pasted image {}", self.file.display())
    }
}

/// Runs pastes with a given exporter.
pub struct Paster<E> {
    exporter: E,
    date: Option<NaiveDate>,
}

impl<E: ImageExporter> Paster<E> {
    pub fn new(exporter: E) -> Self {
        Self {
            exporter,
            date: None,
        }
    }

    /// Use a fixed date for folder names instead of today.
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Paste the clipboard image into `document` at `at`.
    pub async fn paste<D: Document + ?Sized>(
        &self,
        document: &mut D,
        at: InsertionPoint,
    ) -> Result<PasteReport, PasteError> {
        let request = PasteRequest::new(document, at)?;

        let plan = plan_image(
            &request.document_base_name,
            request.containing_folder(),
            self.today(),
        );
        tracing::debug!(
            folder = %plan.folder_path.display(),
            file = %plan.file_name,
            "planned image destination"
        );

        ensure_folder(&plan.folder_path)
            .await
            .map_err(|source| PasteError::FolderCreationFailed {
                folder_name: plan.folder_name.clone(),
                folder: plan.folder_path.clone(),
                source,
            })?;

        match self.exporter.export(&plan.file_path).await {
            ExportOutcome::Saved(_) => {}
            ExportOutcome::NoImage => return Err(PasteError::NoImageInClipboard),
            ExportOutcome::ToolMissing(tool) => return Err(PasteError::ToolMissing { tool }),
            ExportOutcome::ExecutionError(message) => {
                return Err(PasteError::ProcessSpawnFailed { message })
            }
        }

        let markdown = plan.markdown_reference();
        document.insert(request.insertion_point, &markdown)?;

        Ok(report(&request, &plan, markdown))
    }

    /// Paste and report the outcome through `notifier`, exactly once.
    pub async fn run<D, N>(
        &self,
        document: &mut D,
        at: InsertionPoint,
        notifier: &N,
    ) -> Result<PasteReport, PasteError>
    where
        D: Document + ?Sized,
        N: Notifier + ?Sized,
    {
        let result = self.paste(document, at).await;
        match &result {
            Ok(report) => notifier.notify(Severity::Info, &report.message()),
            Err(err) => notifier.notify(err.severity(), &err.to_string()),
        }
        result
    }
}

fn report(request: &PasteRequest, plan: &ImagePlan, markdown: String) -> PasteReport {
    PasteReport {
        document: request.document_path.clone(),
        folder: plan.folder_path.clone(),
        file: plan.file_path.clone(),
        markdown,
    }
}
