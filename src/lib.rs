//! mdpaste Library
//!
//! Paste the system clipboard's image into a markdown document: the image is
//! saved next to the document and a reference to it is inserted at the
//! cursor.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod files;
pub mod notify;
pub mod paste;
pub mod theme;

pub use clipboard::{ClipboardImageExporter, ExportOutcome, ImageExporter, Platform};
pub use config::Config;
pub use document::{Buffer, Document, DocumentSource, InsertionPoint, MarkdownFile};
pub use files::ImagePlan;
pub use notify::{ConsoleNotifier, Notifier, Severity};
pub use paste::{PasteError, PasteReport, PasteRequest, Paster};
