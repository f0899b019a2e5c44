//! Destination naming for pasted images.
//!
//! An image pasted into `/notes/todo.md` on 2024-03-01 lands in
//! `/notes/2024-03-01-todo/<uuid>.png`. The folder groups a day's images
//! per document; the random file name keeps pastes from colliding.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Extension of every generated image file.
pub const IMAGE_EXTENSION: &str = "png";

/// Date format used for the folder prefix.
const FOLDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a single paste writes its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePlan {
    /// Absolute path of the per-day image folder.
    pub folder_path: PathBuf,
    /// Absolute path of the image file, always directly inside `folder_path`.
    pub file_path: PathBuf,
    /// `<YYYY-MM-DD>-<document base name>`
    pub folder_name: String,
    /// `<uuid>.png`
    pub file_name: String,
}

impl ImagePlan {
    /// File name without the `.png` extension, used as alt text.
    pub fn image_stem(&self) -> &str {
        self.file_name
            .strip_suffix(&format!(".{}", IMAGE_EXTENSION))
            .unwrap_or(&self.file_name)
    }

    /// Markdown image reference for this plan: `![<stem>](<file_name>)`.
    ///
    /// The link target is the bare file name without the folder, so it only
    /// resolves when the renderer looks next to the image itself.
    pub fn markdown_reference(&self) -> String {
        format!("![{}]({})", self.image_stem(), self.file_name)
    }
}

/// Plan the destination of a new image with a fresh random identifier.
pub fn plan_image(base_name: &str, containing_folder: &Path, date: NaiveDate) -> ImagePlan {
    plan_image_with_id(base_name, containing_folder, date, Uuid::new_v4())
}

/// Plan the destination of a new image using the given identifier.
pub fn plan_image_with_id(
    base_name: &str,
    containing_folder: &Path,
    date: NaiveDate,
    id: Uuid,
) -> ImagePlan {
    let folder_name = format!("{}-{}", date.format(FOLDER_DATE_FORMAT), base_name);
    let file_name = format!("{}.{}", id.hyphenated(), IMAGE_EXTENSION);
    let folder_path = containing_folder.join(&folder_name);
    let file_path = folder_path.join(&file_name);

    ImagePlan {
        folder_path,
        file_path,
        folder_name,
        file_name,
    }
}
