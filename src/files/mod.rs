//! Filesystem side of a paste: where the image goes and making room for it.

pub mod folder;
pub mod plan;

pub use folder::ensure_folder;
pub use plan::{plan_image, plan_image_with_id, ImagePlan, IMAGE_EXTENSION};
