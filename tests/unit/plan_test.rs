//! Unit tests for image destination planning

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use mdpaste::files::{plan_image, plan_image_with_id};
use mdpaste::{Buffer, InsertionPoint, PasteRequest};

#[test]
fn notes_md_on_march_first() {
    let buffer = Buffer::named("/proj/notes.md", "");
    let request = PasteRequest::new(&buffer, InsertionPoint::End).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let plan = plan_image(
        &request.document_base_name,
        request.containing_folder(),
        date,
    );

    assert_eq!(plan.folder_path, PathBuf::from("/proj/2024-03-01-notes"));
    assert_eq!(plan.folder_name, "2024-03-01-notes");
    assert!(plan.file_path.starts_with("/proj/2024-03-01-notes"));
}

#[test]
fn plan_holds_for_many_names_and_dates() {
    let names = ["notes", "README", "with space", "dotted.name", "日本語"];
    let dates = [(1999, 12, 31), (2024, 2, 29), (2030, 7, 4)];

    for name in names {
        for (y, m, d) in dates {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let folder = Path::new("/data/docs");
            let plan = plan_image(name, folder, date);

            let expected = format!("{}-{}", date.format("%Y-%m-%d"), name);
            assert_eq!(plan.folder_name, expected);
            assert_eq!(plan.folder_path, folder.join(&expected));
            assert_eq!(plan.file_path.parent(), Some(plan.folder_path.as_path()));
        }
    }
}

#[test]
fn reference_links_bare_file_name() {
    let id = uuid::Uuid::nil();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let plan = plan_image_with_id("notes", Path::new("/proj"), date, id);

    assert_eq!(
        plan.markdown_reference(),
        "![00000000-0000-0000-0000-000000000000](00000000-0000-0000-0000-000000000000.png)"
    );
    assert!(!plan.markdown_reference().contains(&plan.folder_name));
}
