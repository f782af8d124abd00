//! Photo uploads: one row per selected file.

use reviewhub_validator::error::ConfigError;
use reviewhub_validator::rows::RowList;
use reviewhub_validator::rule::Rule;
use reviewhub_validator::schema::{FieldSchema, FormSchema};

pub const CAPTION_MAX: usize = 100;

/// One photo with its caption.
#[must_use]
pub fn photo_row() -> FormSchema {
    FormSchema::new([
        FieldSchema::new("photo", [Rule::required("Please choose a photo to upload")]),
        FieldSchema::new(
            "caption",
            [Rule::max_length(
                CAPTION_MAX,
                format!("Captions must be at most {CAPTION_MAX} characters"),
            )],
        ),
    ])
}

/// An empty upload list; the page adds a row per selected file.
pub fn photo_upload() -> Result<RowList, ConfigError> {
    Ok(RowList::new(photo_row().build()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_validate_independently() {
        let mut upload = photo_upload().unwrap();
        let first = upload.add_row();
        let second = upload.add_row();
        upload
            .row_mut(first)
            .unwrap()
            .handle_changes([("photo", "storefront.jpg"), ("caption", "Front door")])
            .unwrap();

        let report = upload.submit(|_| ()).blocked().unwrap();
        assert_eq!(report.failing_rows().collect::<Vec<_>>(), vec![second]);

        upload.remove_row(second).unwrap();
        let payloads = upload.submit(|p| p).sent().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["caption"], "Front door");
    }
}
