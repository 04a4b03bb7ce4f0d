use crate::error::{ErrorType, MapStampErr, StampError, WithItem};
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

const HASH_KEY: &str = "${SHORT_GIT_HASH}";

/// One literal-text substitution against one template file.
pub struct VersionChange {
    pub file_path: PathBuf,
    pub old_text: &'static str,
    pub new_text_template: &'static str,
}

pub static CHANGES: Lazy<Vec<VersionChange>> = Lazy::new(|| {
    vec![VersionChange {
        file_path: ["templates", "base.html"].iter().collect(),
        old_text: r#"<meta name="generator" content="wordle-archive" />"#,
        new_text_template: r#"<meta name="generator" content="wordle-archive ${SHORT_GIT_HASH}" />"#,
    }]
});

impl VersionChange {
    /// Rewrites the file with every occurrence of `old_text` replaced by the
    /// rendered template. A file without the marker is rewritten unchanged.
    pub fn perform(&self, short_git_hash: &str) -> Result<(), StampError> {
        let body_utf8 = fs::read(&self.file_path).map_stamp_err(
            WithItem::Template,
            ErrorType::Io,
            &self.file_path,
            None,
        )?;
        let body = String::from_utf8(body_utf8).map_stamp_err(
            WithItem::Template,
            ErrorType::Utf8,
            &self.file_path,
            None,
        )?;

        let new_text = self.new_text_template.replace(HASH_KEY, short_git_hash);
        let body = body.replace(self.old_text, &new_text);

        fs::write(&self.file_path, body).map_stamp_err(
            WithItem::Template,
            ErrorType::Io,
            &self.file_path,
            None,
        )
    }
}
