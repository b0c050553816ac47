//! Curriculum library: uploaded teaching material kept in object storage,
//! with a metadata row per file in the record store.

pub mod handlers;
pub mod storage;

use uuid::Uuid;

pub const OBJECT_KEY_PREFIX: &str = "curriculum";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Keeps ASCII alphanumerics, `.`, `-` and `_`; everything else becomes `_`.
/// Leading dots are dropped so a name can never walk up the key hierarchy.
pub fn sanitize_file_name(raw: &str) -> String {
    let cleaned: String = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

pub fn object_key(id: Uuid, file_name: &str) -> String {
    format!("{OBJECT_KEY_PREFIX}/{id}/{}", sanitize_file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_file_name("fractions-week1.pdf"), "fractions-week1.pdf");
    }

    #[test]
    fn test_sanitize_strips_directories_and_spaces() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\docs\\Class 5 Maths.pdf"), "Class_5_Maths.pdf");
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
    }

    #[test]
    fn test_object_key_layout() {
        let id = Uuid::nil();
        assert_eq!(
            object_key(id, "notes.txt"),
            "curriculum/00000000-0000-0000-0000-000000000000/notes.txt"
        );
    }
}
