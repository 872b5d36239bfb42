//! Extension allow-list used by the "images only" mode.

use std::collections::BTreeSet;
use std::fmt;

use super::entry::FileEntry;

/// Extensions recognised as images when no custom list is configured.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"];

/// Set of normalized extensions (lower-case, with leading dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowList {
    exts: BTreeSet<String>,
}

impl ExtensionAllowList {
    /// The built-in image list.
    pub fn images() -> Self {
        Self::from_iter(IMAGE_EXTENSIONS.iter().copied())
    }

    /// Normalize one user-supplied extension: trim, lower-case, ensure a leading dot.
    /// Returns None for blank input.
    pub fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "." {
            return None;
        }
        let lower = trimmed.to_lowercase();
        if lower.starts_with('.') {
            Some(lower)
        } else {
            Some(format!(".{lower}"))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(&ext.to_lowercase())
    }

    /// Whether `entry` is eligible for relocation.
    pub fn allows(&self, entry: &FileEntry) -> bool {
        self.contains(&entry.extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let exts = iter
            .into_iter()
            .filter_map(|s| Self::normalize(s.as_ref()))
            .collect();
        Self { exts }
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        Self::images()
    }
}

impl fmt::Display for ExtensionAllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn normalizes_user_input() {
        let list: ExtensionAllowList = ["JPG", " .Png ", "", "."].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert!(list.contains(".jpg"));
        assert!(list.contains(".PNG"));
        assert_eq!(list.to_string(), ".jpg,.png");
    }

    #[test]
    fn images_list_matches_uppercase_files() {
        let list = ExtensionAllowList::images();
        let upper = FileEntry::new(PathBuf::from("dir/IMG_0001.JPEG")).unwrap();
        let text = FileEntry::new(PathBuf::from("dir/notes.txt")).unwrap();
        let bare = FileEntry::new(PathBuf::from("dir/README")).unwrap();
        assert!(list.allows(&upper));
        assert!(!list.allows(&text));
        assert!(!list.allows(&bare));
    }
}
