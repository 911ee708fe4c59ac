/// One folder of a project tree and the files placed directly inside it.
///
/// This is the unit a template or an interactive session stages before the
/// materializer turns it into real directories and empty files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Folder path relative to the layout root. The empty string addresses
    /// the root itself.
    pub folder: String,
    /// File names created directly inside the folder. An empty name is a
    /// slot placeholder and never becomes an artifact.
    pub files: Vec<String>,
}
impl LayoutEntry {
    pub fn new(folder: &str, files: &[&str]) -> Self {
        Self {
            folder: folder.to_string(),
            files: files.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// An ordered list of folder-to-files mappings describing a directory tree
/// to materialize.
///
/// Order fixes creation order only. Folder creation is recursive and
/// idempotent, so entries may reuse parent paths freely; same-named files
/// across entries are last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub entries: Vec<LayoutEntry>,
}
impl Layout {
    pub fn new(entries: Vec<LayoutEntry>) -> Self {
        Self { entries }
    }
}
