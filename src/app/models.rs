use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "full_project_code.txt";

pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".idea",
    ".vscode",
    "target",
    "build",
    "dist",
    "bin",
    "obj",
    "__pycache__",
    ".mvn",
    "gradle",
];

pub const DEFAULT_IGNORED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "mvnw",
    "mvnw.cmd",
    "gradlew",
    "gradlew.bat",
    ".gitignore",
    ".DS_Store",
    env!("CARGO_PKG_NAME"),
    concat!(env!("CARGO_PKG_NAME"), ".exe"),
];

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // JVM backend
    ".java",
    ".xml",
    ".properties",
    // Web frontend
    ".js",
    ".jsx",
    ".ts",
    ".tsx",
    ".css",
    ".html",
    ".json",
    // Native
    ".cpp",
    ".c",
    ".h",
    ".hpp",
];

/// Settings for one run, built once by `resolve_config` and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub ignored_dirs: Vec<String>,
    pub ignored_files: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_OUTPUT),
            to_owned(DEFAULT_IGNORED_DIRS),
            to_owned(DEFAULT_IGNORED_FILES),
            to_owned(DEFAULT_EXTENSIONS),
            Vec::new(),
        )
    }
}

impl Config {
    /// Builds a config, adding the output file's name to the ignored files so a
    /// run never feeds its own output back in.
    pub fn new(
        output_path: PathBuf,
        ignored_dirs: Vec<String>,
        mut ignored_files: Vec<String>,
        allowed_extensions: Vec<String>,
        exclude: Vec<String>,
    ) -> Self {
        if let Some(name) = output_path.file_name().and_then(|n| n.to_str()) {
            if !ignored_files.iter().any(|f| f == name) {
                ignored_files.push(name.to_string());
            }
        }

        Self {
            output_path,
            ignored_dirs,
            ignored_files,
            allowed_extensions,
            exclude,
        }
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }

    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignored_files.iter().any(|f| f == name)
    }

    /// Plain suffix comparison: `script.test.ts` matches `.ts`, `notats` and
    /// `app.TS` do not.
    pub fn has_allowed_extension(&self, name: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One filesystem node visited by the scanner.
#[derive(Debug)]
pub struct TraversalEntry {
    pub path: PathBuf,
    pub relative_path: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub relative_path: String,
    pub reason: String,
}

/// Outcome of one aggregation run.
#[derive(Debug)]
pub struct WriteReport {
    pub output_path: PathBuf,
    pub added: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

impl WriteReport {
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            added: Vec::new(),
            skipped: Vec::new(),
        }
    }
}
