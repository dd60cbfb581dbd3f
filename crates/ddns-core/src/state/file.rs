// # File State Store
//
// File-based implementation of StateStore.
//
// ## File Format
//
// UTF-8 text, exactly one line: the address followed by a newline.
//
// ```text
// 203.0.113.5
// ```
//
// ## Reading
//
// Anything other than a single valid line (missing file, empty file, several
// lines, bad syntax, non-UTF-8 bytes) loads as "no cached address". Only
// genuine I/O failures such as permission errors are reported.
//
// ## Writing
//
// The new content is written to a sibling `.tmp` file which is then renamed
// over the cache path, so readers see either the old or the new record.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace, warn};

use crate::address::Ipv4Address;
use crate::error::Error;
use crate::traits::state_store::StateStore;

/// File-based state store
///
/// # Example
///
/// ```rust,no_run
/// use ddns_core::state::FileStateStore;
/// use ddns_core::traits::StateStore;
/// use ddns_core::Ipv4Address;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileStateStore::new("/var/cache/current_public_ip");
///
///     store.save(&Ipv4Address::new("203.0.113.5")?).await?;
///
///     let cached = store.load().await?;
///     assert_eq!(cached, Some(Ipv4Address::new("203.0.113.5")?));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Create a store backed by `path`
    ///
    /// Nothing is touched on disk until the first [`save`](StateStore::save).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get path to temporary file for atomic writes
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Characters that end a line, besides the `\r\n` pair
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `content` into lines on any of [`LINE_BREAKS`]
///
/// A trailing break does not open an empty final line, so `"a\n"` is one line
/// and `"a\n\n"` is two.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let Some(at) = rest.find(LINE_BREAKS) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..at]);

        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }

    lines
}

/// Extract the cached address from raw file content
///
/// Returns `None` unless the content is exactly one line that, once trimmed,
/// is a valid address.
pub(crate) fn parse_record(content: &str) -> Option<Ipv4Address> {
    match split_lines(content).as_slice() {
        [line] => Ipv4Address::new(line.trim()).ok(),
        _ => None,
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self) -> Result<Option<Ipv4Address>, Error> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache file does not exist: {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::state_store(format!(
                    "Failed to read cache file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let Ok(content) = String::from_utf8(bytes) else {
            warn!(
                "Cache file {} is not valid UTF-8, ignoring it",
                self.path.display()
            );
            return Ok(None);
        };

        let record = parse_record(&content);
        if record.is_none() {
            warn!(
                "Cache file {} is malformed, ignoring it",
                self.path.display()
            );
        }
        Ok(record)
    }

    async fn save(&self, address: &Ipv4Address) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::state_store(format!(
                    "Failed to create cache directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::state_store(format!(
                    "Failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(format!("{}\n", address).as_bytes())
                .await
                .map_err(|e| {
                    Error::state_store(format!(
                        "Failed to write to temp file {}: {}",
                        temp_path.display(),
                        e
                    ))
                })?;

            file.sync_all().await.map_err(|e| {
                Error::state_store(format!(
                    "Failed to flush temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::state_store(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        trace!("Cache written to file: {}", self.path.display());
        Ok(())
    }
}
