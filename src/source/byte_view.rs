//! Memory-mapped view of a file's bytes.
//!
//! A shared mapping follows the file: bytes appended after mapping are not
//! visible, but if the file is truncated, touching a page past the new end
//! raises `SIGBUS`. Readers must ask [`ByteView::is_truncated`] before each
//! read and re-map instead of reading when it reports true.

use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::Path;

/// Read-only, randomly addressable view of a file, sized as it was when
/// opened.
///
/// A view is never patched. When the file changes, open a new one and drop
/// the old.
#[derive(Debug)]
pub struct ByteView {
    /// Kept open to check the file's current length against the mapping.
    file: File,
    /// `None` for an empty file; zero-length mappings are not portable.
    map: Option<Mmap>,
}

impl ByteView {
    /// Map `path` read-only.
    ///
    /// # Errors
    ///
    /// Any I/O error from opening, inspecting or mapping the file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        if file.metadata()?.len() == 0 {
            return Ok(Self { file, map: None });
        }

        // SAFETY:
        // - The file is opened read-only and only `&[u8]` is handed out.
        // - Pages past a later truncation fault on access. Every read in this
        //   crate goes through `ScrollingWindow`, which checks
        //   `is_truncated` first and reports `Scan::Truncated` instead.
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self {
            file,
            map: Some(map),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the file is now shorter than this view.
    ///
    /// A file whose length cannot be read counts as truncated. An empty view
    /// maps nothing and is never truncated.
    pub fn is_truncated(&self) -> bool {
        if self.map.is_none() {
            return false;
        }
        self.file
            .metadata()
            .map_or(true, |meta| meta.len() < self.len() as u64)
    }
}

impl Deref for ByteView {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
