//! Splicing entries into the action registration table.
//!
//! The registry is edited as opaque text: the table is located by scanning
//! for two literal marker lines, never by parsing Go. Entries are inserted
//! at a fixed offset relative to the closing marker, which assumes the
//! marker is directly preceded by the last entry line with no blank
//! separator in between.

use std::path::{Path, PathBuf};

use crate::{ActionNames, Error, Result};

/// Opening line of the registration table, matched verbatim.
const TABLE_OPEN: &str = "var actions = Actions{\n";

/// Closing line of the registration table: the first `}` line strictly
/// after the opening marker, matched verbatim.
const TABLE_CLOSE: &str = "}\n";

/// The action registration file (`cmd/actions/actions.go`), held as an
/// ordered sequence of lines with their endings preserved so that
/// everything outside the spliced entry round-trips byte-for-byte.
#[derive(Debug)]
pub struct ActionsRegistry {
    path: PathBuf,
    lines: Vec<String>,
}

impl ActionsRegistry {
    /// Open a registry file and split it into lines.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let lines = content.split_inclusive('\n').map(str::to_string).collect();

        Ok(Self { path, lines })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the full document text.
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// Insert the constructor-call entry for `names` into the table.
    ///
    /// The entry line `\t<constructor>(),` is inserted at index
    /// `close - 1`, where `close` is the index of the closing marker. The
    /// table must hold at least one entry already; registering the same
    /// action twice inserts two entries, so callers guard against
    /// duplicates before calling this.
    pub fn register(&mut self, names: &ActionNames) -> Result<()> {
        let open = self.find_line(TABLE_OPEN, 0)?;
        let close = self.find_line(TABLE_CLOSE, open + 1)?;

        self.lines
            .insert(close - 1, format!("\t{}(),\n", names.constructor_name()));

        Ok(())
    }

    /// Constructor names currently listed in the table, in table order.
    pub fn entries(&self) -> Result<Vec<String>> {
        let open = self.find_line(TABLE_OPEN, 0)?;
        let close = self.find_line(TABLE_CLOSE, open + 1)?;

        Ok(self.lines[open + 1..close]
            .iter()
            .filter_map(|line| line.trim().strip_suffix("(),"))
            .map(str::to_string)
            .collect())
    }

    /// Save the current content to disk, replacing the file entirely.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.content()).map_err(|e| Error::write(&self.path, e))?;
        Ok(())
    }

    fn find_line(&self, marker: &str, from: usize) -> Result<usize> {
        self.lines[from..]
            .iter()
            .position(|line| line.as_str() == marker)
            .map(|i| i + from)
            .ok_or_else(|| Error::anchor_not_found(&self.path, marker.trim_end_matches('\n')))
    }
}
