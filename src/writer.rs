/*!
 * Plain-text export writer
 *
 * Layout of the artifact:
 *
 * ```text
 * # PROJECT EXPORT
 * # Date: <root directory name>
 *
 * ==================================================
 * FILE_PATH: <relative/path>
 * ==================================================
 * <content>
 *
 * ```
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header marker line
pub const HEADER_MARKER: &str = "# PROJECT EXPORT";

/// Character repeated to form the record delimiter
pub const DELIMITER_CHAR: char = '=';

/// Number of delimiter characters per line
pub const DELIMITER_WIDTH: usize = 50;

/// Writer for the export artifact
pub struct ExportWriter<W: Write> {
    inner: W,
    delimiter: String,
    bytes_written: u64,
}

impl ExportWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ExportWriter<W> {
    /// Wrap an arbitrary sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            delimiter: DELIMITER_CHAR.to_string().repeat(DELIMITER_WIDTH),
            bytes_written: 0,
        }
    }

    /// Write the header block. The second line carries the root directory
    /// name under the historical `Date` label.
    pub fn write_header(&mut self, root_name: &str) -> io::Result<()> {
        let header = format!("{HEADER_MARKER}\n# Date: {root_name}\n\n");
        self.emit(header.as_bytes())
    }

    /// Write one framed record
    pub fn write_record(&mut self, label: &str, content: &str) -> io::Result<()> {
        let framing = format!(
            "{delim}\nFILE_PATH: {label}\n{delim}\n",
            delim = self.delimiter
        );
        self.emit(framing.as_bytes())?;
        self.emit(content.as_bytes())?;
        self.emit(b"\n\n")
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn emit(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.bytes_written += buf.len() as u64;
        Ok(())
    }
}
