// Zip snapshot writer

use crate::archive::types::ArchiveEntry;
use crate::error::{Result, SaveError};
use std::fs::File;
use std::io::{BufWriter, copy};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write every entry into a new deflate archive at `dest`.
///
/// A failure part-way leaves the partial archive on disk.
pub fn write_zip(dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(dest).map_err(|e| SaveError::io(dest, e))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(entries.iter().any(|e| e.size >= u32::MAX as u64));

    for entry in entries {
        let mut source = File::open(&entry.source).map_err(|e| SaveError::io(&entry.source, e))?;
        writer.start_file(entry.name.as_str(), options)?;
        copy(&mut source, &mut writer).map_err(|e| SaveError::io(&entry.source, e))?;
    }

    writer.finish()?;
    Ok(())
}
