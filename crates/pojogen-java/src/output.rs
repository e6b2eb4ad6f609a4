use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pojogen_core::GeneratedUnit;

/// Write each unit to `<dir>/<name>.java`, creating `dir` if needed.
pub fn write_units(dir: &Path, units: &[GeneratedUnit]) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    units
        .iter()
        .map(|unit| {
            let path = dir.join(unit.file_name("java"));
            fs::write(&path, &unit.code)?;
            log::debug!("wrote {}", path.display());
            Ok(path)
        })
        .collect()
}
