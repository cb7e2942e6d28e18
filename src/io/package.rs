//! Zip packaging of a generated asset with its import instructions

use crate::io::configuration::{
    ARCHIVE_PREFIX, ARCHIVE_SUFFIX, FOLDER_PREFIX, INSTRUCTIONS_FILENAME,
};
use crate::io::error::{PackError, Result, invalid_parameter};
use crate::io::image::encode_png;
use crate::policy::Category;
use crate::synthesis::GenerationResult;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Prefixes used to name the archive and the folder inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackNaming {
    /// Prefix of the archive file name
    pub archive_prefix: String,
    /// Prefix of the folder holding the assets
    pub folder_prefix: String,
}

impl Default for PackNaming {
    fn default() -> Self {
        Self {
            archive_prefix: ARCHIVE_PREFIX.to_string(),
            folder_prefix: FOLDER_PREFIX.to_string(),
        }
    }
}

impl PackNaming {
    /// Archive file name, e.g. `Redot_liquid_Pack.zip`
    pub fn archive_name(&self, category: Category) -> String {
        format!("{}_{category}{ARCHIVE_SUFFIX}.zip", self.archive_prefix)
    }

    /// Folder inside the archive, e.g. `Redot_Assets_liquid`
    pub fn folder_name(&self, category: Category) -> String {
        format!("{}_{category}", self.folder_prefix)
    }
}

/// Write a pack archive for `result` into `output_dir`
///
/// The archive holds one folder with the encoded image under its suggested
/// file name and the import instructions as plain text.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - A prefix would produce an unsafe path inside the archive
/// - PNG encoding or archive writing fails
pub fn write_pack(
    result: &GenerationResult,
    naming: &PackNaming,
    output_dir: &Path,
) -> Result<PathBuf> {
    let archive_name = naming.archive_name(result.category);
    let folder = naming.folder_name(result.category);
    check_path_component("archive_prefix", &archive_name)?;
    check_path_component("folder_prefix", &folder)?;
    let image_bytes = encode_png(&result.raster)?;

    std::fs::create_dir_all(output_dir).map_err(|e| PackError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let archive_path = output_dir.join(archive_name);

    let file = File::create(&archive_path).map_err(|e| PackError::FileSystem {
        path: archive_path.clone(),
        operation: "create archive",
        source: e,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let image_entry = format!("{folder}/{}", result.suggested_filename);
    let instructions_entry = format!("{folder}/{INSTRUCTIONS_FILENAME}");
    add_file(&mut zip, &archive_path, &image_entry, &image_bytes, options)?;
    add_file(
        &mut zip,
        &archive_path,
        &instructions_entry,
        result.instructions_text.as_bytes(),
        options,
    )?;

    zip.finish().map_err(|e| PackError::Archive {
        path: archive_path.clone(),
        source: e,
    })?;

    info!(archive = %archive_path.display(), "pack written");
    Ok(archive_path)
}

// Prefixes are user-configurable; a separator or parent reference would escape the pack
fn check_path_component(parameter: &'static str, name: &str) -> Result<()> {
    if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(invalid_parameter(
            parameter,
            &name,
            &"must be a single file name without separators",
        ));
    }
    Ok(())
}

fn add_file(
    zip: &mut ZipWriter<File>,
    archive_path: &Path,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| PackError::Archive {
            path: archive_path.to_path_buf(),
            source: e,
        })?;
    zip.write_all(content).map_err(|e| PackError::FileSystem {
        path: archive_path.to_path_buf(),
        operation: "write archive entry",
        source: e,
    })?;
    Ok(())
}
