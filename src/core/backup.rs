use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::audit::audit;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::same_file;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the CSV store to `dest_file`, optionally replacing the copy with a `.zip`.
    /// Returns the path actually written, or `None` if the user declined to overwrite.
    pub fn backup(
        cfg: &Config,
        src: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check store exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "data file not found: {}",
                src.display()
            )));
        }

        if same_file(src, dest) {
            return Err(AppError::Backup(
                "destination is the data file itself".to_string(),
            ));
        }

        if compress && dest.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
            return Err(AppError::Backup(format!(
                "'{}' already has a .zip extension, pass the uncompressed name",
                dest.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Target (the .zip when compressing) exists → ask confirmation
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if target.exists() && !force && !confirm_overwrite(&target)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy, or stream the data file straight into the archive
        let final_path = if compress {
            compress_backup(src, dest, &target)?
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
            target
        };

        audit(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!(
        "The file '{}' already exists. Overwrite it?",
        dest.display()
    ));
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Write `src` into a .zip at `zip_path`, stored under the file name of `dest`.
/// No uncompressed copy is written.
fn compress_backup(src: &Path, dest: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("invalid backup path: {}", dest.display())))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    success(format!("Compressed backup created: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
