// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::WorkLogTable;
use crate::ui::messages::{info, warning};
use crate::utils::path::{absolutize, same_file};
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the full table.
    ///
    /// - `format`: explicit format, or `None` to infer it from the extension
    /// - `file`: output path (relative paths resolve against the current dir)
    /// - `data_file`: the live store, which is never overwritten by an export
    ///
    /// Returns the written path, or `None` if the user declined to overwrite.
    pub fn export(
        table: &WorkLogTable,
        format: Option<ExportFormat>,
        file: &str,
        data_file: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = absolutize(Path::new(file));

        if same_file(&path, data_file) {
            return Err(AppError::Export(format!(
                "{} is the data file itself; choose another output file",
                path.display()
            )));
        }

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(&path)?,
        };

        if !ensure_writable(&path, force)? {
            info("Export cancelled: existing file not overwritten.");
            return Ok(None);
        }

        if table.is_empty() {
            warning("No saved work logs: exporting headers only.");
        }

        match format {
            ExportFormat::Csv => export_csv(table, &path)?,
            ExportFormat::Json => export_json(table, &path)?,
            ExportFormat::Xlsx => export_xlsx(table, &path)?,
        }

        Ok(Some(path))
    }
}
