use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Copy the SQLite file somewhere safe; optionally wrap it in a zip.
/// The store is a single file, so a plain copy is a complete backup.
pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;

        let final_path = if compress {
            let zipped = zip_file(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed copy: {}", e));
            }
            zipped
        } else {
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        // Audit row goes into the live DB, not the copy.
        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

fn zip_file(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let mut zip = ZipWriter::new(fs::File::create(&zip_path)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "database.sqlite".to_string());

    zip.start_file(name, options).map_err(std::io::Error::other)?;
    std::io::copy(&mut fs::File::open(path)?, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
