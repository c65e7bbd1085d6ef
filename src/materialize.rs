//! Ranked output materialization
//!
//! Writes a ranking run's results to the output root: destructively clears
//! whatever was there, writes the consolidated ranking manifest, then copies
//! every instance subtree under a rank-prefixed name.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::config::RankConfig;
use crate::error::util::validate_directory;
use crate::error::{RankError, Result};
use crate::models::PredictionRecord;

/// Materialize the ranked sequence under `output_root`.
///
/// Clears the output root, writes the manifest, then copies each instance
/// subtree from the input root to `NNNN-<instance_id>` in rank order (rank 1
/// first). Any failure after the clear leaves partial output in place; there
/// is no rollback.
pub fn materialize(
    ranked: &[PredictionRecord],
    input_root: &Path,
    output_root: &Path,
    config: &RankConfig,
) -> Result<()> {
    validate_directory(output_root, "materializing ranked output")?;

    clear_output_root(output_root)?;
    write_manifest(ranked, output_root, config)?;
    copy_ranked_instances(ranked, input_root, output_root, config)?;

    info!("materialized {} ranked instances under {}", ranked.len(), output_root.display());
    Ok(())
}

/// Remove every file and subdirectory directly under the output root.
///
/// Scoped here so the one destructive operation of the pipeline is easy to
/// audit. Irreversible; no confirmation, no backup.
fn clear_output_root(output_root: &Path) -> Result<()> {
    let entries =
        fs::read_dir(output_root).map_err(|e| RankError::io("failed to list output root", output_root, e))?;

    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| RankError::io("failed to read output root entry", output_root, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| RankError::io("failed to stat output entry", &path, e))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| RankError::io("failed to clear output directory", &path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| RankError::io("failed to clear output file", &path, e))?;
        }
        removed += 1;
    }

    debug!("cleared {removed} stale entries from {}", output_root.display());
    Ok(())
}

/// Write the full ranked sequence as an indented JSON manifest.
///
/// Every field of every record is included, in rank order. The 6-space
/// indentation matches the manifest format downstream consumers already
/// parse.
fn write_manifest(ranked: &[PredictionRecord], output_root: &Path, config: &RankConfig) -> Result<()> {
    let path = output_root.join(&config.manifest_filename);
    let file = fs::File::create(&path).map_err(|e| RankError::io("failed to create ranking manifest", &path, e))?;
    let writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"      ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    ranked
        .serialize(&mut serializer)
        .map_err(|e| RankError::json(&path, e))?;
    serializer
        .into_inner()
        .flush()
        .map_err(|e| RankError::io("failed to flush ranking manifest", &path, e))?;

    debug!("wrote ranking manifest {}", path.display());
    Ok(())
}

/// Copy each ranked instance subtree to its rank-prefixed output name.
fn copy_ranked_instances(
    ranked: &[PredictionRecord],
    input_root: &Path,
    output_root: &Path,
    config: &RankConfig,
) -> Result<()> {
    for (index, record) in ranked.iter().enumerate() {
        let rank = index + 1;
        let src = input_root.join(&record.instance_id);
        let dest = output_root.join(format!(
            "{rank:0width$}-{id}",
            width = config.rank_prefix_width,
            id = record.instance_id
        ));

        copy_dir_recursive(&src, &dest)?;
        debug!("rank {rank}: copied {} -> {}", src.display(), dest.display());
    }
    Ok(())
}

/// Recursively copy a directory tree. The destination must not exist yet;
/// a collision is a fatal error, as is a missing source.
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir(dest).map_err(|e| RankError::io("failed to create output instance directory", dest, e))?;

    let entries = fs::read_dir(src).map_err(|e| RankError::io("failed to list instance directory", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| RankError::io("failed to read instance entry", src, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| RankError::io("failed to stat instance entry", &from, e))?;

        if file_type.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| RankError::io("failed to copy instance file", &from, e))?;
        }
    }
    Ok(())
}
