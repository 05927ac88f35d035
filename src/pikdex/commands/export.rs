use crate::collection::Collection;
use crate::commands::{attach_warnings, CmdMessage, CmdResult};
use crate::error::{PikdexError, Result};
use crate::export::{to_delimited_text, EXPORT_MIME};
use crate::store::DataStore;
use crate::view::{filter as filter_entries, EntryFilter};
use std::fs;
use std::path::PathBuf;

/// Where exported text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    File(PathBuf),
    /// Returned in [`CmdResult::export_text`] for the caller to print.
    Stdout,
}

/// Exports the (optionally filtered) collection in storage order.
///
/// An empty selection is reported as a warning and nothing is written.
pub fn run<S: DataStore>(
    collection: &mut Collection<S>,
    filter: &EntryFilter,
    target: ExportTarget,
) -> Result<CmdResult> {
    let entries = filter_entries(collection.all(), filter);
    let mut result = CmdResult::default();

    let text = match to_delimited_text(&entries) {
        Ok(text) => text,
        Err(PikdexError::EmptyExport) => {
            result.add_message(CmdMessage::warning("No data to export!"));
            attach_warnings(collection, &mut result);
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    match target {
        ExportTarget::File(path) => {
            fs::write(&path, &text).map_err(PikdexError::Io)?;
            log::info!("exported {} entries to {}", entries.len(), path.display());
            result.add_message(CmdMessage::success(format!(
                "Exported {} entries to {} ({})",
                entries.len(),
                path.display(),
                EXPORT_MIME
            )));
            result.export_path = Some(path);
        }
        ExportTarget::Stdout => {
            result.export_text = Some(text);
        }
    }

    attach_warnings(collection, &mut result);
    Ok(result)
}
