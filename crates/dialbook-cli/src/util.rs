use crate::error::not_found;
use anyhow::Result;
use dialbook_store::ContactManager;

/// Maps a 1-based position from the command line to a list index.
pub fn index_for(manager: &ContactManager, position: usize) -> Result<usize> {
    if position == 0 || position > manager.len() {
        return Err(not_found(format!("no contact at position {position}")));
    }
    Ok(position - 1)
}

pub fn frequent_marker(is_frequent: bool) -> &'static str {
    if is_frequent {
        "*"
    } else {
        " "
    }
}
