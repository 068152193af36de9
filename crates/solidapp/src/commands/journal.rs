use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::sink::{save_journal, ContentSink};

/// Record `texts` in a fresh journal and, when `save_as` is given, save it
/// through `sink`.
pub fn run<K: ContentSink + ?Sized, I: AsRef<str>>(
    sink: &K,
    texts: &[I],
    save_as: Option<&str>,
) -> Result<CmdResult> {
    let mut journal = Journal::new();
    for text in texts {
        journal.add_entry(text.as_ref());
    }

    let mut result = CmdResult {
        journal_entries: journal.entries().to_vec(),
        ..Default::default()
    };

    if journal.is_empty() {
        result.add_message(CmdMessage::info("No entries recorded."));
        if save_as.is_some() {
            result.add_message(CmdMessage::warning("Nothing to save."));
        }
        return Ok(result);
    }

    if let Some(name) = save_as {
        let path = save_journal(sink, &journal, name)?;
        result.add_message(CmdMessage::success(format!(
            "Saved {} entries to {}",
            journal.len(),
            path.display()
        )));
        result = result.with_saved_paths(vec![path]);
    }

    Ok(result)
}
