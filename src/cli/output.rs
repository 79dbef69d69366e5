//! Output formatting utilities for the non-interactive modes.

use std::io::{self, Write};

use punnet::{FetchError, Headline, HeadlineId, Pun};

/// Writes one `id<TAB>headline` line per headline, in backend order.
pub fn write_headlines<W: Write>(writer: &mut W, headlines: &[Headline]) -> Result<(), FetchError> {
    for headline in headlines {
        writeln!(
            writer,
            "{}\t{}",
            headline.headline_id,
            single_line(&headline.headline)
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes one pun per line, in backend order, or a notice when there are
/// none.
pub fn write_puns<W: Write>(
    writer: &mut W,
    headline_id: &HeadlineId,
    puns: &[Pun],
) -> Result<(), FetchError> {
    if puns.is_empty() {
        return writeln!(writer, "No puns for headline {headline_id}").map_err(|e| io_error(&e));
    }
    for pun in puns {
        writeln!(writer, "{}", single_line(&pun.generated)).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Keeps one record per output line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts an I/O error to a [`FetchError::Io`].
pub(crate) fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
