use std::io::{self, BufRead};

use serde::Serialize;

/// A candidate line offered to the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Position among the non-empty input lines
    pub index: usize,
    pub title: String,
}

/// Turn input lines into entries, skipping empty ones.
pub fn entries_from_lines<I>(lines: I) -> Vec<Entry>
where
    I: IntoIterator<Item = String>,
{
    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, title)| Entry { index, title })
        .collect()
}

/// Read entries from a reader. Invalid UTF-8 is replaced rather than
/// dropping the line; a read error ends the input.
pub fn read_entries<R: BufRead>(reader: R) -> Vec<Entry> {
    let lines = reader.split(b'\n').map_while(Result::ok).map(|bytes| {
        let line = String::from_utf8_lossy(&bytes);
        line.strip_suffix('\r').unwrap_or(&line).to_string()
    });
    entries_from_lines(lines)
}

/// Read all entries from stdin (blocking).
pub fn read_stdin_entries() -> Vec<Entry> {
    read_entries(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn skips_empty_lines_and_numbers_the_rest() {
        let lines = ["alpha", "", "beta", ""].map(String::from);
        let entries = entries_from_lines(lines);
        assert_eq!(
            entries,
            vec![
                Entry { index: 0, title: "alpha".into() },
                Entry { index: 1, title: "beta".into() },
            ]
        );
    }

    #[test]
    fn invalid_utf8_line_does_not_end_input() {
        let input: &[u8] = b"alpha\n\xff\xfe\nbeta\n";
        let entries = read_entries(input);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "alpha");
        assert_eq!(entries[1].title, "\u{FFFD}\u{FFFD}");
        assert_eq!(entries[2], Entry { index: 2, title: "beta".into() });
    }

    #[test]
    fn strips_crlf_and_keeps_last_line_without_newline() {
        let input: &[u8] = b"one\r\n\r\ntwo";
        assert_eq!(titles(&read_entries(input)), vec!["one", "two"]);
    }
}
