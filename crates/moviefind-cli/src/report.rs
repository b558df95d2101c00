//! Plain-text rendering of movie search results.

use moviefind_api::SearchError;
use moviefind_api::tmdb::MovieSummary;

/// Maximum overview line width, in characters.
pub const WRAP_WIDTH: usize = 50;

/// Text shown in place of a missing value.
const NO_DATA: &str = "No Data";

/// Tab stop used when expanding tabs in an overview.
const TAB_SIZE: usize = 8;

/// Separator placed between two movie blocks.
pub const BLOCK_SEPARATOR: &str = "\n-------------------------\n";

/// Renders every summary as a `Title`/`Year`/`Overview` block and joins
/// the blocks with [`BLOCK_SEPARATOR`].
///
/// # Errors
///
/// Returns `SearchError::BadReturn` if `summaries` is empty.
pub fn format_summaries(summaries: &[MovieSummary]) -> Result<String, SearchError> {
    if summaries.is_empty() {
        return Err(SearchError::bad_return("no movies to format"));
    }

    let blocks: Vec<String> = summaries.iter().map(format_summary).collect();
    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Renders a single summary block.
fn format_summary(summary: &MovieSummary) -> String {
    let title = summary.title.as_deref().unwrap_or(NO_DATA);
    let year = extract_year(summary.release_date.as_deref());
    let overview = wrap_text(summary.overview.as_deref().unwrap_or(NO_DATA), WRAP_WIDTH);

    format!("Title: {title}\nYear: {year}\nOverview: {overview}")
}

/// Extracts the year from a `YYYY-MM-DD` release date.
///
/// An absent date yields `""`; a date whose first `-` segment is empty
/// yields `"No Data"`. The two cases stay distinct.
#[must_use]
pub fn extract_year(release_date: Option<&str>) -> &str {
    let Some(date) = release_date else {
        return "";
    };
    match date.split('-').next() {
        Some(year) if !year.is_empty() => year,
        _ => NO_DATA,
    }
}

/// Greedily wraps `text` into lines of at most `width` characters.
///
/// Tabs expand to the next multiple of eight columns and every other ASCII
/// whitespace character becomes one space. Whitespace inside a line is kept
/// as is; a whitespace run is dropped only where a line ends or, after the
/// first line, where one starts. Hyphenated words may break after a hyphen.
/// A chunk longer than `width` first fills the rest of the current line and
/// is then split, preferring a hyphen inside the part that fits.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let chars = normalize_whitespace(text);
    let mut chunks = split_chunks(&chars);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        let mut line: Vec<&[char]> = Vec::new();
        let mut line_len = 0usize;
        while let Some(&chunk) = chunks.last() {
            let len = line_len.saturating_add(chunk.len());
            if len > width {
                break;
            }
            line.push(chunk);
            line_len = len;
            chunks.pop();
        }

        if let Some(next) = chunks.last_mut()
            && next.len() > width
        {
            let (head, tail) = split_long_chunk(*next, width.saturating_sub(line_len));
            line.push(head);
            *next = tail;
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.iter().flat_map(|c| c.iter()).collect());
        }
    }

    lines.join("\n")
}

/// Expands tabs and maps the remaining ASCII whitespace to spaces.
fn normalize_whitespace(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let fill = TAB_SIZE.saturating_sub(column);
                out.extend(std::iter::repeat_n(' ', fill));
                column = 0;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\u{0b}' | '\u{0c}' => out.push(' '),
            _ => out.push(c),
        }
        if !matches!(c, '\t' | '\n' | '\r') {
            column = column.saturating_add(1);
            if column == TAB_SIZE {
                column = 0;
            }
        }
    }
    out
}

/// Splits normalized text into space runs and words.
fn split_chunks(chars: &[char]) -> Vec<&[char]> {
    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < chars.len() {
        let end = chunk_end(chars, start);
        chunks.push(chars.get(start..end).unwrap_or_default());
        start = end;
    }
    chunks
}

/// Returns the end of the chunk starting at `start`.
///
/// A word ends at a space, after a hyphen joining letter runs
/// (`heart-` / `stopping`), or before a `--` dash that leads into a word.
/// Such a dash run following a word character is a chunk of its own.
fn chunk_end(chars: &[char], start: usize) -> usize {
    let at = |i: usize| chars.get(i).copied();
    let back = |i: usize, n: usize| i.checked_sub(n).and_then(|j| chars.get(j)).copied();
    let letter = |c: Option<char>| c.is_some_and(is_letter);

    if at(start) == Some(' ') {
        return run_end(chars, start, ' ');
    }
    if back(start, 1).is_some_and(is_word_punct)
        && let Some(end) = dash_run_into_word(chars, start)
    {
        return end;
    }

    let mut pos = start.saturating_add(1);
    loop {
        match at(pos) {
            None | Some(' ') => return pos,
            Some('-') => {
                let next = pos.saturating_add(1);
                let after_word = letter(back(pos, 2)) && letter(back(pos, 1));
                let after_hyphenated =
                    letter(back(pos, 3)) && back(pos, 2) == Some('-') && letter(back(pos, 1));
                let before_word = letter(at(next))
                    && (letter(at(next.saturating_add(1)))
                        || (at(next.saturating_add(1)) == Some('-')
                            && letter(at(next.saturating_add(2)))));
                if (after_word || after_hyphenated) && before_word {
                    return next;
                }
                if back(pos, 1).is_some_and(is_word_punct)
                    && dash_run_into_word(chars, pos).is_some()
                {
                    return pos;
                }
            }
            Some(_) => {}
        }
        pos = pos.saturating_add(1);
    }
}

/// Returns the end of a run of two or more dashes at `start` that is
/// followed by a word character.
fn dash_run_into_word(chars: &[char], start: usize) -> Option<usize> {
    let end = run_end(chars, start, '-');
    let next_is_word = chars.get(end).copied().is_some_and(is_word);
    (end.saturating_sub(start) >= 2 && next_is_word).then_some(end)
}

/// Returns the end of the run of `c` starting at `start`.
fn run_end(chars: &[char], start: usize, c: char) -> usize {
    let run = chars
        .get(start..)
        .map_or(0, |tail| tail.iter().take_while(|&&x| x == c).count());
    start.saturating_add(run)
}

/// Splits an over-long chunk so the head fits in `space_left` characters.
///
/// The split moves back to just after the last hyphen inside the head when
/// that hyphen is preceded by something other than dashes.
fn split_long_chunk(chunk: &[char], space_left: usize) -> (&[char], &[char]) {
    let mut end = space_left.min(chunk.len());
    if let Some(hyphen) = chunk
        .get(..end)
        .and_then(|head| head.iter().rposition(|&c| c == '-'))
        && chunk
            .get(..hyphen)
            .is_some_and(|head| head.iter().any(|&c| c != '-'))
    {
        end = hyphen.saturating_add(1);
    }
    chunk.split_at(end)
}

/// Whether a chunk is whitespace only.
fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|c| c.is_whitespace())
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn summary(title: Option<&str>, overview: Option<&str>, date: Option<&str>) -> MovieSummary {
        MovieSummary {
            title: title.map(String::from),
            overview: overview.map(String::from),
            release_date: date.map(String::from),
        }
    }

    #[test]
    fn test_single_movie_block() {
        // Arrange
        let movies = vec![summary(
            Some("Jaws"),
            Some("A giant shark terrorizes a beach town."),
            Some("1975-06-20"),
        )];

        // Act
        let report = format_summaries(&movies).unwrap();

        // Assert
        assert_eq!(
            report,
            "Title: Jaws\nYear: 1975\nOverview: A giant shark terrorizes a beach town."
        );
    }

    #[test]
    fn test_blocks_joined_with_separator() {
        // Arrange
        let movies = vec![
            summary(Some("Jaws"), Some("Shark."), Some("1975-06-20")),
            summary(Some("Jaws 2"), Some("Another shark."), Some("1978-06-16")),
        ];

        // Act
        let report = format_summaries(&movies).unwrap();

        // Assert
        assert_eq!(
            report,
            "Title: Jaws\nYear: 1975\nOverview: Shark.\
             \n-------------------------\n\
             Title: Jaws 2\nYear: 1978\nOverview: Another shark."
        );
        assert_eq!(report.matches(BLOCK_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        // Arrange
        let movies = vec![summary(None, None, None)];

        // Act
        let report = format_summaries(&movies).unwrap();

        // Assert
        assert_eq!(report, "Title: No Data\nYear: \nOverview: No Data");
    }

    #[test]
    fn test_empty_overview_renders_empty() {
        // Arrange
        let movies = vec![summary(Some("Untitled"), Some(""), Some(""))];

        // Act
        let report = format_summaries(&movies).unwrap();

        // Assert
        assert_eq!(report, "Title: Untitled\nYear: No Data\nOverview: ");
    }

    #[test]
    fn test_empty_slice_is_bad_return() {
        // Arrange & Act
        let result = format_summaries(&[]);

        // Assert
        assert!(matches!(result, Err(SearchError::BadReturn { .. })));
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year(Some("1999-03-21")), "1999");
        assert_eq!(extract_year(Some("1999")), "1999");
        assert_eq!(extract_year(Some("")), "No Data");
        assert_eq!(extract_year(Some("-03-21")), "No Data");
        assert_eq!(extract_year(None), "");
    }

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_text("A short overview.", WRAP_WIDTH), "A short overview.");
    }

    #[test]
    fn test_wrap_breaks_at_whitespace() {
        // Arrange
        let text = "Police chief Brody must protect the citizens of Amity after a second \
                    monstrous shark begins terrorizing the waters.";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert_eq!(
            wrapped,
            "Police chief Brody must protect the citizens of\n\
             Amity after a second monstrous shark begins\n\
             terrorizing the waters."
        );
        assert!(wrapped.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
    }

    #[test]
    fn test_wrap_exact_width_fits_one_line() {
        // Arrange
        let text = format!("{} {}", "a".repeat(24), "b".repeat(25));

        // Act
        let wrapped = wrap_text(&text, WRAP_WIDTH);

        // Assert
        assert_eq!(wrapped, text);
    }

    #[test]
    fn test_wrap_keeps_whitespace_inside_a_line() {
        assert_eq!(wrap_text("A  giant shark.", WRAP_WIDTH), "A  giant shark.");
        assert_eq!(wrap_text(" Leading space", WRAP_WIDTH), " Leading space");
        assert_eq!(
            wrap_text("  one\ttwo \n three  ", WRAP_WIDTH),
            "  one   two   three"
        );
    }

    #[test]
    fn test_wrap_turns_line_breaks_into_spaces() {
        assert_eq!(
            wrap_text("Line one.\r\n\r\nLine two.", WRAP_WIDTH),
            "Line one.    Line two."
        );
    }

    #[test]
    fn test_wrap_expands_tabs_to_stops() {
        assert_eq!(
            wrap_text("Cast:\tRoy Scheider", WRAP_WIDTH),
            "Cast:   Roy Scheider"
        );
    }

    #[test]
    fn test_wrap_whitespace_only_is_empty() {
        assert_eq!(wrap_text(" \t\n", WRAP_WIDTH), "");
    }

    #[test]
    fn test_wrap_drops_whitespace_at_line_break() {
        // Arrange
        let text = "When a killer shark unleashes chaos on a beach   community, \
                    it's up to a local sheriff to stop it.";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert_eq!(
            wrapped,
            "When a killer shark unleashes chaos on a beach\n\
             community, it's up to a local sheriff to stop it."
        );
    }

    #[test]
    fn test_wrap_breaks_after_hyphen() {
        // Arrange
        let text = "Brody and Hooper hunt the shark in a heart-stopping showdown at sea.";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert_eq!(
            wrapped,
            "Brody and Hooper hunt the shark in a heart-\nstopping showdown at sea."
        );
    }

    #[test]
    fn test_wrap_keeps_dashes_with_words() {
        // Arrange
        let text = "A man who is a self-proclaimed ex-con returns home \
                    --after ten years-- to find his town changed.";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert_eq!(
            wrapped,
            "A man who is a self-proclaimed ex-con returns home\n\
             --after ten years-- to find his town changed."
        );
    }

    #[test]
    fn test_wrap_splits_long_word_at_hyphen() {
        // Arrange
        let text = "supercalifragilisticexpialidocious-extraordinarilylongcompoundword ending";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert_eq!(
            wrapped,
            "supercalifragilisticexpialidocious-\nextraordinarilylongcompoundword ending"
        );
    }

    #[test]
    fn test_wrap_round_trip_reproduces_text() {
        // Arrange
        let text = "In a not so distant future, a crew of salvage pilots discovers a \
                    derelict freighter drifting beyond the edge of charted space, and \
                    what they find aboard changes everything they believed about home.";

        // Act
        let wrapped = wrap_text(text, WRAP_WIDTH);

        // Assert
        assert!(wrapped.lines().count() > 1);
        let rejoined = wrapped.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_splits_long_word() {
        // Arrange
        let long = "x".repeat(120);

        // Act
        let wrapped = wrap_text(&long, WRAP_WIDTH);

        // Assert
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["x".repeat(50), "x".repeat(50), "x".repeat(20)]);
    }

    #[test]
    fn test_wrap_long_word_fills_current_line() {
        // Arrange
        let text = format!("abc {} end", "y".repeat(60));

        // Act
        let wrapped = wrap_text(&text, WRAP_WIDTH);

        // Assert
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("abc {}", "y".repeat(46)),
                format!("{} end", "y".repeat(14)),
            ]
        );
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // Arrange
        let text = "é".repeat(30) + " " + &"ü".repeat(19);

        // Act
        let wrapped = wrap_text(&text, WRAP_WIDTH);

        // Assert
        assert_eq!(wrapped, text);
    }
}
