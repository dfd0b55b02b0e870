// ============================================================
// Layer 4 - Text Preprocessor
// ============================================================
// Normalises document text before it is ranked or searched,
// and splits it into sentences for the extractors.
//
// Cleaning steps (applied in order):
//   1. Tabs, non-breaking / zero-width spaces, BOM → space
//   2. \r → \n, other control characters → space
//   3. Collapse runs of spaces and trim each line
//   4. Keep at most one blank line between paragraphs
//
// Why normalise before ranking?
//   - .docx runs and .txt files disagree on whitespace; key-term
//     matching should see the same text for both
//   - Sentence splitting relies on single spaces after '.', '?', '!'
//   - Stray control characters would otherwise end up inside answers
//
// Reference: Rust Book §8 (Strings in Rust)

/// Clean raw document text. Returns an owned, trimmed String.
pub fn normalize_text(text: &str) -> String {
    let unified: String = text
        .chars()
        .map(|c| match c {
            '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            '\r' => '\n',
            c if c.is_control() && c != '\n' => ' ',
            c => c,
        })
        .collect();

    let mut out   = String::with_capacity(unified.len());
    let mut blank = 0usize;

    for line in unified.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            blank += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank > 0 { "\n\n" } else { "\n" });
        }
        out.push_str(&line);
        blank = 0;
    }

    out
}

/// Split text into sentences.
///
/// A sentence ends at '.', '!' or '?' followed by whitespace (or the
/// end of the text), or at a line break. Decimal numbers like "3.5"
/// and initials inside words are left intact.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start     = 0usize;
    let mut chars     = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = match c {
            '\n' => true,
            '.' | '!' | '?' => chars.peek().map_or(true, |(_, next)| next.is_whitespace()),
            _ => false,
        };
        if boundary {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
