//! Sentence and word tokenization for the notes text.

/// Split text into sentences on sentence-final punctuation.
/// The terminator stays with its sentence; a trailing fragment without
/// a terminator still counts as a sentence.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                out.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let sentence = current.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }

    out
}

/// Split text into words: by whitespace, with leading/trailing punctuation
/// stripped. Original casing is preserved so callers can blank out the word
/// as it appears in the sentence.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}
