//! Character-by-character typing frames for the tagline.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Yields each growing prefix of `text`, one Unicode scalar at a time.
#[derive(Debug, Clone)]
pub struct TypingFrames<'a> {
    text: &'a str,
    ends: std::str::CharIndices<'a>,
}

impl<'a> TypingFrames<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, ends: text.char_indices() }
    }
}

impl<'a> Iterator for TypingFrames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = self.ends.next()?;
        Some(&self.text[..start + ch.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ends.size_hint()
    }
}
