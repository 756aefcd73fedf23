//! Stateful line location within a text stream.

/// Advance `lines` until a line containing `needle` is found.
///
/// Returns that line and leaves the iterator positioned after it, so callers
/// can keep reading from where the match left off. Returns `None` when the
/// iterator is exhausted without a match.
pub fn seek_needle<I, S>(lines: &mut I, needle: &str) -> Option<S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    lines.find(|line| line.as_ref().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_matching_line() {
        let text = "alpha\nbeta needle here\ngamma\n";
        let mut lines = text.lines();
        let found = seek_needle(&mut lines, "needle");
        assert_eq!(found, Some("beta needle here"));
    }

    #[test]
    fn iterator_continues_after_match() {
        let text = "a\nb\nc\nd\n";
        let mut lines = text.lines();
        seek_needle(&mut lines, "b");
        assert_eq!(lines.next(), Some("c"));
        assert_eq!(lines.next(), Some("d"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn returns_none_when_exhausted() {
        let text = "a\nb\n";
        let mut lines = text.lines();
        assert_eq!(seek_needle(&mut lines, "zzz"), None);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn works_with_newline_preserving_iterators() {
        let text = "first\nanchor line\nbody\n";
        let mut lines = text.split_inclusive('\n');
        let found = seek_needle(&mut lines, "anchor");
        assert_eq!(found, Some("anchor line\n"));
        assert_eq!(lines.next(), Some("body\n"));
    }
}
