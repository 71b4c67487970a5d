/// Extends string types for reading fixed-format text
pub trait StringExt {
    /// Character at a zero-based column, if the line is long enough
    ///
    /// ```rust
    /// # use mcpost_utils::StringExt;
    /// assert_eq!("   12-       f4:n".char_at(5), Some('-'));
    /// assert_eq!("short".char_at(19), None);
    /// ```
    fn char_at(&self, column: usize) -> Option<char>;

    /// Everything after the first `n` characters
    ///
    /// Lines shorter than `n` characters give an empty string rather than
    /// panicking on an out of range slice.
    ///
    /// ```rust
    /// # use mcpost_utils::StringExt;
    /// assert_eq!("   12-       101 102".skip_chars(13), "101 102");
    /// assert_eq!("label".skip_chars(19), "");
    /// ```
    fn skip_chars(&self, n: usize) -> &str;

    /// The `n`th whitespace-separated token
    ///
    /// ```rust
    /// # use mcpost_utils::StringExt;
    /// let line = " run terminated when     100000  particle histories were done.";
    /// assert_eq!(line.token(3), Some("100000"));
    /// assert_eq!(line.token(20), None);
    /// ```
    fn token(&self, n: usize) -> Option<&str>;

    /// True only if every pattern appears somewhere in the string
    ///
    /// ```rust
    /// # use mcpost_utils::StringExt;
    /// let line = " run terminated because 11 particles got lost.";
    /// assert!(line.contains_all(&["run terminated", "particles got lost"]));
    /// assert!(!line.contains_all(&["run terminated", "fatal error"]));
    /// ```
    fn contains_all(&self, patterns: &[&str]) -> bool;
}

// Implemented on `str` so that returned slices borrow the text itself, which
// also covers `String` through deref
impl StringExt for str {
    fn char_at(&self, column: usize) -> Option<char> {
        self.chars().nth(column)
    }

    fn skip_chars(&self, n: usize) -> &str {
        match self.char_indices().nth(n) {
            Some((idx, _)) => &self[idx..],
            None => "",
        }
    }

    fn token(&self, n: usize) -> Option<&str> {
        self.split_whitespace().nth(n)
    }

    fn contains_all(&self, patterns: &[&str]) -> bool {
        patterns.iter().all(|p| self.contains(p))
    }
}
