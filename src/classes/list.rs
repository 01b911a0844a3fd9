//! Resolved class list

use std::collections::HashSet;
use std::fmt;

/// An ordered set of class names produced by the joiner.
///
/// Tokens are unique and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token unless it is empty or already present.
    ///
    /// Returns whether the token was added.
    pub fn push(&mut self, token: &str) -> bool {
        if token.is_empty() || self.seen.contains(token) {
            return false;
        }
        self.seen.insert(token.to_string());
        self.tokens.push(token.to_string());
        true
    }

    /// Returns whether the list holds no classes.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether `class` is in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.seen.contains(class)
    }

    /// Iterates over the classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns the position of `class`, if present.
    pub fn position(&self, class: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == class)
    }

    /// Returns the space-joined class string.
    pub fn as_string(&self) -> String {
        self.tokens.join(" ")
    }

    /// Returns `None` for an empty list, the joined string otherwise.
    pub fn into_option(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_string())
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_duplicates_and_empty() {
        let mut list = ClassList::new();
        assert!(list.push("px-4"));
        assert!(!list.push("px-4"));
        assert!(!list.push(""));
        assert!(list.push("py-2"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_string(), "px-4 py-2");
    }

    #[test]
    fn test_display_matches_as_string() {
        let mut list = ClassList::new();
        list.push("a");
        list.push("b");
        list.push("c");

        assert_eq!(format!("{}", list), list.as_string());
        assert_eq!(list.position("c"), Some(2));
    }

    #[test]
    fn test_empty_into_option() {
        assert_eq!(ClassList::new().into_option(), None);

        let mut list = ClassList::new();
        list.push("x");
        assert_eq!(list.into_option(), Some("x".to_string()));
    }
}
