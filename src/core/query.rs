//! Search query terms and the package match predicate.

use crate::core::package::Package;

/// Case-folded query terms from the command line.
///
/// An empty set matches every package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    /// Build query terms, lower-casing each and dropping repeats.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if !folded.contains(&term) {
                folded.push(term);
            }
        }
        QueryTerms { terms: folded }
    }

    /// Check if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in command-line order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Check whether a package matches.
    ///
    /// The name is tested before the description, which is only lower-cased
    /// when the name did not match.
    pub fn matches(&self, pkg: &Package) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let name = pkg.name().to_lowercase();
        if self.iter().any(|term| name.contains(term)) {
            return true;
        }

        let desc = pkg.desc.to_lowercase();
        self.iter().any(|term| desc.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_case_folded() {
        let terms = QueryTerms::new(["JSON", "Buffer", "json"]);
        assert_eq!(terms.iter().collect::<Vec<_>>(), vec!["json", "buffer"]);
    }

    #[test]
    fn test_empty_terms_match_everything() {
        let terms = QueryTerms::new(Vec::<String>::new());
        assert!(terms.is_empty());
        assert!(terms.matches(&Package::new("a/b", "u", "")));
    }

    #[test]
    fn test_matches_name() {
        let terms = QueryTerms::new(["buf"]);
        assert!(terms.matches(&Package::new("clibs/Buffer", "u", "strings")));
    }

    #[test]
    fn test_matches_description() {
        let terms = QueryTerms::new(["parser"]);
        assert!(terms.matches(&Package::new("kgabis/parson", "u", "Lightweight JSON Parser")));
    }

    #[test]
    fn test_owner_is_not_matched() {
        let terms = QueryTerms::new(["clibs"]);
        assert!(!terms.matches(&Package::new("clibs/list", "u", "linked list")));
    }

    #[test]
    fn test_any_term_matches() {
        let terms = QueryTerms::new(["nothing", "list"]);
        assert!(terms.matches(&Package::new("clibs/list", "u", "")));
    }
}
