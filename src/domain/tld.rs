//! Accepted top-level domains.

/// The set of TLDs the registrar sells, shared by every flow.
///
/// Entries are stored with their leading dot (`.com`). Matching is
/// case-sensitive, like the backend's own lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldSet {
    tlds: Vec<String>,
}

impl TldSet {
    pub const DEFAULT: [&'static str; 4] = [".com", ".net", ".org", ".it"];

    /// Builds a set, adding the leading dot where it is missing and skipping
    /// blank entries.
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for tld in tlds {
            let tld = tld.as_ref().trim();
            if tld.is_empty() || tld == "." {
                continue;
            }
            let tld = if tld.starts_with('.') {
                tld.to_string()
            } else {
                format!(".{tld}")
            };
            if !set.contains(&tld) {
                set.push(tld);
            }
        }
        Self { tlds: set }
    }

    /// Parses a comma separated list such as `.com,.net,org`.
    pub fn from_csv(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns true when the label after the last dot is one of the accepted TLDs.
    ///
    /// A string without any dot is not a domain and is rejected.
    pub fn is_valid(&self, domain: &str) -> bool {
        match domain.rfind('.') {
            Some(pos) => self.tlds.iter().any(|tld| tld == &domain[pos..]),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tlds.iter().map(String::as_str)
    }
}

impl Default for TldSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
