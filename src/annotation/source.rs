use std::fmt;

/// Ordered, deduplicated list of the stages and sources that touched a record.
///
/// Serialized comma-joined: `wiktionary,circumflex,cognate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceTag {
    labels: Vec<String>,
}

impl SourceTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(s: &str) -> Self {
        let mut tag = Self::new();
        for label in s.split(',') {
            tag.add(label);
        }
        tag
    }

    /// Append `label` unless already present. Blank labels are ignored.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_order_and_deduplicate() {
        let mut tag = SourceTag::parse("wiktionary,,circumflex");
        assert!(tag.add("cognate"));
        assert!(!tag.add("circumflex"));
        assert_eq!(tag.to_string(), "wiktionary,circumflex,cognate");
        assert_eq!(SourceTag::parse("").to_string(), "");
    }
}
