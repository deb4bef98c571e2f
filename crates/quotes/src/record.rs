//! Immutable quote record — one row of the quote table.

/// A single quotation and its attribution, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Substring of `body` to render in the emphasis (bold) style.
    /// Empty when nothing in the quote mentions the time directly.
    pub emphasis: String,
    /// The quotation text. May contain tag-like break markers that the
    /// layout engine turns into explicit line breaks.
    pub body: String,
    /// Title of the work the quote is taken from.
    pub title: String,
    /// Author of the work.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::QuoteRecord;

    #[test]
    fn test_record_is_cloneable_value() {
        let r = QuoteRecord {
            emphasis: "nine o'clock".to_string(),
            body: "It was nine o'clock.".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
        };
        assert_eq!(r.clone(), r);
    }
}
