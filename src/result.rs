use indexmap::IndexMap;

/// Prefix used for required arguments when flattening a result with
/// [`ParserResult::to_map`]. Reserved: the parser refuses it as an optional
/// argument prefix.
pub const REQUIRED_PREFIX: &str = "required-";

/// The outcome of parsing one token array.
///
/// Holds the required (positional) values in the order they were
/// encountered, and the optional key/value mapping. Created by
/// [`CommandParser::parse`](crate::CommandParser::parse) and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserResult {
    required: Vec<String>,
    optional: IndexMap<String, String>,
}

impl ParserResult {
    pub(crate) fn add_required(&mut self, value: &str) {
        self.required.push(value.to_owned());
    }

    pub(crate) fn add_optional(&mut self, key: &str, value: &str) {
        self.optional.insert(key.to_owned(), value.to_owned());
    }

    /// Get the required values, exactly as encountered.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Get the optional key/value mapping. Later occurrences of a key
    /// overwrite earlier ones.
    pub fn optional(&self) -> &IndexMap<String, String> {
        &self.optional
    }

    /// Linearize the result into a single mapping.
    ///
    /// Required values become entries keyed `prefix + index` (0-based, in
    /// encounter order); optional values keep their own keys and are inserted
    /// after the positional entries, so they win on a key collision.
    ///
    /// # Example
    ///
    /// ```
    /// use cmdspec::{CommandDetails, CommandParser, REQUIRED_PREFIX};
    ///
    /// let parser = CommandParser::new(CommandDetails::builder("tool").build());
    /// let result = parser.parse(&["in.txt", "--format=text"]);
    /// let map = result.to_map(REQUIRED_PREFIX);
    /// assert_eq!(Some("in.txt"), map.get("required-0").map(String::as_str));
    /// assert_eq!(Some("text"), map.get("format").map(String::as_str));
    /// ```
    pub fn to_map(&self, prefix: &str) -> IndexMap<String, String> {
        let mut ret = IndexMap::new();
        for (i, value) in self.required.iter().enumerate() {
            ret.insert(format!("{}{}", prefix, i), value.clone());
        }
        for (key, value) in self.optional.iter() {
            ret.insert(key.clone(), value.clone());
        }
        ret
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> ParserResult {
        let mut result = ParserResult::default();
        result.add_required("R1");
        result.add_required("R2");
        result.add_optional("option", "value");
        result
    }

    #[test]
    fn test_required_preserves_order() {
        assert_eq!(["R1", "R2"], sample().required());
    }

    #[test]
    fn test_optional_last_write_wins() {
        let mut result = ParserResult::default();
        result.add_optional("option", "first");
        result.add_optional("option", "second");
        assert_eq!(1, result.optional().len());
        assert_eq!(Some("second"), result.optional().get("option").map(String::as_str));
    }

    #[test]
    fn test_to_map_combines_both_groups() {
        let map = sample().to_map(REQUIRED_PREFIX);
        assert_eq!(3, map.len());
        assert_eq!(Some("R1"), map.get("required-0").map(String::as_str));
        assert_eq!(Some("R2"), map.get("required-1").map(String::as_str));
        assert_eq!(Some("value"), map.get("option").map(String::as_str));
    }

    #[test]
    fn test_to_map_optional_wins_on_collision() {
        let mut result = ParserResult::default();
        result.add_required("positional");
        result.add_optional("arg-0", "named");
        let map = result.to_map("arg-");
        assert_eq!(1, map.len());
        assert_eq!(Some("named"), map.get("arg-0").map(String::as_str));
    }
}
