use url::Url;

/// Parse a string into a location.
///
/// Returns `None` unless the string carries a scheme and is well formed;
/// absence is the normal outcome for user input, not an error.
///
/// # Examples
///
/// ```
/// use callable::parse;
///
/// let url = parse("HTTPS://Example.com/a/../b").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/b");
///
/// assert!(parse("").is_none());
/// assert!(parse("   ").is_none());
/// assert!(parse("no scheme here").is_none());
/// ```
pub fn parse(input: &str) -> Option<Url> { Url::parse(input).ok() }

/// String-to-location conversion as a method.
pub trait ToUrl {
    fn url(&self) -> Option<Url>;
}

impl ToUrl for str {
    fn url(&self) -> Option<Url> { parse(self) }
}

impl ToUrl for String {
    fn url(&self) -> Option<Url> { parse(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        for (input, normalized) in [
            ("https://example.com", "https://example.com/"),
            ("http://example.com:80/x", "http://example.com/x"),
            ("https://example.com/a%20b?q=1#frag", "https://example.com/a%20b?q=1#frag"),
            ("file:///tmp/data.json", "file:///tmp/data.json"),
            ("ftp://mirror.example/pub/", "ftp://mirror.example/pub/"),
        ] {
            let url = parse(input).unwrap();
            assert_eq!(url.as_str(), normalized, "input: {input}");
            assert_eq!(parse(url.as_str()).unwrap(), url);
        }
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["", " ", "\t\n", "example.com", "/relative/path", "http://", "https://exa mple.com"] {
            assert!(parse(input).is_none(), "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_same_string_is_equal_and_independent() {
        let a = "https://example.com/tools.json".url().unwrap();
        let mut b = String::from("https://example.com/tools.json").url().unwrap();
        assert_eq!(a, b);

        b.set_path("/other.json");
        assert_ne!(a, b);
        assert_eq!(a.path(), "/tools.json");
    }
}
