//! Parsing of `@key value...` annotations embedded in doc comments.
//!
//! A directive line is a Go line comment whose text starts with `@` either
//! immediately after the comment opener (`//@get /users/list`) or after a
//! single space (`// @get /users/list`). Every other comment line is plain
//! documentation and produces no directive.

/// A single parsed annotation: the directive key and its ordered values.
///
/// Directives are transient: the declaration walker consumes each one as soon
/// as it is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub values: Vec<String>,
}

/// Parses one raw comment line into a directive, if it carries one.
///
/// The two accepted prefixes are `//@` and `// @`; anything else (blank lines,
/// plain comments, block comments, extra indentation) yields `None` rather than
/// an error. After the prefix, the first whitespace-separated token is the key
/// and the remaining tokens are the values. A prefix with nothing after it also
/// yields `None`.
pub fn parse_line(line: &str) -> Option<Directive> {
    let rest = if let Some(rest) = line.strip_prefix("//@") {
        rest
    } else if let Some(rest) = line.strip_prefix("// @") {
        rest
    } else {
        return None;
    };

    let mut tokens = rest.split_whitespace();
    let key = tokens.next()?.to_string();
    let values = tokens.map(str::to_string).collect();

    Some(Directive { key, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn directive(key: &str, values: &[&str]) -> Directive {
        Directive {
            key: key.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_compact_prefix() {
        assert_eq!(
            parse_line("//@get /user/list"),
            Some(directive("get", &["/user/list"]))
        );
    }

    #[test]
    fn test_spaced_prefix() {
        assert_eq!(
            parse_line("// @post /user/save"),
            Some(directive("post", &["/user/save"]))
        );
    }

    #[test]
    fn test_multiple_values() {
        assert_eq!(
            parse_line("//@mid VerifyUser VerifyIP"),
            Some(directive("mid", &["VerifyUser", "VerifyIP"]))
        );
        assert_eq!(
            parse_line("// @params id the user id"),
            Some(directive("params", &["id", "the", "user", "id"]))
        );
    }

    #[test]
    fn test_extra_whitespace_between_values() {
        assert_eq!(
            parse_line("//@mid   VerifyUser    VerifyIP"),
            Some(directive("mid", &["VerifyUser", "VerifyIP"]))
        );
    }

    #[test]
    fn test_key_only() {
        assert_eq!(parse_line("//@mid"), Some(directive("mid", &[])));
    }

    #[test]
    fn test_non_directive_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("// plain comment"), None);
        assert_eq!(parse_line("//plain comment"), None);
        assert_eq!(parse_line("/* @get /x */"), None);
        // two spaces before the @ is not an accepted form
        assert_eq!(parse_line("//  @get /x"), None);
        // nor is a directive that does not start the line
        assert_eq!(parse_line("  //@get /x"), None);
    }

    #[test]
    fn test_empty_directive_yields_nothing() {
        assert_eq!(parse_line("//@"), None);
        assert_eq!(parse_line("// @"), None);
        assert_eq!(parse_line("//@   "), None);
    }

    #[test]
    fn test_spaced_form_with_second_at_sign() {
        // only the first @ is the marker; the rest is ordinary value text
        assert_eq!(
            parse_line("// @request ip app.GetIP()"),
            Some(directive("request", &["ip", "app.GetIP()"]))
        );
    }
}
