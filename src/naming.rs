//! Identifier case transforms for generated binding code.
//!
//! Parameter names in the analyzed source are lower_snake Go identifiers; the
//! generated request struct needs an exported field name (`UserId`) and a form
//! bind key (`user_id`). The same pair of transforms must agree for every
//! parameter, so they live together here.

/// Uppercases the first ASCII character, leaving the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts an underscore-separated name to camelCase.
///
/// The first segment is kept as written; each following segment has its first
/// character uppercased. Consecutive or trailing underscores collapse.
pub fn camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, segment) in s.split('_').filter(|seg| !seg.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            out.push_str(&ucfirst(segment));
        }
    }
    out
}

/// Converts a camelCase or PascalCase name to lower_snake_case.
///
/// Acronym runs stay together: `UserID` becomes `user_id`, not `user_i_d`.
pub fn snake(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && {
                let p = chars[i - 1];
                p.is_lowercase() || p.is_ascii_digit()
            };
            let next_lower = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).map(|n| n.is_lowercase()).unwrap_or(false);
            if prev_lower || next_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("user"), "User");
        assert_eq!(ucfirst("userId"), "UserId");
        assert_eq!(ucfirst(""), "");
        assert_eq!(ucfirst("a"), "A");
    }

    #[test]
    fn test_camel() {
        assert_eq!(camel("user_id"), "userId");
        assert_eq!(camel("id"), "id");
        assert_eq!(camel("app_user_name"), "appUserName");
        assert_eq!(camel("already_camel_ok"), "alreadyCamelOk");
        assert_eq!(camel(""), "");
        assert_eq!(camel("__double"), "double");
    }

    #[test]
    fn test_snake() {
        assert_eq!(snake("UserID"), "user_id");
        assert_eq!(snake("userId"), "user_id");
        assert_eq!(snake("id"), "id");
        assert_eq!(snake("APIKey"), "api_key");
        assert_eq!(snake("HTTPServerURL"), "http_server_url");
        assert_eq!(snake("already_snake"), "already_snake");
        assert_eq!(snake(""), "");
    }

    // The two transforms are used on the same parameter name: field name from
    // ucfirst(camel(..)), bind key from snake(..).
    #[test]
    fn test_transform_pair_consistency() {
        let name = "user_id";
        assert_eq!(ucfirst(&camel(name)), "UserId");
        assert_eq!(snake(name), "user_id");

        let name = "page";
        assert_eq!(ucfirst(&camel(name)), "Page");
        assert_eq!(snake(name), "page");
    }
}
