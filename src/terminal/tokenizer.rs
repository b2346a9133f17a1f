//! Command-line tokenizer.
//!
//! A token is a run of non-whitespace, non-quote characters and complete
//! double-quoted segments (`"..."`, whitespace allowed inside). Adjacent runs
//! and segments join into one token. A `"` with no closing partner is dropped
//! and ends the token it interrupts.

/// Split a line into raw tokens (quotes still attached).
pub fn split_tokens(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        loop {
            match chars.get(i) {
                Some(c) if !c.is_whitespace() && *c != '"' => i += 1,
                Some('"') => match chars[i + 1..].iter().position(|c| *c == '"') {
                    Some(offset) => i += offset + 2,
                    None => break,
                },
                _ => break,
            }
        }

        if i > start {
            tokens.push(chars[start..i].iter().collect());
        } else {
            // whitespace or an unmatched quote
            i += 1;
        }
    }

    tokens
}

/// Strip one leading and one trailing `"` from an argument.
pub fn unquote(arg: &str) -> String {
    let arg = arg.strip_prefix('"').unwrap_or(arg);
    arg.strip_suffix('"').unwrap_or(arg).to_string()
}

/// Split a line into the command name and its unquoted arguments.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = split_tokens(line).into_iter();
    let command = tokens.next()?;
    let args = tokens.map(|t| unquote(&t)).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(split_tokens("  ls   -a  projects "), vec!["ls", "-a", "projects"]);
        assert!(split_tokens("   ").is_empty());
    }

    #[test]
    fn test_quoted_segment_keeps_spaces() {
        assert_eq!(tokenize(r#"cat "my file.txt""#), Some(("cat".to_string(), vec!["my file.txt".to_string()])));
    }

    #[test]
    fn test_adjacent_segments_join() {
        assert_eq!(split_tokens(r#"a"b c"d e"#), vec![r#"a"b c"d"#, "e"]);
        // only the outer quotes are stripped
        assert_eq!(unquote(r#"x"a b""#), r#"x"a b"#);
        assert_eq!(unquote(r#""a b"c"#), r#"a b"c"#);
    }

    #[test]
    fn test_unmatched_quote_is_dropped() {
        assert_eq!(split_tokens(r#"cat "foo bar"#), vec!["cat", "foo", "bar"]);
        assert_eq!(split_tokens(r#"ab"cd"#), vec!["ab", "cd"]);
        assert_eq!(tokenize("\""), None);
    }

    #[test]
    fn test_empty_quotes() {
        assert_eq!(tokenize(r#"ls """#), Some(("ls".to_string(), vec![String::new()])));
    }

    #[test]
    fn test_command_name_is_not_unquoted() {
        let (command, args) = tokenize(r#""ls" x"#).unwrap();
        assert_eq!(command, r#""ls""#);
        assert_eq!(args, vec!["x"]);
    }
}
