//! Doc-form invocations.
//!
//! A dispatch can arrive as a multi-line document instead of discrete
//! process arguments, typically through a shell heredoc. The first
//! meaningful token is the function path, every following token is a
//! forwarded argument; `#` starts a comment that runs to the end of its
//! line.

use funcrun_core::error::{Error, Result};

/// Splits a doc-form invocation into tokens. Each line is shell-word
/// split, so quoted values survive with their spaces.
pub fn tokenize(document: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for line in document.lines() {
        let words = shell_words::split(line)
            .map_err(|e| Error::Misc(format!("invalid doc-form line `{line}`: {e}")))?;

        for word in words {
            if word.starts_with('#') {
                break;
            }
            tokens.push(word);
        }
    }

    Ok(tokens)
}

/// Turns a doc-form document into a synthetic invocation: the function
/// path plus forwarded arguments.
pub fn split_document(document: &str) -> Result<(String, Vec<String>)> {
    let mut tokens = tokenize(document)?.into_iter();
    let path = tokens
        .next()
        .ok_or_else(|| Error::Misc("doc-form input contains no entrypoint".to_string()))?;
    Ok((path, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
# Entrypoint
text:repeat:pt

# Arguments
--text="hello world"
--count=3
"#;

    #[test]
    fn test_tokenize_strips_comments_and_blank_lines() {
        let tokens = tokenize(DOCUMENT).unwrap();
        assert_eq!(tokens, vec!["text:repeat:pt", "--text=hello world", "--count=3"]);
    }

    #[test]
    fn test_tokenize_trailing_comment() {
        let tokens = tokenize("env:cwd # the path\n--verbose").unwrap();
        assert_eq!(tokens, vec!["env:cwd", "--verbose"]);
    }

    #[test]
    fn test_tokenize_rejects_unbalanced_quotes() {
        assert!(tokenize("env:cwd\n--text=\"open").is_err());
    }

    #[test]
    fn test_split_document() {
        let (path, forwarded) = split_document(DOCUMENT).unwrap();
        assert_eq!(path, "text:repeat:pt");
        assert_eq!(forwarded, vec!["--text=hello world", "--count=3"]);
    }

    #[test]
    fn test_split_document_without_entrypoint() {
        let result = split_document("# nothing but comments\n");
        assert!(result.is_err());
    }
}
