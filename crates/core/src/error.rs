use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid function path `{}`: expected `container:member[:modes]`.", _0)]
    InvalidPathFormat(String),

    #[error("Missing container in function path.")]
    MissingContainer,

    #[error("Missing member in function path.")]
    MissingMember,

    #[error("Cannot find or load container `{}`.", _0)]
    ContainerNotFound(String),

    #[error("Cannot find member `{}` on container `{}`.{}", .member, .container, format_suggestions(.suggestions))]
    MemberNotFound {
        container: String,
        member: String,
        suggestions: Vec<String>,
    },

    #[error("Unknown mode `{}`.", _0)]
    UnknownMode(String),

    #[error("Mode `{}` requires a value.", _0)]
    MissingModeValue(String),

    #[error("Invalid value `{}` for mode `{}`.", .value, .option)]
    ModeValueConversion { option: String, value: String },

    #[error("Found a non-unique parameter name: `{}`", _0)]
    DuplicateParameter(String),

    #[error("A signature may declare at most one var-positional parameter.")]
    MultipleVarPositional,

    #[error("A signature may declare at most one var-keyword parameter.")]
    MultipleVarKeyword,

    #[error("Parameter `{}` is out of order for its kind.", _0)]
    ParameterOrder(String),

    #[error("Invalid argument token `{}`.", _0)]
    ArgumentFormat(String),

    #[error("Unknown argument `{}`.", _0)]
    UnknownArgument(String),

    #[error("Argument `{}` was provided more than once.", _0)]
    DuplicateArgument(String),

    #[error("Missing required argument `{}`.", _0)]
    MissingArgument(String),

    #[error("Debugger quit.")]
    DebuggerQuit,

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("STDIO error: {}", _0)]
    Stdio(std::io::Error),

    #[error("Misc error: {}", _0)]
    Misc(String),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean: {}?", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_not_found_lists_suggestions() {
        let error = Error::MemberNotFound {
            container: "text".to_string(),
            member: "repeta".to_string(),
            suggestions: vec!["text:repeat".to_string(), "text:concat".to_string()],
        };

        let message = error.to_string();
        assert!(message.contains("`repeta`"));
        assert!(message.contains("Did you mean: text:repeat, text:concat?"));
    }

    #[test]
    fn test_member_not_found_without_suggestions() {
        let error = Error::MemberNotFound {
            container: "text".to_string(),
            member: "repeta".to_string(),
            suggestions: vec![],
        };

        assert!(!error.to_string().contains("Did you mean"));
    }
}
