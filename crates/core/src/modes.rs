//! The mode mini-language.
//!
//! The third segment of a function path is a compact comma-separated list
//! of mode tokens, each either a bare flag (`pt`) or a typed option
//! (`tf=multiline`). Names resolve against the canonical-name table
//! first, then the abbreviation table. Parsing is total: every option is
//! present in the result, falling back to its type's zero value.

use crate::error::{Error, Result};
use crate::template::TemplateStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeValueKind {
    Bool,
    Text,
}

/// One entry of the static options catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ModeOption {
    pub canonical: &'static str,
    pub abbreviation: &'static str,
    pub kind: ModeValueKind,
    pub description: &'static str,
}

/// The active options catalogue. Process-wide, read-only.
pub const MODE_CATALOGUE: &[ModeOption] = &[
    ModeOption {
        canonical: "print-template",
        abbreviation: "pt",
        kind: ModeValueKind::Bool,
        description: "print the invocation template before executing",
    },
    ModeOption {
        canonical: "print-only-template",
        abbreviation: "pot",
        kind: ModeValueKind::Bool,
        description: "print the invocation template and skip execution",
    },
    ModeOption {
        canonical: "template-format",
        abbreviation: "tf",
        kind: ModeValueKind::Text,
        description: "template layout: `multiline` or `multiline-doc`",
    },
    ModeOption {
        canonical: "hook-debugger",
        abbreviation: "hd",
        kind: ModeValueKind::Bool,
        description: "report failures through the interactive failure hook",
    },
    ModeOption {
        canonical: "hook-profiler",
        abbreviation: "hp",
        kind: ModeValueKind::Bool,
        description: "time the call and report on completion",
    },
];

fn find_option(name: &str) -> Option<&'static ModeOption> {
    MODE_CATALOGUE
        .iter()
        .find(|option| option.canonical == name)
        .or_else(|| MODE_CATALOGUE.iter().find(|option| option.abbreviation == name))
}

/// Truthiness for boolean mode values: empty text and the usual negative
/// spellings are false, anything else is true.
pub fn truthy(text: &str) -> bool {
    !matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "" | "false" | "0" | "no" | "off"
    )
}

/// Fully populated mode values for one invocation. Options not mentioned
/// in the parsed text carry their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedModes {
    pub print_template: bool,
    pub print_only_template: bool,
    pub template_format: String,
    pub hook_debugger: bool,
    pub hook_profiler: bool,
}

impl ResolvedModes {
    /// Parses a modes string. The empty string yields the all-zero-value
    /// record.
    pub fn parse(modes_text: &str) -> Result<Self> {
        let mut modes = Self::default();

        for token in modes_text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let (name, value) = match token.split_once('=') {
                Some((name, value)) => (name.trim(), Some(value.trim())),
                None => (token, None),
            };

            let option = find_option(name).ok_or_else(|| Error::UnknownMode(name.to_string()))?;

            match option.kind {
                ModeValueKind::Bool => {
                    let enabled = value.map_or(true, truthy);
                    modes.set_bool(option.canonical, enabled);
                }
                ModeValueKind::Text => {
                    let value = value
                        .ok_or_else(|| Error::MissingModeValue(option.canonical.to_string()))?;
                    modes.set_text(option.canonical, value)?;
                }
            }
        }

        Ok(modes)
    }

    // Every catalogue entry must land in a field here; a name falling
    // through would be parsed and then silently dropped.

    fn set_bool(&mut self, canonical: &str, enabled: bool) {
        match canonical {
            "print-template" => self.print_template = enabled,
            "print-only-template" => self.print_only_template = enabled,
            "hook-debugger" => self.hook_debugger = enabled,
            "hook-profiler" => self.hook_profiler = enabled,
            other => unreachable!("boolean mode `{other}` has no field in ResolvedModes"),
        }
    }

    fn set_text(&mut self, canonical: &str, value: &str) -> Result<()> {
        match canonical {
            "template-format" => {
                // Reject unconvertible values at parse time.
                TemplateStyle::parse(value)?;
                self.template_format = value.to_string();
            }
            other => unreachable!("text mode `{other}` has no field in ResolvedModes"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_all_zero_values() {
        let modes = ResolvedModes::parse("").unwrap();
        assert_eq!(modes, ResolvedModes::default());
        assert!(!modes.print_template);
        assert!(modes.template_format.is_empty());
    }

    #[test]
    fn test_parse_abbreviations_and_typed_value() {
        let modes = ResolvedModes::parse("pot,tf=multiline").unwrap();

        assert!(modes.print_only_template);
        assert_eq!(modes.template_format, "multiline");
        assert!(!modes.print_template);
        assert!(!modes.hook_debugger);
        assert!(!modes.hook_profiler);
    }

    #[test]
    fn test_parse_canonical_names() {
        let modes =
            ResolvedModes::parse("print-template,hook-debugger,template-format=multiline-doc")
                .unwrap();

        assert!(modes.print_template);
        assert!(modes.hook_debugger);
        assert_eq!(modes.template_format, "multiline-doc");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let modes = ResolvedModes::parse(" pt , hp ").unwrap();
        assert!(modes.print_template);
        assert!(modes.hook_profiler);
    }

    #[test]
    fn test_parse_boolean_value_forms() {
        assert!(ResolvedModes::parse("pt=yes").unwrap().print_template);
        assert!(ResolvedModes::parse("pt=1").unwrap().print_template);
        assert!(!ResolvedModes::parse("pt=false").unwrap().print_template);
        assert!(!ResolvedModes::parse("pt=0").unwrap().print_template);
        assert!(!ResolvedModes::parse("pt=").unwrap().print_template);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let result = ResolvedModes::parse("pt,zz");
        assert!(matches!(result, Err(Error::UnknownMode(name)) if name == "zz"));
    }

    #[test]
    fn test_parse_missing_text_value() {
        let result = ResolvedModes::parse("tf");
        assert!(
            matches!(result, Err(Error::MissingModeValue(name)) if name == "template-format")
        );
    }

    #[test]
    fn test_parse_unconvertible_text_value() {
        let result = ResolvedModes::parse("tf=sideways");
        assert!(matches!(result, Err(Error::ModeValueConversion { .. })));
    }

    #[test]
    fn test_every_catalogue_option_lands_in_the_record() {
        for option in MODE_CATALOGUE {
            let token = match option.kind {
                ModeValueKind::Bool => option.canonical.to_string(),
                ModeValueKind::Text => format!("{}=multiline", option.canonical),
            };

            let modes = ResolvedModes::parse(&token).unwrap();
            assert_ne!(
                modes,
                ResolvedModes::default(),
                "mode `{}` parsed but changed nothing",
                option.canonical
            );
        }
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        for (index, option) in MODE_CATALOGUE.iter().enumerate() {
            for other in &MODE_CATALOGUE[index + 1..] {
                assert_ne!(option.canonical, other.canonical);
                assert_ne!(option.abbreviation, other.abbreviation);
            }
        }
    }
}
