use std::path::PathBuf;

use crate::core::codegen::NameStyle;
use crate::core::error::GenError;
use crate::core::paths;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name_style: NameStyle,
}

impl GenConfig {
    /// Apply command-line overrides on top of the fixed defaults.
    pub fn new(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        verbatim_names: bool,
    ) -> Result<Self, GenError> {
        let input = paths::input_path(input);
        let output = paths::output_path(output);
        if input == output {
            return Err(GenError::Config(format!(
                "input and output are the same file: {}",
                input.display()
            )));
        }
        let name_style = if verbatim_names {
            NameStyle::Verbatim
        } else {
            NameStyle::Escaped
        };
        Ok(GenConfig {
            input,
            output,
            name_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GenConfig::new(None, None, false).unwrap();
        assert_eq!(config.input, PathBuf::from("champion.json"));
        assert_eq!(config.output, PathBuf::from("list.rs"));
        assert_eq!(config.name_style, NameStyle::Escaped);
    }

    #[test]
    fn verbatim_flag() {
        let config = GenConfig::new(None, None, true).unwrap();
        assert_eq!(config.name_style, NameStyle::Verbatim);
    }

    #[test]
    fn rejects_output_over_input() {
        let err = GenConfig::new(None, Some(PathBuf::from("champion.json")), false).unwrap_err();
        assert!(err.to_string().contains("same file"), "got: {}", err);
    }
}
