use clap::{Parser, ValueEnum};
use page_outline::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-outline")]
#[command(about = "Prints the heading outline and image count of each page in the print documents")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (defaults to the built-in document list)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

/// Convert from CLI argument format to the library output format
pub fn convert_format(arg: FormatArg) -> OutputFormat {
    match arg {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Json => OutputFormat::Json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["page-outline"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(convert_format(args.format), OutputFormat::Text);
    }

    #[test]
    fn test_json_with_config() {
        let args =
            Args::try_parse_from(["page-outline", "--format", "json", "-c", "outline.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("outline.json")));
        assert_eq!(convert_format(args.format), OutputFormat::Json);
    }

    #[test]
    fn test_rejects_positional_paths() {
        assert!(Args::try_parse_from(["page-outline", "some.html"]).is_err());
    }
}
