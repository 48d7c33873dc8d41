//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: journal-chart <source_path> <dest_path>";

#[derive(Parser, Debug)]
#[command(name = "journal-chart")]
#[command(about = "Chart weekly hours per category from a time-journal CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal CSV with start, end and category columns
    #[arg(value_name = "SOURCE_PATH")]
    pub source_path: PathBuf,

    /// Output image; the extension picks the format (svg, png, bmp, jpg)
    #[arg(value_name = "DEST_PATH")]
    pub dest_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_two_positional_args() {
        let cli = Cli::try_parse_from(["journal-chart", "in.csv", "out.png"]).unwrap();
        assert_eq!(cli.source_path, PathBuf::from("in.csv"));
        assert_eq!(cli.dest_path, PathBuf::from("out.png"));
    }

    #[test]
    fn test_missing_arg() {
        let err = Cli::try_parse_from(["journal-chart", "in.csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_arg() {
        let err = Cli::try_parse_from(["journal-chart", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
