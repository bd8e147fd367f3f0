use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Single-span beam check: reactions, shear and moment diagrams, stresses and safety factor."
)]
pub struct Cli {
    /// JSON request file; prompts for a rectangular beam when omitted
    #[arg(value_name = "PATH")]
    pub request: Option<PathBuf>,

    /// Print only the JSON result
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_json_flag() {
        let cli = Cli::try_parse_from(["beam_cli", "--json", "req.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.request, Some(PathBuf::from("req.json")));
    }

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["beam_cli"]).unwrap();
        assert!(!cli.json);
        assert!(cli.request.is_none());
    }

    #[test]
    fn test_misspelled_flag_rejected() {
        let err = Cli::try_parse_from(["beam_cli", "--jsn", "req.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_second_path_rejected() {
        assert!(Cli::try_parse_from(["beam_cli", "a.json", "b.json"]).is_err());
    }
}
