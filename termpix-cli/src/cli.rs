// ABOUTME: CLI argument definitions for the termpix image viewer
// ABOUTME: Defines the command-line interface structure using clap derive macros

use crate::completions::Shell;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "termpix")]
#[command(about = "Render an image in the terminal with truecolor blocks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Image file to render
    #[arg(value_name = "IMAGE", required_unless_present = "completions")]
    pub image: Option<PathBuf>,

    /// Output height in terminal rows (replaces the terminal height)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Width budget in terminal columns (defaults to the terminal width)
    #[arg(short = 'C', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: Option<u16>,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "image")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "termpix");

        let height_arg = cli
            .get_arguments()
            .find(|arg| arg.get_id() == "height")
            .expect("height argument should exist");
        assert!(!height_arg.is_required_set());
        assert_eq!(height_arg.get_short(), Some('H'));
    }

    #[test]
    fn test_parse_image_path() {
        let cli = Cli::try_parse_from(["termpix", "photo.png"]).unwrap();
        assert_eq!(cli.image, Some(PathBuf::from("photo.png")));
        assert_eq!(cli.height, None);
        assert_eq!(cli.columns, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from(["termpix", "photo.png", "-H", "12", "--columns", "40"])
            .unwrap();
        assert_eq!(cli.height, Some(12));
        assert_eq!(cli.columns, Some(40));

        let cli = Cli::try_parse_from(["termpix", "--height", "3", "photo.png"]).unwrap();
        assert_eq!(cli.height, Some(3));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        assert!(Cli::try_parse_from(["termpix", "photo.png", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["termpix", "photo.png", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["termpix", "photo.png", "--height", "-2"]).is_err());
    }

    #[test]
    fn test_image_is_required() {
        assert!(Cli::try_parse_from(["termpix"]).is_err());
    }

    #[test]
    fn test_completions_without_image() {
        let cli = Cli::try_parse_from(["termpix", "--completions", "zsh"]).unwrap();
        assert_eq!(cli.completions, Some(Shell::Zsh));
        assert_eq!(cli.image, None);

        assert!(Cli::try_parse_from(["termpix", "photo.png", "--completions", "zsh"]).is_err());
    }
}
