//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use crate::commands::{self, LoadOptions, PolicyArg};
use crate::config::WavescopeConfig;
use crate::logging;
use crate::ruler::ScaleSetting;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process;

/// A terminal waveform viewer with a time ruler
#[derive(Parser, Debug)]
#[command(name = "wavescope")]
#[command(version)]
#[command(long_about = "A terminal waveform viewer with a time ruler.\n\nDEFAULT COMMAND:\n    If a file is given without a command, 'view' is used.\n\nEXAMPLES:\n    # Show a recording\n    $ wavescope take1.wav\n\n    # Print format and duration\n    $ wavescope info take1.wav\n\n    # Print 200 column peaks\n    $ wavescope peaks take1.wav --width 200\n\n    # Print the ruler a 1250 pixel wide display would get\n    $ wavescope ruler take1.wav --width 1250\n\n    # Force the 1 second ruler scale\n    $ wavescope --scale m take1.wav")]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/wavescope/wavescope.toml\n    Logs:               ~/.local/state/wavescope/wavescope.log.*"
)]
struct Cli {
    /// Wave file to view (view default command)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of samples kept after loading
    #[arg(long, value_name = "N", global = true)]
    max_length: Option<usize>,

    /// Ruler scale: auto, xs, s, m, l, xl or xxl
    #[arg(long, value_name = "SCALE", global = true)]
    scale: Option<ScaleSetting>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a wave file with its time ruler (default)
    ///
    /// Press q, Esc or Ctrl-C to quit. The waveform is redrawn once the
    /// terminal size has settled after a resize.
    #[command(visible_alias = "v")]
    View {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the format and duration of a wave file
    #[command(visible_alias = "i")]
    Info {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the samples derived for a display width, one per line
    Peaks {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of display columns
        #[arg(short, long, default_value_t = 80)]
        width: usize,

        /// Decimation policy
        #[arg(short, long, value_enum, default_value_t = PolicyArg::Magnitude)]
        policy: PolicyArg,
    },

    /// Print the ruler scale and tick positions for a display width
    Ruler {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Display width in pixels
        #[arg(short, long, default_value_t = 1000)]
        width: u32,
    },

    /// Open configuration file in your preferred editor
    ///
    /// Writes the default configuration first if none exists.
    /// Uses $VISUAL or $EDITOR, falling back to nano/vi.
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries from the application
    ///
    /// Display the last 50 lines of the most recent log file.
    Logs,

    /// Generate shell completion script
    ///
    /// Examples:
    ///   wavescope completions bash > wavescope.bash
    ///   wavescope completions zsh > _wavescope
    ///   wavescope completions fish > wavescope.fish
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the main application based on command-line arguments.
///
/// # Exit Codes
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (invalid arguments)
///
/// # Errors
/// - If logging initialization fails
/// - If the configuration is malformed
/// - If command execution fails
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Handle commands that don't need logging or config
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "wavescope", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Logs) => {
            return match commands::handle_logs() {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
        }
        _ => {}
    }

    logging::init_logging()?;

    if let Some(Commands::Config) = cli.command {
        return commands::handle_config();
    }

    let config = WavescopeConfig::load()?;
    let options = LoadOptions::from_config(&config, cli.max_length, cli.scale);
    tracing::debug!("Effective load options: {:?}", options);

    match cli.command {
        None => match cli.file {
            Some(file) => commands::handle_view(&file, &options, &config)?,
            None => {
                Cli::command().print_help()?;
                process::exit(2);
            }
        },
        Some(Commands::View { file }) => {
            commands::handle_view(&file, &options, &config)?;
        }
        Some(Commands::Info { file }) => {
            commands::handle_info(&file, &options)?;
        }
        Some(Commands::Peaks {
            file,
            width,
            policy,
        }) => {
            commands::handle_peaks(&file, width, policy, &options)?;
        }
        Some(Commands::Ruler { file, width }) => {
            commands::handle_ruler(&file, width, &options)?;
        }
        Some(Commands::Config) | Some(Commands::Completions { .. }) | Some(Commands::Logs) => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruler::ScaleFactor;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_file_is_view() {
        let cli = Cli::try_parse_from(["wavescope", "take1.wav"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("take1.wav")));
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wavescope",
            "ruler",
            "take1.wav",
            "--width",
            "1250",
            "--scale",
            "XS",
            "--max-length",
            "500",
        ])
        .unwrap();
        assert_eq!(cli.scale, Some(ScaleSetting::Fixed(ScaleFactor::XS)));
        assert_eq!(cli.max_length, Some(500));
        match cli.command {
            Some(Commands::Ruler { width, .. }) => assert_eq!(width, 1250),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_peaks_policy() {
        let cli =
            Cli::try_parse_from(["wavescope", "peaks", "a.wav", "-p", "extremum"]).unwrap();
        match cli.command {
            Some(Commands::Peaks { policy, width, .. }) => {
                assert_eq!(policy, PolicyArg::Extremum);
                assert_eq!(width, 80);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(Cli::try_parse_from(["wavescope", "--scale", "huge", "a.wav"]).is_err());
    }
}
