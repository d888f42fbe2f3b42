use console::Term;

use crate::cli::Cli;
use crate::error::CliError;

/// Output context derived from CLI flags.
///
/// The DBML document itself goes to stdout; everything here writes to
/// stderr, respecting quiet mode and color settings.
pub struct OutputContext {
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from parsed CLI options.
    pub fn from_cli(cli: &Cli) -> Self {
        let use_color = !cli.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            quiet: cli.quiet,
            use_color,
        }
    }

    /// Print a success message to stderr (not in quiet mode).
    pub fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            let style = console::Style::new().green().bold();
            eprintln!("{} {}", style.apply_to("ok"), msg);
        } else {
            eprintln!("ok {msg}");
        }
    }

    /// Print a warning to stderr (not in quiet mode).
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            let style = console::Style::new().yellow().bold();
            eprintln!("{} {}", style.apply_to("warning:"), msg);
        } else {
            eprintln!("warning: {msg}");
        }
    }

    /// Print a status message to stderr (not in quiet mode).
    pub fn status(&self, msg: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{msg}");
    }

    /// Print an error to stderr (always, even in quiet mode).
    pub fn print_error(&self, err: &CliError) {
        if self.use_color {
            let style = console::Style::new().red().bold();
            eprintln!("{} {}", style.apply_to("error:"), err);
        } else {
            eprintln!("error: {err}");
        }
    }
}
