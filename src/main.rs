use bf_tape::config::Settings;
use bf_tape::diagnostics::print_error;
use bf_tape::{build_jump_table, Error, Machine, Program, TraceTable};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [--debug|-d] [--trailing-newline] <PATH>

Options:
  --debug, -d          Print a step-by-step table of operations to stderr while running
  --trailing-newline   Print a newline after the program halts
  --help,  -h          Show this help

Notes:
- Leading and trailing whitespace of the file is ignored.
- Characters other than ><+-.,[] are comments.
- Input (`,`) reads one line from stdin and keeps its first character;
  end of input or an empty line stores 0.
- Moving the pointer left of cell 0 is an error.

Environment:
  BF_LOG, BF_DEBUG, BF_TRAILING_NEWLINE override the [run] section of
  $XDG_CONFIG_HOME/bf-tape.toml.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bf-tape", disable_help_flag = true)]
struct Cli {
    /// Print a step-by-step table of operations to stderr while running
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print a newline after the program halts
    #[arg(long = "trailing-newline")]
    trailing_newline: bool,

    /// Path to the program source; exactly one is accepted
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run_file(program: &str, path: &str, settings: &Settings) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{program}: failed to read {path}: {e}");
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let code = Program::new(&source);
    // Error positions index the trimmed program, so render against it.
    let shown = code.to_string();

    let jumps = match build_jump_table(code.chars()) {
        Ok(j) => j,
        Err(err) => {
            print_error(Some(program), &shown, &Error::from(err));
            return 1;
        }
    };
    tracing::info!(path, len = code.len(), loops = jumps.len() / 2, "program loaded");

    let mut machine = Machine::new(&code, &jumps, io::stdin().lock(), io::stdout());
    if settings.debug {
        machine = machine.with_observer(TraceTable::new(io::stderr()));
    }

    let exit_code = match machine.run() {
        Ok(_) => 0,
        Err(err) => {
            print_error(Some(program), &shown, &Error::from(err));
            1
        }
    };

    if settings.trailing_newline {
        println!();
    }
    let _ = io::stdout().flush();
    exit_code
}

fn main() {
    // Program name as invoked, for usage and error prefixes
    let program = env::args().next().unwrap_or_else(|| String::from("bf-tape"));

    let cli = Cli::parse();
    if cli.help {
        usage_and_exit(&program, 0);
    }
    // Wrong arity never touches the filesystem.
    if cli.paths.len() != 1 {
        usage_and_exit(&program, 2);
    }

    let mut settings = Settings::load();
    settings.debug |= cli.debug;
    settings.trailing_newline |= cli.trailing_newline;
    init_logging(&settings.log_level);

    // `,` blocks on stdin; make sure everything written so far survives ctrl+c.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(130);
    }) {
        tracing::warn!(error = %e, "failed to set ctrl+c handler");
    }

    let code = run_file(&program, &cli.paths[0], &settings);
    std::process::exit(code);
}
