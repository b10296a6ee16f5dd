mod debug_report;

use silaba::{Markers, Options, analyze_verbose_with, syllabify_text};
use std::io::{self, IsTerminal, Read};

const DEBUG_ENV: &str = "SILABA_DEBUG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing();

    let opts = Options { markers: Markers { separator: config.separator, ..Markers::default() } };

    match config.mode {
        Mode::Report => {
            let res = analyze_verbose_with(&config.input, &opts);
            debug_report::print_run(&config.input, &res, config.color);
        }
        Mode::Syllables => {
            for (token, syllables) in syllabify_text(&config.input) {
                if !token.chars().any(char::is_alphabetic) {
                    continue;
                }
                println!("{token}: {}", syllables.join("-"));
            }
        }
        Mode::Json => {
            let res = silaba::analyze_with(&config.input, &opts);
            match serde_json::to_string_pretty(&res) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to serialize analysis: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Log to stderr; `SILABA_DEBUG` raises the level from WARN to DEBUG.
fn init_tracing() {
    let level = if std::env::var_os(DEBUG_ENV).is_some() { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).with_writer(io::stderr).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Report,
    Syllables,
    Json,
}

struct CliConfig {
    input: String,
    mode: Mode,
    separator: String,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut mode = Mode::Report;
    let mut separator = Markers::default().separator;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("silaba {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--syllables" => mode = set_mode(mode, Mode::Syllables)?,
            "--json" => mode = set_mode(mode, Mode::Json)?,
            "--separator" => {
                separator = args.next().ok_or_else(|| "error: --separator expects a value".to_string())?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--separator=") => {
                separator = arg.trim_start_matches("--separator=").to_string();
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, mode, separator, color })
}

fn set_mode(current: Mode, requested: Mode) -> Result<Mode, String> {
    if current != Mode::Report && current != requested {
        return Err("error: --syllables and --json cannot be combined".to_string());
    }
    Ok(requested)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "silaba {version}

Portuguese syllabification and R-sound detection.

Usage:
  silaba [OPTIONS] [--] <input...>
  silaba [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to analyze. If omitted, reads remaining args
                             or stdin when no args are provided.
  --syllables                Print each word with its syllables instead of the report.
  --json                     Print the analysis as JSON.
  --separator <text>         Text inserted between touching highlights.
                             Default: U+200B (zero-width space)
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {debug_env}               Log routing decisions and dropped hits to stderr.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        debug_env = DEBUG_ENV
    )
}
