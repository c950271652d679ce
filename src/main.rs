// efp: expression parser with canonical printer and tree viewer

use std::fs;
use std::io;
use std::path::Path;

use clap::{Arg, ArgAction, Command, ValueHint};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use efp::printer::render_expr;
use efp::ui::App;
use efp::{Format, Parser};

fn cli() -> Command {
    Command::new("efp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse an expression file and print its canonical form")
        .arg(
            Arg::new("path")
                .help("Source file to parse")
                .index(1)
                .default_value("example.efp")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output form for each expression")
                .value_parser(Format::NAMES)
                .default_value("sexpr"),
        )
        .arg(
            Arg::new("tui")
                .long("tui")
                .help("Browse the parsed expressions in a terminal UI")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress progress messages on stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let path = matches
        .get_one::<String>("path")
        .map_or("example.efp", String::as_str);
    let format: Format = matches
        .get_one::<String>("format")
        .map_or(Ok(Format::default()), |name| name.parse())?;
    let quiet = matches.get_flag("quiet");

    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;

    if matches.get_flag("tui") {
        return run_viewer(path, source);
    }

    if !quiet {
        eprintln!("Parsing {}...", path);
    }

    // Print each expression as soon as it parses
    let mut count = 0;
    for result in Parser::new(&source) {
        match result {
            Ok(expr) => {
                println!("{}", render_expr(&expr, format));
                count += 1;
            }
            Err(e) => {
                eprintln!("Parser error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if !quiet {
        eprintln!(
            "Parsed successfully. Found {} top-level expressions.",
            count
        );
    }

    Ok(())
}

fn run_viewer(path: &str, source: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(path, source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
