use std::{
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

use clap::Parser;
use log::{LevelFilter, info, warn};
use matix::{
    config::{Config, DEFAULT_CONFIG_PATH},
    interpreter::evaluator::core::Context,
    session::{Session, execute_line, run_script},
    storage::DirectoryStore,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// matix is an interactive calculator for matrix algebra.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the `.matix` files. Overrides the configuration file.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Configuration file whose first line names the working directory.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Runs the statements of a file instead of reading from the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Logs every evaluated statement.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = match args.dir {
        Some(working_directory) => Config { working_directory },
        None => Config::load(&args.config).unwrap_or_else(|e| {
                                              warn!("{}: {e:?}", args.config.display());
                                              let config = Config::default();
                                              eprintln!("{e}");
                                              eprintln!("Using default directory: {}",
                                                        config.working_directory.display());
                                              config
                                          }),
    };
    info!("working directory: {}", config.working_directory.display());

    let context = Context::new(DirectoryStore::new(config.working_directory.clone()));

    let result = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   path.display());
                         process::exit(1);
                     });
        run_script(context, &script, io::stdout().lock()).map(drop)
    } else if io::stdin().is_terminal() {
        interactive(context, &config.prompt())
    } else {
        Session::new(context, io::stdin().lock(), io::stdout().lock()).with_prompt(config.prompt())
                                                                      .run()
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Reads lines with history and editing until `exit`, Ctrl-D or Ctrl-C.
fn interactive(mut context: Context, prompt: &str) -> io::Result<()> {
    let mut editor = DefaultEditor::new().map_err(io::Error::other)?;
    let mut stdout = io::stdout();

    while context.is_running() {
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(e) = editor.add_history_entry(line.as_str())
                {
                    warn!("cannot record history: {e}");
                }
                execute_line(&mut context, &line, &mut stdout)?;
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(io::Error::other(e)),
        }
    }
    Ok(())
}
