use ansi_term::Style;
use basic::mach::Runtime;
use clap::Parser;
use std::fs;
use std::process;

/// Runs a line-numbered integer BASIC program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program source, one numbered line per row.
    file: String,

    /// Seed for RND so runs can be repeated.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the sorted program instead of running it.
    #[arg(short, long)]
    list: bool,

    /// More log output; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("{}", e);
    }

    let source = fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read the input file '{}': {}", &args.file, e);
        process::exit(1);
    });

    let runtime = match Runtime::load(source.lines()) {
        Ok(runtime) => runtime,
        Err(error) => fail(error),
    };
    let mut runtime = match args.seed {
        Some(seed) => runtime.seeded(seed),
        None => runtime,
    };

    if args.list {
        print!("{}", runtime.program().listing());
        return;
    }

    let stdout = std::io::stdout();
    if let Err(error) = runtime.run(&mut stdout.lock()) {
        fail(error);
    }
}

fn fail(error: basic::lang::Error) -> ! {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
    process::exit(1);
}
