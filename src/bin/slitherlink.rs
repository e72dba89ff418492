// src/bin/slitherlink.rs
//
// CLI entrypoint. Loads or synthesizes a board, runs the solver, and prints
// either a bare count, a "# solutions: N" line, or a JSON summary object.

mod args;

use std::process::ExitCode;

use args::{parse_and_validate, Mode};
use slitherlink::{Board, Solver};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("slitherlink: error: {e}");
            return ExitCode::from(2);
        }
    };

    install_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("slitherlink: error: {e}");
            ExitCode::from(1)
        }
    }
}

fn install_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: args::Args) -> anyhow::Result<ExitCode> {
    let board = match &args.mode {
        Mode::File(path) => Board::from_file(path)?,
        Mode::Dimensions(x, y) => Board::blank(*x, *y),
    };

    let mut solver = Solver::new(&board);

    let solutions = if args.render {
        let mut count = 0u64;
        solver.enumerate(&mut |rows| {
            count += 1;
            let mut out = String::new();
            slitherlink::render::render_ascii(rows, board.width_column(), board.height, &mut out);
            print!("{out}");
        });
        count
    } else if args.parallel {
        #[cfg(feature = "parallel")]
        {
            slitherlink::count_parallel(&board)
        }
        #[cfg(not(feature = "parallel"))]
        {
            anyhow::bail!("this binary was built without the `parallel` feature");
        }
    } else {
        solver.count()
    };

    print_summary(&args, &board, solutions);
    Ok(ExitCode::SUCCESS)
}

fn print_summary(args: &args::Args, board: &Board, solutions: u64) {
    if args.json {
        // Hand-formatted rather than built through `serde_json::json!`: the
        // summary is a fixed three-field record and the key order ("x",
        // "y", "solutions") is part of the external format, which a
        // `Map`-backed `Value` would not preserve without the
        // `preserve_order` feature.
        println!(
            "{{\"x\":{},\"y\":{},\"solutions\":{}}}",
            board.width, board.height, solutions
        );
        return;
    }

    match &args.mode {
        Mode::File(_) => println!("# solutions: {solutions}"),
        Mode::Dimensions(_, _) => println!("{solutions}"),
    }
}
