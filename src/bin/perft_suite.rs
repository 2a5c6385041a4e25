use std::env;
use std::path::Path;
use std::process::ExitCode;

use halcyon::perft::run_suite;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: perft-suite <suite-file>");
        return ExitCode::FAILURE;
    };

    let summary = run_suite(Path::new(&path));
    if summary.total > 0 && summary.incorrect.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
