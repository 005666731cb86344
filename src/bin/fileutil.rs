use clap::Parser;
use fileutil::commands::fileutil::args::Args;
use fileutil::commands::fileutil::run;
use fileutil::logging;

/// Print a file, or copy/move it into a directory.
fn main() {
    logging::init();

    let args = Args::parse();
    let exit_code = run(args);
    std::process::exit(exit_code);
}
