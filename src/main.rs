mod error;
mod git;
mod stamp;

use color_print::{ceprintln, cprintln};
use error::StampError;
use stamp::CHANGES;
use std::process;

fn main() {
    if let Err(e) = run() {
        ceprintln!("<strong><r>Error</></>: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), StampError> {
    let short_git_hash = git::short_hash()?;

    for change in CHANGES.iter() {
        change.perform(&short_git_hash)?;
    }

    cprintln!(
        "<g>Stamped {} file(s) with</> <s>{}</>",
        CHANGES.len(),
        short_git_hash
    );
    Ok(())
}
