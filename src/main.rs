use clap::{Parser, Subcommand};
use mfsymlink::{is_possible_symlink, parse, MfSymlinkError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mfsymlink", about = "Inspect Minshall-French symlink files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which of the given files could be mfsymlinks (size check only)
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Decode the given files and print their link targets
    Resolve {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {

        // ── Check ────────────────────────────────────────────────────────────
        // Size metadata only; file contents are never read.
        Commands::Check { files } => {
            for path in &files {
                let size = std::fs::metadata(path)?.len();
                let verdict = if is_possible_symlink(size) {
                    "possible mfsymlink"
                } else {
                    "regular file"
                };
                println!("{:<40} {:>8} B  {}", path.display(), size, verdict);
            }
        }

        // ── Resolve ──────────────────────────────────────────────────────────
        Commands::Resolve { files } => {
            let mut corrupt = 0usize;
            for path in &files {
                if !is_possible_symlink(std::fs::metadata(path)?.len()) {
                    println!("{}: regular file", path.display());
                    continue;
                }
                match parse(&std::fs::read(path)?) {
                    Ok(target) => println!("{} -> {}", path.display(), target),
                    Err(MfSymlinkError::NotMfSymlink) => {
                        println!("{}: regular file", path.display());
                    }
                    Err(err @ MfSymlinkError::Md5Mismatch) => {
                        // Corruption is worth a loud warning, unlike a size or
                        // grammar miss which just means "ordinary file".
                        eprintln!("{}: {}", path.display(), err);
                        corrupt += 1;
                    }
                }
            }
            if corrupt > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
