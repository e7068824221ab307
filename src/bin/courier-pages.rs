//! Writes the dashboard pages for static hosting
//!
//! ```text
//! courier-pages --out-dir dist --pkg-base /pkg
//! ```

use std::path::PathBuf;

use clap::Parser;

use courier_dashboard::page;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "courier-pages")]
#[command(version, about = "Write index.html and stats.html for the courier dashboard")]
struct Args {
    /// Directory the pages are written to
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// URL prefix the wasm-bindgen package is served from
    #[arg(long, default_value = "./pkg")]
    pkg_base: String,
}

fn main() -> courier_dashboard::Result<()> {
    let args = Args::parse();
    for path in page::write_pages(&args.out_dir, &args.pkg_base)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
