use clap::Parser;
use pwa_icons::icon_gen::{self, MissingPngSupport};
use std::path::Path;
use std::process::ExitCode;

const FALLBACK_HINT: &str = "Alternatively, use generate-icons.html in a browser.";

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icons",
    version,
    about = "Generate icon-192.png and icon-512.png in the current directory"
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    env_logger::init();

    match icon_gen::generate_pwa_icons(Path::new("."), icon_gen::png_support_available()) {
        Ok(_) => {
            println!("✓ Icons created successfully!");
            ExitCode::SUCCESS
        }
        Err(err) if err.is::<MissingPngSupport>() => {
            eprintln!("Error: {err}");
            eprintln!("Rebuild it with PNG support: cargo install pwa-icons --features png");
            eprintln!("\n{FALLBACK_HINT}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!("\n{FALLBACK_HINT}");
            ExitCode::FAILURE
        }
    }
}
