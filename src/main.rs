mod error;
mod face;
mod utils;

use std::process;

use clap::Parser;
use error::FaceError;
use face::generate_face;
use image::ImageFormat;

const OUTPUT_PATH: &str = "alien.png";

/// Draw a cartoon alien face and save it as alien.png
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Width and height of the square image, in pixels
    #[arg(long, default_value_t = 100)]
    size: u32,
}

fn run(args: &Args) -> Result<(), FaceError> {
    println!("Generating alien face...");
    let img = generate_face(args.size)?;
    log::info!("rendered {}x{} face", img.width(), img.height());

    println!("Saving image...");
    img.save_with_format(OUTPUT_PATH, ImageFormat::Png)
        .map_err(FaceError::from_save)?;
    Ok(())
}

/// Lines reported to the user when a run fails
fn failure_lines(err: &FaceError) -> Vec<String> {
    match err {
        FaceError::EncoderUnavailable(reason) => vec![
            format!("PNG support is missing from this build ({}).", reason),
            "Rebuild with the `png` feature of the `image` crate enabled.".to_string(),
            format!(
                "Or you can manually create an {} file and place it in the project directory.",
                OUTPUT_PATH
            ),
        ],
        other => vec![format!("Error creating {}: {}", OUTPUT_PATH, other)],
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => println!("Created {} successfully!", OUTPUT_PATH),
        Err(e) => {
            log::debug!("{:?}", e);
            for line in failure_lines(&e) {
                eprintln!("{}", line);
            }
            process::exit(1);
        }
    }
}
