use std::process::exit;

use clap::Parser;

use fretwork::scale::diatonic::Mode;
use fretwork::scale::just::Symmetry;
use fretwork::system::{Params, TuningSystem};

/// Compute fret positions for historical and theoretical tuning systems
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scale length of the string, in any unit
    #[arg(long, default_value_t = 540.0)]
    length: f64,

    /// Tuning system selector: equal, saz, pythagorean, meantone,
    /// extendedMeantone, ptolemy, just5limitFromPythagorean,
    /// just5limitFromRatios, just7limitFromRatios, just13limitFromRatios,
    /// bachWellTemperament
    #[arg(long, default_value = "ptolemy")]
    system: String,

    /// Divisions of the octave (equal temperament only)
    #[arg(long)]
    divisions: Option<u32>,

    /// Number of octaves to compute (Ptolemy only)
    #[arg(long)]
    octaves: Option<u32>,

    /// Diatonic mode (Ptolemy only): Ionian, Dorian, Phrygian, Lydian,
    /// Mixolydian, Aeolian or Locrian
    #[arg(long)]
    mode: Option<String>,

    /// Major-second/minor-seventh choice for ratio-built just scales:
    /// asymmetric, symmetric1 or symmetric2
    #[arg(long)]
    symmetry: Option<String>,
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let params = Params {
        divisions: args.divisions,
        octaves: args.octaves,
        mode: args.mode.as_deref().and_then(Mode::parse),
        symmetry: args.symmetry.as_deref().and_then(Symmetry::parse),
    };
    let board = TuningSystem::from_selector(&args.system, &params)?.fretboard(args.length)?;
    Ok(serde_json::to_string_pretty(&board)?)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}
