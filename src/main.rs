//! Command-line entry point: resolve options, render, write the file.

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;
use std::str::FromStr;
use vamp::{Adsr, Mood, Pitch, RenderConfig, Tone, Waveform, render_progression, wav};

/// Chord progression generation and recording to a WAV file.
#[derive(Parser)]
#[command(name = "vamp")]
#[command(about = "Chord progression generation and recording to a WAV file")]
struct Cli {
    /// Beats per minute
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..))]
    bpm: u32,

    /// Mood of the progression (epic, sad, cool, happy); random when
    /// unset
    #[arg(long, value_parser = Mood::from_str)]
    mood: Option<Mood>,

    /// Key of the progression (one of the 12 pitch classes); random when
    /// unset
    #[arg(long, value_parser = Pitch::from_str)]
    key: Option<Pitch>,

    /// Octave placement of the progression (high, normal, low)
    #[arg(long, default_value = "normal", value_parser = Tone::from_str)]
    tone: Tone,

    /// Waveform (sine, saw, triangle, square); random when unset
    #[arg(long, value_parser = Waveform::from_str)]
    wave: Option<Waveform>,

    /// ADSR envelope: attack, decay, sustain, release
    #[arg(
        long,
        num_args = 4,
        value_names = ["ATTACK", "DECAY", "SUSTAIN", "RELEASE"],
        default_values_t = [0.1, 0.3, 0.75, 0.15]
    )]
    adsr: Vec<f64>,

    /// Output file name
    #[arg(long, default_value = "clip.wav")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::thread_rng();

    // Options left unset fall back to a uniform random pick here, so the
    // render itself stays deterministic given its inputs.
    let mood = cli
        .mood
        .unwrap_or_else(|| Mood::ALL[rng.gen_range(0..Mood::ALL.len())]);
    let key = cli
        .key
        .unwrap_or_else(|| Pitch::ALL[rng.gen_range(0..Pitch::ALL.len())]);
    let waveform = cli
        .wave
        .unwrap_or_else(|| Waveform::ALL[rng.gen_range(0..Waveform::ALL.len())]);

    let config = RenderConfig {
        bpm: cli.bpm,
        mood,
        key,
        tone: cli.tone,
        waveform,
        adsr: Adsr::new(cli.adsr[0], cli.adsr[1], cli.adsr[2], cli.adsr[3]),
    };

    let track = render_progression(&config, &mut rng)?;
    wav::write_wav(&cli.output, &track)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{} saved.", cli.output.display());
    Ok(())
}
