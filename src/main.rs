use chordsheet::{parse, parse_sheet, ChordSheet, ParsedChord, SheetError, SheetMetadata};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolve chord symbols into keyboard voicings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Chord symbols, e.g. C Am/F C#maj7/G
    chords: Vec<String>,

    /// Read a chord sheet ("-" for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Octave shift for keyboard placement (overrides sheet frontmatter)
    #[arg(long)]
    octave: Option<i32>,

    /// Keyboard width in octaves (overrides sheet frontmatter)
    #[arg(long)]
    keyboard_octaves: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chordsheet=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let settings = match SheetMetadata::default().with_overrides(args.octave, args.keyboard_octaves) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut failed = false;

    if let Some(path) = &args.file {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        let mut sheet = match parse_sheet(&source) {
            Ok(sheet) => sheet,
            Err(e) => {
                eprintln!("Error in '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        sheet.metadata = match sheet
            .metadata
            .clone()
            .with_overrides(args.octave, args.keyboard_octaves)
        {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        info!(
            entries = sheet.entries.len(),
            skipped = sheet.skipped.len(),
            "parsed chord sheet"
        );
        print_sheet(&sheet, args.format);
    }

    let mut chords: Vec<ParsedChord> = Vec::with_capacity(args.chords.len());
    for symbol in &args.chords {
        match parse(symbol.trim()) {
            Ok(chord) => chords.push(chord),
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }

    if !chords.is_empty() {
        let layout = settings.layout();
        match args.format {
            Format::Json => print_json(&chords),
            Format::Text => {
                for chord in &chords {
                    match layout.place(chord, settings.octave) {
                        Ok(view) => println!("{}\n{}\n", chord.symbol(), view.render_text()),
                        Err(e) => {
                            eprintln!("{}", e);
                            failed = true;
                        }
                    }
                }
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn read_source(path: &Path) -> Result<String, SheetError> {
    let io_error = |source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map_err(io_error)?;
        Ok(source)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}

fn print_sheet(sheet: &ChordSheet, format: Format) {
    match format {
        Format::Json => print_json(sheet),
        Format::Text => {
            if let Some(title) = &sheet.metadata.title {
                println!("{}\n", title);
            }
            let views = match sheet.views() {
                Ok(views) => views,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            };
            for (entry, view) in sheet.entries.iter().zip(views) {
                match &entry.lyrics {
                    Some(lyrics) => println!("{} - {}", entry.chord.symbol(), lyrics),
                    None => println!("{}", entry.chord.symbol()),
                }
                println!("{}\n", view.render_text());
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
