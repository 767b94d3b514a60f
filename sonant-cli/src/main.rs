use std::fs::File;

use sonant_core::{chord_to_degree, detect_chord, ChordTables};
use sonant_types::{
    midi_to_note_name, AccidentalNotation, DetectOptions, Detection, KeyMode, TonicNote,
};

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("sonant")
        .join("sonant.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = File::create(&log_path).unwrap_or_else(|_| {
        File::create("/tmp/sonant.log").expect("Cannot create log file")
    });

    WriteLogger::init(log_level, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("sonant starting (log level: {:?})", log_level);
}

fn usage() -> ! {
    eprintln!("Usage: sonant [OPTIONS] <midi-pitch>...");
    eprintln!();
    eprintln!("Detect the chord named by a set of MIDI pitches (0-127).");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --flat                    spell roots with flats instead of sharps");
    eprintln!("  --all                     print every name in the best-scoring group");
    eprintln!("  --no-merge                keep tensions in separate parentheticals");
    eprintln!("  --names                   also print the input pitches as note names");
    eprintln!("  --degree <tonic>[:mode]   also print degree notation, e.g. --degree C:minor");
    eprintln!("  -v, --verbose             debug logging");
    std::process::exit(2);
}

fn parse_degree_arg(arg: &str) -> Option<(TonicNote, KeyMode)> {
    let (tonic, mode) = match arg.split_once(':') {
        Some((t, m)) => (t, m),
        None => (arg, "major"),
    };
    let tonic = TonicNote::from_name(tonic)?;
    let mode = match mode {
        "major" => KeyMode::Major,
        "minor" => KeyMode::Minor,
        _ => return None,
    };
    Some((tonic, mode))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let mut options = sonant_core::config::Config::load().detect_options();
    let mut show_names = false;
    let mut degree_key: Option<(TonicNote, KeyMode)> = None;
    let mut pitches: Vec<u8> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => {}
            "--flat" => options.accidental_notation = AccidentalNotation::Flat,
            "--all" => options.return_all = true,
            "--no-merge" => options.merge_parentheses = false,
            "--names" => show_names = true,
            "--degree" => {
                i += 1;
                let Some(arg) = args.get(i) else { usage() };
                match parse_degree_arg(arg) {
                    Some(key) => degree_key = Some(key),
                    None => {
                        eprintln!("Unrecognized key: {}", arg);
                        usage();
                    }
                }
            }
            "--help" | "-h" => usage(),
            arg => match arg.parse::<u8>() {
                Ok(pitch) if pitch <= 127 => pitches.push(pitch),
                _ => {
                    eprintln!("Not a MIDI pitch: {}", arg);
                    usage();
                }
            },
        }
        i += 1;
    }

    if pitches.is_empty() {
        usage();
    }

    let tables = ChordTables::new();
    let detection = detect_chord(&tables, &pitches, &options);

    if show_names {
        let names: Vec<String> = pitches
            .iter()
            .map(|&p| midi_to_note_name(p, options.accidental_notation))
            .collect();
        println!("{}", names.join(" "));
    }

    match &detection {
        Detection::None => println!(),
        Detection::One(name) => println!("{}", name),
        Detection::Many(names) => println!("{}", names.join(", ")),
    }

    if let Some((tonic, mode)) = degree_key {
        if let Some(name) = detection.first() {
            match chord_to_degree(name, Some(tonic), mode) {
                Some(degree) => println!("{}", degree),
                None => println!(),
            }
        }
    }
}
