// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use scaledrill::config::{validate_config, DrillConfig};
use scaledrill::keyboard::{render_keyboard, RenderOptions};
use scaledrill::music::random_scale;
use scaledrill::{DrillSession, KeyIdentity, KeyboardLayout, NoteNaming, Scale};

fn print_usage() {
    println!("SCALEDRILL - Scale Construction Trainer");
    println!();
    println!("Usage: scaledrill [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --play                  Start an interactive drill on stdin");
    println!("  --scale <ROOT> <MODE>   Show a scale and the keys it occupies");
    println!("  --random                Show a random scale");
    println!("  --config <PATH>         Load drill settings from a YAML file");
    println!("  --check-config <PATH>   Validate a drill settings file");
    println!("  --german                Use German note names (H, B, Fis, Es)");
    println!("  --verbose               Log engine activity to stderr");
    println!("  --help                  Show this help message");
}

fn print_play_help(naming: NoteNaming) {
    let examples = match naming {
        NoteNaming::English => "C1, Bb1, F#2",
        NoteNaming::German => "C1, B1, Fis2, Es1, H1",
    };
    println!("Commands:");
    println!("  <key> [<key> ...]       Toggle keys: {}, white-3, black-1-C#", examples);
    println!("  check                   Grade the selection");
    println!("  new                     Next random scale");
    println!("  scale <ROOT> <MODE>     Drill a specific scale");
    println!("  show                    Redraw the keyboard");
    println!("  quit                    Leave the drill");
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn show_scale(scale: &Scale, naming: NoteNaming) -> Result<()> {
    let layout = KeyboardLayout::standard();
    let keys = layout.scale_keys(scale)?;

    println!("{} ({})", scale.title(naming), scale.key_signature());
    println!("Degrees: {}", scale.answer(naming));
    let labels: Vec<String> = keys
        .iter()
        .map(|&key| format!("{} [{}]", layout.label(key, Some(scale), naming), key))
        .collect();
    println!("Keys:    {}", labels.join(", "));
    let parallel = scale.parallel()?;
    println!(
        "Parallel: {} ({})",
        parallel.title(naming),
        parallel.key_signature()
    );
    println!();

    let selected = keys.into_iter().collect();
    let options = RenderOptions {
        naming,
        mark_root: false,
    };
    println!("{}", render_keyboard(layout, scale, &selected, None, options));
    Ok(())
}

fn print_round(session: &DrillSession, options: RenderOptions) {
    let scale = session.scale();
    println!();
    println!("Construct: {}", scale.title(options.naming));
    println!(
        "{}",
        render_keyboard(
            KeyboardLayout::standard(),
            scale,
            session.selection().as_set(),
            session.result(),
            options,
        )
    );
}

fn check_round(session: &mut DrillSession, options: RenderOptions) -> Result<()> {
    let correct = session.check()?.is_correct();
    print_round(session, options);
    if correct {
        println!("Correct!");
    } else {
        println!("Incorrect. Correct answer: {}", session.scale().answer(options.naming));
    }
    let tally = session.tally();
    println!("Score: {}/{}", tally.correct, tally.rounds);
    Ok(())
}

fn play(config: &DrillConfig) -> Result<()> {
    let mut session = DrillSession::new(config)?;
    let options = RenderOptions {
        naming: config.naming,
        mark_root: config.mark_root,
    };

    print_play_help(options.naming);
    print_round(&session, options);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "q" | "exit"] => break,
            ["help" | "?"] => print_play_help(options.naming),
            ["show" | "s"] => print_round(&session, options),
            ["check" | "c"] => {
                if let Err(e) = check_round(&mut session, options) {
                    eprintln!("Error: {}", e);
                }
            }
            ["new" | "n"] => {
                session.new_scale()?;
                print_round(&session, options);
            }
            ["scale", root, mode] => match Scale::parse(root, mode) {
                Ok(scale) => {
                    session.set_scale(scale.root(), scale.mode())?;
                    print_round(&session, options);
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            keys => {
                for text in keys {
                    let toggled = KeyIdentity::parse_with(text, options.naming)
                        .and_then(|key| session.toggle(key));
                    if let Err(e) = toggled {
                        eprintln!("Error: {}", e);
                    }
                }
                print_round(&session, options);
            }
        }
    }

    let tally = session.tally();
    println!();
    println!("Final score: {}/{}", tally.correct, tally.rounds);
    Ok(())
}

fn option_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| anyhow!("{} requires a value", flag)),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let has = |flag: &str| args.iter().any(|a| a == flag);

    init_logging(has("--verbose"));

    let mut config = match option_value(&args, "--config")? {
        Some(path) => DrillConfig::load(path)?,
        None => DrillConfig::default(),
    };
    if has("--german") {
        config.naming = NoteNaming::German;
    }

    if has("--help") || has("-h") {
        print_usage();
    } else if let Some(path) = option_value(&args, "--check-config")? {
        let checked = validate_config(path)?;
        println!("{} is valid", path);
        println!("Roots: {}", checked.roots.join(" "));
        println!("Modes: {}", checked.modes.join(" "));
    } else if let Some(i) = args.iter().position(|a| a == "--scale") {
        let (Some(root), Some(mode)) = (args.get(i + 1), args.get(i + 2)) else {
            eprintln!("Error: --scale requires a root and a mode (e.g. --scale F major)");
            std::process::exit(1);
        };
        let scale = Scale::parse(root, mode)?;
        show_scale(&scale, config.naming)?;
    } else if has("--random") {
        let scale = random_scale()?;
        show_scale(&scale, config.naming)?;
    } else if has("--play") {
        play(&config)?;
    } else {
        println!("SCALEDRILL - Scale Construction Trainer");
        println!("Run with --help for usage information");
    }

    Ok(())
}
