use clap::{Parser, Subcommand};
use rosario_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rosario")]
#[command(about = "Guided rosary praying companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pray the rosary step by step (default)
    Pray {
        /// Mystery set (joyful, sorrowful, glorious, luminous); starts a
        /// fresh session
        #[arg(long)]
        mystery: Option<String>,

        /// Start from a specific position (1-80) instead of a saved session
        #[arg(long)]
        position: Option<i64>,

        /// Ignore any saved session and start from the beginning
        #[arg(long)]
        fresh: bool,

        /// Walk the whole remaining sequence without prompting (for testing)
        #[arg(long)]
        auto_advance: bool,
    },

    /// Print the full 80-step plan for a mystery set
    Outline {
        /// Mystery set (joyful, sorrowful, glorious, luminous)
        #[arg(long)]
        mystery: Option<String>,
    },

    /// Print the mystery set traditionally prayed today
    Suggest,

    /// Delete the saved session
    Reset,
}

fn main() -> Result<()> {
    // Initialize logging
    rosario_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Pray {
            mystery,
            position,
            fresh,
            auto_advance,
        }) => cmd_pray(data_dir, mystery, position, fresh, auto_advance, &config),
        Some(Commands::Outline { mystery }) => cmd_outline(mystery, &config),
        Some(Commands::Suggest) => cmd_suggest(),
        Some(Commands::Reset) => cmd_reset(data_dir),
        None => cmd_pray(data_dir, None, None, false, false, &config),
    }
}

fn cmd_pray(
    data_dir: PathBuf,
    mystery: Option<String>,
    position: Option<i64>,
    fresh: bool,
    auto_advance: bool,
    config: &Config,
) -> Result<()> {
    std::fs::create_dir_all(&data_dir)?;
    let session_path = data_dir.join("session.json");

    let book = load_prayer_book(config)?;

    // Explicit mystery or position always starts a fresh session.
    let start_fresh = fresh || mystery.is_some() || position.is_some();

    let requested_set = mystery.as_deref().and_then(|m| {
        let parsed = MysterySet::from_id(m);
        if parsed.is_none() {
            eprintln!("Unknown mystery set: {}. Using default selection.", m);
        }
        parsed
    });

    let mut cursor;
    let mut resumed = false;

    if !start_fresh {
        if let Some(saved) = SavedSession::load(&session_path)? {
            tracing::info!(
                "Resuming {} session at position {}",
                saved.mystery_set,
                saved.position
            );
            cursor = RosaryCursor::start(saved.mystery_set);
            cursor.restore_from_count(saved.position);
            resumed = cursor.has_started();
        } else {
            cursor = RosaryCursor::start(pick_mystery(requested_set, config));
        }
    } else {
        cursor = RosaryCursor::start(pick_mystery(requested_set, config));
        if let Some(pos) = position {
            cursor.restore_from_count(pos);
        }
    }

    display_session_header(&cursor, resumed);

    // Land on the first step when nothing has been shown yet.
    if !cursor.has_started() {
        cursor.advance();
    }
    display_step(&cursor, &book);

    if auto_advance {
        loop {
            match cursor.advance() {
                Progress::Step(_) => display_step(&cursor, &book),
                Progress::Complete => {
                    finish_session(&cursor, &book, &session_path)?;
                    return Ok(());
                }
            }
        }
    }

    loop {
        match prompt_user_action()? {
            UserAction::Next => {
                if config.session.bead_cues && cursor.is_bead_boundary(true) {
                    display_bead_cue();
                }
                match cursor.advance() {
                    Progress::Step(_) => display_step(&cursor, &book),
                    Progress::Complete => {
                        finish_session(&cursor, &book, &session_path)?;
                        break;
                    }
                }
            }
            UserAction::Back => {
                if config.session.bead_cues && cursor.is_bead_boundary(false) {
                    display_bead_cue();
                }
                cursor.go_back();
                display_step(&cursor, &book);
            }
            UserAction::Quit => {
                let saved =
                    SavedSession::new(cursor.mystery_set(), cursor.position() as i64);
                saved.save(&session_path)?;
                tracing::info!("Saved session at position {}", cursor.position());
                println!(
                    "\nSession saved at step {} of {}. Pray again soon.",
                    cursor.position(),
                    sequence::LAST_POSITION
                );
                break;
            }
        }
    }

    Ok(())
}

fn cmd_outline(mystery: Option<String>, config: &Config) -> Result<()> {
    let set = mystery
        .as_deref()
        .and_then(MysterySet::from_id)
        .unwrap_or_else(|| pick_mystery(None, config));
    let book = load_prayer_book(config)?;

    println!("The {} Mysteries — full sequence\n", set.name());

    for pos in sequence::FIRST_POSITION..=sequence::LAST_POSITION {
        let step = sequence::step_at(pos);
        let label = book.prayer_label(step.kind, step.decade, step.hail_mary);

        match (step.kind, step.decade) {
            (PrayerKind::MysteryAnnouncement, Some(decade)) => {
                println!(
                    "{:>2}. {} — {}",
                    pos,
                    label,
                    book.mystery_title(set, decade)
                );
            }
            _ => println!("{:>2}. {}", pos, label),
        }
    }

    Ok(())
}

fn cmd_suggest() -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let set = suggested_mystery_for(today);
    println!(
        "Today ({}) the {} Mysteries are traditionally prayed.",
        today.format("%A"),
        set.name()
    );
    Ok(())
}

fn cmd_reset(data_dir: PathBuf) -> Result<()> {
    let session_path = data_dir.join("session.json");
    SavedSession::clear(&session_path)?;
    println!("Saved session cleared.");
    Ok(())
}

/// Pick the mystery set for a fresh session: explicit flag, then config
/// pin, then the weekday schedule.
fn pick_mystery(requested: Option<MysterySet>, config: &Config) -> MysterySet {
    requested
        .or(config.session.default_mystery)
        .unwrap_or_else(|| suggested_mystery_for(chrono::Local::now().date_naive()))
}

fn load_prayer_book(config: &Config) -> Result<PrayerBook> {
    let book = match config.texts.prayer_book {
        Some(ref path) => PrayerBook::load_from(path)?,
        None => PrayerBook::bundled(),
    };

    let errors = book.validate();
    if !errors.is_empty() {
        eprintln!("Prayer book validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::PrayerBook("Invalid prayer book".into()));
    }

    Ok(book)
}

fn display_session_header(cursor: &RosaryCursor, resumed: bool) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  THE {} MYSTERIES", cursor.mystery_set().name().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    if resumed {
        println!(
            "\nResuming at step {} of {}.",
            cursor.position(),
            sequence::LAST_POSITION
        );
    }
}

fn display_step(cursor: &RosaryCursor, book: &PrayerBook) {
    let step = cursor.current_step();
    let label = book.prayer_label(step.kind, step.decade, step.hail_mary);

    println!("\n  [{}/{}] {}", step.position, sequence::LAST_POSITION, label);

    if let Some(decade) = step.decade {
        if step.kind != PrayerKind::MysteryAnnouncement {
            println!("  {}", book.mystery_title(cursor.mystery_set(), decade));
        }
    }

    println!();
    let body = book.prayer_body(step.kind, step.decade, step.hail_mary, cursor.mystery_set());
    for line in body.lines() {
        println!("  {}", line);
    }
}

fn display_bead_cue() {
    println!("\n  · · ·");
}

fn finish_session(
    cursor: &RosaryCursor,
    book: &PrayerBook,
    session_path: &std::path::Path,
) -> Result<()> {
    println!("\n✓ {}", book.completion_message());
    println!(
        "  You prayed the {} Mysteries.",
        cursor.mystery_set().name()
    );
    SavedSession::clear(session_path)?;
    Ok(())
}

enum UserAction {
    Next,
    Back,
    Quit,
}

fn prompt_user_action() -> Result<UserAction> {
    println!("\n─────────────────────────────────────────");
    println!("Press Enter for the next prayer");
    println!("  'b' + Enter to go back");
    println!("  'q' + Enter to save and quit");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input)?;
    if bytes_read == 0 {
        // stdin closed; save rather than spin
        return Ok(UserAction::Quit);
    }

    let action = match input.trim().to_lowercase().as_str() {
        "b" => UserAction::Back,
        "q" => UserAction::Quit,
        _ => UserAction::Next,
    };

    Ok(action)
}
