use clap::{Parser, Subcommand};
use std::io::Write;

use tickwork_cli::CliContext;
use tickwork_cli::commands::{self, AddOptions};
use tickwork_cli::logging;
use tickwork_cli::readline;
use tickwork_core::AppConfigExt;

fn main() -> Result<(), String> {
    logging::init();

    let mut ctx = CliContext::new();

    if let Some(dir) = ctx.config.definitions_path() {
        if let Err(err) = commands::load(&mut ctx, &dir.to_string_lossy()) {
            tracing::warn!(error = %err, "Failed to load startup timer definitions");
        }
    }

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Frame-driven timer playground")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register (or replace) a named timer
    Add {
        name: String,
        duration: f32,
        /// Re-arm forever
        #[arg(long = "loop")]
        looping: bool,
        /// Re-arm this many extra times
        #[arg(long, default_value_t = 0)]
        loops: u32,
        /// Count down on unscaled time
        #[arg(long)]
        unscaled: bool,
        /// Keep the timer idle at zero after it expires
        #[arg(long)]
        preserve: bool,
        /// Initial remaining time (defaults to duration)
        #[arg(long)]
        start: Option<f32>,
        /// Print every update
        #[arg(long)]
        watch: bool,
    },
    /// Overwrite a timer's remaining time, creating it if needed
    Set { name: String, seconds: f32 },
    Get { name: String },
    Clear { name: String },
    ClearAll,
    /// Schedule an anonymous one-shot timer
    Once {
        seconds: f32,
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Trigger a chronometer for the next tick
    Trigger { name: String, target: f32 },
    /// Advance one frame (clock delta unless given)
    Tick {
        scaled: Option<f32>,
        unscaled: Option<f32>,
    },
    /// Advance several clock frames
    Run {
        frames: u32,
        /// Trigger chronometer NAME=TARGET every frame
        #[arg(long)]
        hold: Vec<String>,
    },
    /// Load timer definitions from a TOML file or directory
    Load { path: String },
    List,
    Scale { factor: f32 },
    Pause,
    Resume,
    Config,
    SaveConfig,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "tickwork".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Add {
            name,
            duration,
            looping,
            loops,
            unscaled,
            preserve,
            start,
            watch,
        }) => {
            let opts = AddOptions {
                looping,
                loops,
                unscaled,
                preserve,
                start,
                watch,
            };
            commands::add_timer(ctx, &name, duration, &opts)?;
        }
        Some(Commands::Set { name, seconds }) => {
            commands::set_timer(ctx, &name, seconds);
        }
        Some(Commands::Get { name }) => commands::get_timer(ctx, &name),
        Some(Commands::Clear { name }) => commands::clear_timer(ctx, &name),
        Some(Commands::ClearAll) => commands::clear_all(ctx),
        Some(Commands::Once { seconds, label }) => {
            commands::schedule_once(ctx, seconds, label.as_deref())
        }
        Some(Commands::Trigger { name, target }) => {
            commands::trigger(ctx, &name, target);
        }
        Some(Commands::Tick { scaled, unscaled }) => commands::tick(ctx, scaled, unscaled),
        Some(Commands::Run { frames, hold }) => {
            let hold = hold
                .iter()
                .map(|spec| commands::parse_hold(spec))
                .collect::<Result<Vec<_>, _>>()?;
            commands::run(ctx, frames, &hold);
        }
        Some(Commands::Load { path }) => {
            commands::load(ctx, &path)?;
        }
        Some(Commands::List) => commands::list(ctx),
        Some(Commands::Scale { factor }) => commands::set_scale(ctx, factor),
        Some(Commands::Pause) => commands::pause(ctx, true),
        Some(Commands::Resume) => commands::pause(ctx, false),
        Some(Commands::Config) => commands::show_config(ctx),
        Some(Commands::SaveConfig) => commands::save_config(ctx)?,
        Some(Commands::Exit) => {
            println!("quitting...");
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
