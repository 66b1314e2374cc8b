use std::path::Path;
use std::rc::Rc;

use tickwork_core::{
    AppConfigExt, FrameDelta, SetStatus, Timer, load_definitions_from_dir,
    load_definitions_from_file,
};

use crate::context::{CliContext, EventLog};

/// Options for `add`
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub looping: bool,
    pub loops: u32,
    pub unscaled: bool,
    pub preserve: bool,
    pub start: Option<f32>,
    pub watch: bool,
}

fn expire_logger(events: &EventLog, name: &str) -> impl FnMut() + 'static {
    let events = Rc::clone(events);
    let name = name.to_string();
    move || events.borrow_mut().push(format!("timer '{name}' expired"))
}

fn update_logger(events: &EventLog, name: &str) -> impl FnMut(f32, f32) + 'static {
    let events = Rc::clone(events);
    let name = name.to_string();
    move |left, duration| {
        events
            .borrow_mut()
            .push(format!("timer '{name}': {left:.2}/{duration:.2}"))
    }
}

fn print_events(ctx: &CliContext) {
    for line in ctx.drain_events() {
        println!("  {line}");
    }
}

pub fn add_timer(
    ctx: &mut CliContext,
    name: &str,
    duration: f32,
    opts: &AddOptions,
) -> Result<(), String> {
    let mut timer = Timer::new(name, duration)
        .loops(opts.loops)
        .on_expire(expire_logger(&ctx.events, name));

    if let Some(start) = opts.start {
        timer = timer.starting_at(start);
    }
    if opts.looping {
        timer = timer.looping();
    }
    if opts.unscaled {
        timer = timer.unscaled();
    }
    if opts.preserve {
        timer = timer.preserve_after_expiry();
    }
    if opts.watch {
        timer = timer.on_update(update_logger(&ctx.events, name));
    }

    ctx.engine.upsert(timer).map_err(|e| e.to_string())?;
    println!("added '{name}' ({duration:.2}s)");
    Ok(())
}

pub fn set_timer(ctx: &mut CliContext, name: &str, seconds: f32) -> SetStatus {
    let status = ctx
        .engine
        .set_or_create_with(name, seconds, expire_logger(&ctx.events, name));
    match status {
        SetStatus::Created => println!("created '{name}' ({seconds:.2}s)"),
        SetStatus::Updated => println!("updated '{name}' to {seconds:.2}s"),
    }
    status
}

pub fn get_timer(ctx: &CliContext, name: &str) {
    match ctx.engine.timer(name) {
        Some(timer) => println!(
            "{name}: {:.2}/{:.2}s{}",
            timer.time_left,
            timer.duration,
            if timer.is_running() { "" } else { " (idle)" }
        ),
        None => println!("{name}: {:.2}s (not registered)", ctx.engine.get_remaining(name)),
    }
}

pub fn clear_timer(ctx: &mut CliContext, name: &str) {
    if ctx.engine.clear(name) {
        println!("cleared '{name}'");
    } else {
        println!("no timer named '{name}'");
    }
}

pub fn clear_all(ctx: &mut CliContext) {
    let count = ctx.engine.timer_count();
    ctx.engine.clear_all();
    println!("cleared {count} timers");
}

pub fn schedule_once(ctx: &mut CliContext, seconds: f32, label: Option<&str>) {
    let events = Rc::clone(&ctx.events);
    let label = label.unwrap_or("one-shot").to_string();
    ctx.engine.schedule_one_shot(seconds, move || {
        events.borrow_mut().push(format!("'{label}' fired"));
    });
    println!("scheduled one-shot in {seconds:.2}s");
}

pub fn trigger(ctx: &mut CliContext, name: &str, target: f32) -> bool {
    let reached = ctx.engine.trigger_chronometer(name, target);
    println!(
        "chronometer '{name}': {:.2}s{}",
        ctx.engine.chronometer_elapsed(name),
        if reached { " - target reached" } else { "" }
    );
    reached
}

/// Advance one frame, using explicit deltas or the clock
pub fn tick(ctx: &mut CliContext, scaled: Option<f32>, unscaled: Option<f32>) {
    let delta = match (scaled, unscaled) {
        (Some(s), Some(u)) => FrameDelta {
            scaled: s,
            unscaled: u,
        },
        (Some(s), None) => FrameDelta::uniform(s),
        _ => ctx.clock.next_frame(),
    };
    ctx.engine.tick_frame(delta);
    println!(
        "tick {} (scaled {:.3}s, unscaled {:.3}s)",
        ctx.engine.ticks(),
        delta.scaled,
        delta.unscaled
    );
    print_events(ctx);
}

/// Run `frames` clock frames, triggering each held chronometer every frame
pub fn run(ctx: &mut CliContext, frames: u32, hold: &[(String, f32)]) {
    for _ in 0..frames {
        for (name, target) in hold {
            if ctx.engine.trigger_chronometer(name, *target) {
                ctx.events
                    .borrow_mut()
                    .push(format!("chronometer '{name}' reached {target:.2}s"));
            }
        }
        let delta = ctx.clock.next_frame();
        ctx.engine.tick_frame(delta);
    }
    println!(
        "ran {frames} frames, clock at {} ({} timers, {} one-shots)",
        ctx.clock.format_elapsed(),
        ctx.engine.timer_count(),
        ctx.engine.one_shot_count()
    );
    print_events(ctx);
}

/// Parse a `NAME=TARGET` chronometer hold
pub fn parse_hold(spec: &str) -> Result<(String, f32), String> {
    let (name, target) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TARGET, got '{spec}'"))?;
    if name.is_empty() {
        return Err("chronometer name must not be empty".to_string());
    }
    let target: f32 = target
        .parse()
        .map_err(|_| format!("invalid target '{target}'"))?;
    Ok((name.to_string(), target))
}

/// Load definitions from a file or every `*.toml` file in a directory
pub fn load(ctx: &mut CliContext, path: &str) -> Result<usize, String> {
    let path = Path::new(path);
    let definitions = if path.is_dir() {
        load_definitions_from_dir(path)
    } else {
        load_definitions_from_file(path)
    }
    .map_err(|e| e.to_string())?;

    let loaded = ctx.engine.load_definitions(&definitions);
    println!("loaded {loaded} timers from {}", path.display());
    Ok(loaded)
}

pub fn list(ctx: &CliContext) {
    let mut names: Vec<&str> = ctx.engine.timer_names().collect();
    names.sort_unstable();

    if names.is_empty() {
        println!("No timers registered");
    } else {
        println!("{:<24} {:>10} {:>10}  Flags", "Name", "Left", "Duration");
        println!("{}", "-".repeat(60));
        for name in names {
            let Some(timer) = ctx.engine.timer(name) else {
                continue;
            };
            let mut flags = Vec::new();
            if timer.loop_infinitely {
                flags.push("loop".to_string());
            }
            if timer.loops_remaining > 0 {
                flags.push(format!("loops={}", timer.loops_remaining));
            }
            if timer.use_unscaled_time {
                flags.push("unscaled".to_string());
            }
            if timer.preserve_after_expiry {
                flags.push("preserve".to_string());
            }
            println!(
                "{:<24} {:>10.2} {:>10.2}  {}",
                name,
                timer.time_left,
                timer.duration,
                flags.join(",")
            );
        }
    }

    println!(
        "{} one-shots pending, {} chronometers",
        ctx.engine.one_shot_count(),
        ctx.engine.chronometer_count()
    );
}

pub fn set_scale(ctx: &mut CliContext, scale: f32) {
    ctx.clock.set_time_scale(scale);
    println!("time scale {:.2}", ctx.clock.time_scale());
}

pub fn pause(ctx: &mut CliContext, paused: bool) {
    if paused {
        ctx.clock.pause();
        println!("scaled time paused");
    } else {
        ctx.clock.resume();
        println!("scaled time resumed");
    }
}

pub fn show_config(ctx: &CliContext) {
    match tickwork_core::AppConfig::config_path() {
        Ok(path) => println!("config file: {}", path.display()),
        Err(e) => println!("config file: unavailable ({e})"),
    }
    println!("{:#?}", ctx.config);
}

pub fn save_config(ctx: &CliContext) -> Result<(), String> {
    ctx.config.save().map_err(|e| e.to_string())?;
    println!("configuration saved");
    Ok(())
}
