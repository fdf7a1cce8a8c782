//! Spring View entry point
//!
//! Headless host: drives the frame loop for a fixed number of frames,
//! recording draw calls instead of rasterizing them.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use spring_view::renderer::DrawList;
use spring_view::{App, FrameInput, FrameOutcome, Settings};

#[derive(Debug, Parser)]
#[command(name = "spring-view", about = "Simulate a damped spring and project it to screen space")]
struct Args {
    /// Settings JSON file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 120)]
    frames: u64,

    /// Frame on which "Start Spring" is clicked
    #[arg(long, default_value_t = 0)]
    start_at: u64,

    /// Frame on which "Reset" is clicked
    #[arg(long)]
    reset_at: Option<u64>,

    /// Print every frame's draw list as a JSON line
    #[arg(long)]
    dump: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_settings: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Spring View (headless) starting...");

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if args.print_settings {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let mut app = App::new(settings);
    let mut list = DrawList::new();

    for frame in 0..args.frames {
        let mut input = FrameInput::with_camera(app.camera);
        input.panel.start_clicked = frame == args.start_at;
        input.panel.reset_clicked = args.reset_at == Some(frame);

        list.clear();
        let outcome = app.frame(&input, &mut list);

        if args.dump {
            println!("{}", serde_json::to_string(&list.commands)?);
        }
        if outcome == FrameOutcome::Exit {
            break;
        }
    }

    let ball = &app.sim.ball;
    log::info!(
        "Finished {} frames ({} steps): pos={:?} vel={:?}",
        app.frame_count(),
        app.sim.time_ticks,
        ball.position,
        ball.velocity
    );
    if !args.dump {
        println!(
            "frames={} steps={} position=({:.4}, {:.4}, {:.4}) velocity=({:.4}, {:.4}, {:.4})",
            app.frame_count(),
            app.sim.time_ticks,
            ball.position.x,
            ball.position.y,
            ball.position.z,
            ball.velocity.x,
            ball.velocity.y,
            ball.velocity.z
        );
    }
    Ok(())
}
