use std::{backtrace::Backtrace, panic, path::PathBuf, process::ExitCode, sync::Arc};

use chrono::Utc;
use clap::Parser;
use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, LogSpecBuilder, Logger, LoggerHandle, Naming,
};
use log::{debug, error, info, warn};
use masterror::{AppError, AppResult};
use tokio::runtime::{Builder, Handle};
use worldclock_core::{
    clock::ClockRegistry,
    config::get_config,
    platform::{FixedColorScheme, SystemColorScheme},
    session::Session,
    theme::ThemeState,
};
use worldclock_gui::{App, get_log_spec};
use worldclock_proto::{ports::preferences::ColorSchemeProbe, theme::ThemeMode};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,

    /// Print the clocks to stdout every second instead of opening a window
    #[arg(long, conflicts_with_all = ["once", "set_theme"])]
    stdout: bool,

    /// Print the clocks once and exit
    #[arg(long, conflicts_with = "set_theme")]
    once: bool,

    /// Persist the theme preference (`light` or `dark`) and exit
    #[arg(long, value_name = "MODE")]
    set_theme: Option<ThemeMode>,

    /// Treat the platform color scheme as dark
    #[arg(long)]
    prefer_dark: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .log_to_file(FileSpec::default().directory("/tmp/worldclock"))
    .rotate(
        Criterion::Age(Age::Day),
        Naming::Timestamps,
        Cleanup::KeepLogFiles(7),
    );
    let logger = if cfg!(debug_assertions) {
        logger.duplicate_to_stderr(Duplicate::All)
    } else {
        logger.duplicate_to_stderr(Duplicate::Warn)
    };
    let logger = match logger.start() {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            return ExitCode::FAILURE;
        }
    };
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::capture();
        error!("Panic: {info} \n {backtrace}");
    }));
    debug!("args: {args:?}");

    match run(args, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, logger: &LoggerHandle) -> AppResult<()> {
    let (config, config_path) = get_config(args.config_path.clone())?;
    debug!("Using config {config_path:?}");

    logger.set_new_spec(get_log_spec(&config.log_level));

    let color_scheme: Arc<dyn ColorSchemeProbe> = if args.prefer_dark {
        Arc::new(FixedColorScheme(true))
    } else {
        Arc::new(SystemColorScheme)
    };
    let session = Session::open(config, color_scheme);

    if let Some(theme) = args.set_theme {
        set_theme(session, theme)
    } else if args.once {
        print_once(session)
    } else if args.stdout {
        run_stdout(session)
    } else {
        run_gui(session)
    }
}

fn run_gui(session: Session) -> AppResult<()> {
    let session = Arc::new(session);
    let app_session = Arc::clone(&session);

    let result = iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .run_with(move || App::new(app_session));

    match Arc::try_unwrap(session) {
        Ok(session) => session.teardown(),
        Err(_) => warn!("Session still shared after the window closed")
    }

    result.map_err(|err| AppError::internal(format!("window loop failed: {err}")))
}

fn print_registry(clocks: &ClockRegistry) {
    for display in clocks.displays() {
        println!("{display}");
    }
    println!();
}

fn print_once(session: Session) -> AppResult<()> {
    print_registry(&ClockRegistry::with_reference_zones(Utc::now()));
    session.teardown();

    Ok(())
}

fn run_stdout(mut session: Session) -> AppResult<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::internal(format!("failed to start runtime: {err}")))?;

    runtime.block_on(async {
        let mut clocks = ClockRegistry::with_reference_zones(Utc::now());
        print_registry(&clocks);

        let mut ticks = session.spawn_ticker(&Handle::current());

        loop {
            tokio::select! {
                tick = ticks.recv() => match tick {
                    Some(now) => {
                        clocks.tick(now);
                        print_registry(&clocks);
                    }
                    None => break,
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }
    });

    session.teardown();

    Ok(())
}

fn set_theme(session: Session, theme: ThemeMode) -> AppResult<()> {
    let mut state = ThemeState::initialize(&session);

    state
        .set_theme(&session, theme.is_dark())
        .map_err(|err| AppError::internal(format!("failed to persist theme: {err}")))?;
    println!("theme: {}", state.mode());
    session.teardown();

    Ok(())
}
