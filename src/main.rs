use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use skycast_core::{AppError, Config};
use skycast_ui::{bridge, render, QueryController};

const QUIT_COMMAND: &str = ":q";

enum Input {
    Submit(String),
    Quit,
}

/// Reads stdin on its own thread; each line is one submitted search.
fn spawn_input_reader() -> Result<mpsc::Receiver<Input>> {
    let (tx, rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("skycast-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let input = match line {
                    Ok(l) if l.trim() == QUIT_COMMAND => Input::Quit,
                    Ok(l) => Input::Submit(l),
                    Err(e) => {
                        tracing::warn!("Failed to read input: {}", e);
                        Input::Quit
                    }
                };
                let quit = matches!(input, Input::Quit);
                if tx.send(input).is_err() || quit {
                    return;
                }
            }
            let _ = tx.send(Input::Quit);
        })
        .context("Failed to start input thread")?;
    Ok(rx)
}

fn main() -> Result<()> {
    skycast_core::init()?;

    let (config, _warnings) = match Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            let app_error = AppError::from(e);
            tracing::error!("{}", app_error);
            eprintln!("{}", app_error.user_message());
            return Err(app_error.into());
        }
    };
    tracing::info!("Config directory: {}", config.config_dir.display());

    let runtime = bridge::init_runtime().context("Failed to create tokio runtime")?;
    let mut controller = QueryController::from_config(&config, Some(runtime))?;
    let mut updates = controller.subscribe();

    println!("Skycast - current weather for any city ({} to quit)", QUIT_COMMAND);

    controller.start();
    let input = spawn_input_reader()?;
    let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);

    loop {
        match input.try_recv() {
            Ok(Input::Submit(city)) => {
                controller.submit_location_query(&city);
            }
            Ok(Input::Quit) | Err(mpsc::TryRecvError::Disconnected) => break,
            Err(mpsc::TryRecvError::Empty) => {}
        }

        controller.poll_channel();

        if updates.has_changed().unwrap_or(false) {
            let state = updates.borrow_and_update().clone();
            print!("\n{}", render(&state, &config.ui.placeholder));
            std::io::stdout().flush().context("Failed to write to stdout")?;
        }

        std::thread::sleep(poll_interval);
    }

    tracing::info!("Skycast shutting down");
    Ok(())
}
