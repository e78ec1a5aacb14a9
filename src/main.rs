// Weekly Scheduler replay
// Feeds recorded pointer/touch events through the drag engine and prints the schedule
//
// Usage: weekly-scheduler [config.toml] < events.jsonl
// Each line: {"delay_ms": 16, "input": {"kind": "mouse_move", "at": {"x": 10, "y": 20}}}
//        or: {"resize": {"scroll_width": 700, "scroll_height": 960}}

use std::io::{self, Read};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use weekly_scheduler::gesture::{driver, GestureController, InputEvent};
use weekly_scheduler::models::geometry::ContainerSize;
use weekly_scheduler::services::grid::Grid;
use weekly_scheduler::services::mapping::{mapper_for, MappingOptions};
use weekly_scheduler::services::schedule::Schedule;
use weekly_scheduler::services::settings::ConfigService;
use weekly_scheduler::utils::date::format::{text_for_range, text_for_span};

const DEFAULT_CONTAINER: ContainerSize = ContainerSize {
    scroll_width: 700.0,
    scroll_height: 960.0,
};

#[derive(Debug, Deserialize)]
struct ReplayLine {
    #[serde(default)]
    delay_ms: u64,
    #[serde(default)]
    resize: Option<ContainerSize>,
    #[serde(default)]
    input: Option<InputEvent>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weekly Scheduler replay");

    let config_service = match std::env::args().nth(1) {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location()?,
    };
    let config = config_service.load()?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read events from stdin")?;

    let today = chrono::Local::now().date_naive();
    let mapper = mapper_for(config.policy, MappingOptions::from_config(&config, today));
    let mut grid = Grid::for_container(
        DEFAULT_CONTAINER,
        config.num_horizontal_cells,
        config.num_vertical_cells,
    )?;
    let controller = GestureController::from_config(&config, DEFAULT_CONTAINER);
    let (gestures, task) = driver::spawn(controller);
    let mut schedule = Schedule::default();

    for (number, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let replay: ReplayLine = serde_json::from_str(line)
            .with_context(|| format!("Invalid event on line {}", number + 1))?;

        if replay.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(replay.delay_ms)).await;
        }

        if let Some(size) = replay.resize {
            grid = Grid::for_container(
                size,
                config.num_horizontal_cells,
                config.num_vertical_cells,
            )?;
            gestures.resize(size).await?;
        }

        if let Some(event) = replay.input {
            gestures.input(event).await?;
        }
        tokio::task::yield_now().await;

        let selection = gestures.current();
        let Some(rect) = selection.rect else {
            continue;
        };
        let pending = mapper.map_cell(&grid.cell_from_rect(&rect));

        if selection.has_finished_dragging {
            schedule.commit(&pending);
            gestures.cancel().await?;
        } else if selection.is_dragging {
            for range in &pending {
                log::debug!("Pending {}", text_for_span(range.value, None, None));
            }
        }
    }

    drop(gestures);
    task.await.context("Gesture driver panicked")?;

    for range in schedule.ranges() {
        println!("{}", text_for_range(range, None, None));
    }

    Ok(())
}
