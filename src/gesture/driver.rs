//! Async driver for [`GestureController`].
//!
//! Commands arrive on an mpsc channel and the live [`Selection`] is published
//! on a watch channel whenever it changes. While a touch hold is pending the
//! loop selects between the hold deadline and the next command; whichever
//! arrives first wins and the other arm is dropped.

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time;

use super::{GestureController, InputEvent, Selection};
use crate::models::geometry::ContainerSize;

const COMMAND_BUFFER: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureCommand {
    Input(InputEvent),
    Resize(ContainerSize),
    Cancel,
}

/// Host-side handle to a running driver.
#[derive(Clone, Debug)]
pub struct GestureHandle {
    commands: mpsc::Sender<GestureCommand>,
    selection: watch::Receiver<Selection>,
}

impl GestureHandle {
    pub async fn input(&self, event: InputEvent) -> Result<()> {
        self.send(GestureCommand::Input(event)).await
    }

    pub async fn resize(&self, container: ContainerSize) -> Result<()> {
        self.send(GestureCommand::Resize(container)).await
    }

    /// Release a finished (or abandoned) gesture.
    pub async fn cancel(&self) -> Result<()> {
        self.send(GestureCommand::Cancel).await
    }

    pub fn selection(&self) -> watch::Receiver<Selection> {
        self.selection.clone()
    }

    pub fn current(&self) -> Selection {
        *self.selection.borrow()
    }

    async fn send(&self, command: GestureCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| anyhow!("Gesture driver has stopped"))
    }
}

/// Spawn the driver on the current tokio runtime.
///
/// The task ends once every [`GestureHandle`] has been dropped.
pub fn spawn(controller: GestureController) -> (GestureHandle, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (selection_tx, selection_rx) = watch::channel(controller.selection());
    let task = tokio::spawn(run(controller, command_rx, selection_tx));

    (
        GestureHandle {
            commands: command_tx,
            selection: selection_rx,
        },
        task,
    )
}

pub async fn run(
    mut controller: GestureController,
    mut commands: mpsc::Receiver<GestureCommand>,
    selection: watch::Sender<Selection>,
) {
    loop {
        let command = match controller.pending_hold() {
            Some((token, deadline)) => {
                tokio::select! {
                    biased;
                    _ = time::sleep_until(time::Instant::from_std(deadline)) => {
                        controller.fire_touch_hold(token, deadline);
                        publish(&selection, &controller);
                        continue;
                    }
                    command = commands.recv() => command,
                }
            }
            None => commands.recv().await,
        };

        let Some(command) = command else {
            log::debug!("Gesture command channel closed; stopping driver");
            break;
        };

        let now = time::Instant::now().into_std();
        match command {
            GestureCommand::Input(event) => {
                controller.handle(event, now);
            }
            GestureCommand::Resize(container) => controller.resize(container),
            GestureCommand::Cancel => controller.cancel(),
        }
        publish(&selection, &controller);
    }
}

fn publish(selection: &watch::Sender<Selection>, controller: &GestureController) {
    let next = controller.selection();
    selection.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}
