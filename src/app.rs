use std::io;
use std::path::PathBuf;
use std::thread;

use crossterm::event;
use thiserror::Error;
use tracing::error;

use crate::action::AppAction;
use crate::action_handler::ActionHandler;
use crate::config::Config;
use crate::input::InputHandler;
use crate::session::Session;
use crate::ui::{Renderer, TerminalSession, TerminalSessionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal session failed")]
    Terminal(#[from] TerminalSessionError),
    #[error("event bus disconnected")]
    EventBusDisconnected,
}

pub struct App {
    session: Session,
    renderer: Renderer,
    action_handler: ActionHandler,
    event_tx: flume::Sender<AppAction>,
    event_rx: flume::Receiver<AppAction>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::bounded(1024);
        Self {
            session: Session::new(config),
            renderer: Renderer::new(),
            action_handler: ActionHandler,
            event_tx,
            event_rx,
        }
    }

    /// Loads each file into its own buffer; the first one is shown in the
    /// initial window.
    pub fn open_files(&mut self, paths: Vec<PathBuf>) -> io::Result<()> {
        for (index, path) in paths.into_iter().enumerate() {
            let text = std::fs::read_to_string(&path)?;
            let buffer_id = self.session.workspace.create_buffer(Some(path), text);
            if index == 0 {
                self.session.workspace.bind_buffer_to_active_window(buffer_id);
            }
        }
        Ok(())
    }

    pub fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalSession::enter("ribbon")?;
        self.start_input_pump();

        loop {
            terminal.draw(|frame| self.renderer.render(frame, &self.session))?;

            let action = self.event_rx.recv().map_err(|err| {
                error!("event bus disconnected while waiting for next action: {}", err);
                AppError::EventBusDisconnected
            })?;
            if self
                .action_handler
                .apply(&mut self.session, action)
                .is_break()
            {
                break;
            }
        }
        Ok(())
    }

    fn start_input_pump(&self) {
        let event_tx = self.event_tx.clone();
        let input_handler = InputHandler::new();
        thread::spawn(move || {
            loop {
                let evt = match event::read() {
                    Ok(evt) => evt,
                    Err(err) => {
                        error!("input pump stopped: failed to read terminal event: {}", err);
                        break;
                    }
                };
                let Some(action) = input_handler.action(&evt) else {
                    continue;
                };
                if let Err(err) = event_tx.send(action) {
                    error!("input pump stopped: failed to send action to event bus: {}", err);
                    break;
                }
            }
        });
    }
}
