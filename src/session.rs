use tracing::error;

use crate::config::Config;
use crate::state::{NavOutcome, PaneStrip, ReorderOutcome, StripError};
use crate::workspace::{BufferCycle, Workspace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: "press t to attach the pane strip".to_string(),
        }
    }
}

/// Everything one running instance owns: the terminal workspace, the pane
/// strip when attached, and the status line. Passed into every command.
pub struct Session {
    pub workspace: Workspace,
    pub strip: Option<PaneStrip<Workspace>>,
    pub status: StatusLine,
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            workspace: Workspace::new(),
            strip: None,
            status: StatusLine::default(),
            config,
        }
    }

    pub fn toggle_strip(&mut self) {
        match self.strip.take() {
            Some(strip) => {
                strip.detach(&mut self.workspace);
                self.status.message = "pane strip detached".to_string();
            }
            None => {
                self.strip = Some(PaneStrip::attach(&self.workspace));
                self.status.message = "pane strip attached".to_string();
            }
        }
    }

    pub fn open_pane(&mut self) {
        let max_visible = self.config.max_visible_panes;
        let message = match self.parts() {
            Ok((strip, workspace)) => {
                strip.open(workspace, max_visible);
                "new pane".to_string()
            }
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn go_left(&mut self) {
        let message = match self.parts() {
            Ok((strip, workspace)) => match strip.focus_left(workspace) {
                NavOutcome::Focused | NavOutcome::Scrolled => pane_position(strip, workspace),
                NavOutcome::AtEdge => "already at the first pane".to_string(),
            },
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn go_right(&mut self) {
        let message = match self.parts() {
            Ok((strip, workspace)) => match strip.focus_right(workspace) {
                NavOutcome::Focused | NavOutcome::Scrolled => pane_position(strip, workspace),
                NavOutcome::AtEdge => "already at the last pane".to_string(),
            },
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn move_pane_left(&mut self) {
        let message = match self.parts() {
            Ok((strip, workspace)) => match strip.move_left(workspace) {
                ReorderOutcome::Moved => "pane moved left".to_string(),
                ReorderOutcome::AtEdge => "already at the first pane".to_string(),
            },
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn move_pane_right(&mut self) {
        let message = match self.parts() {
            Ok((strip, workspace)) => match strip.move_right(workspace) {
                ReorderOutcome::Moved => "pane moved right".to_string(),
                ReorderOutcome::AtEdge => "already at the last pane".to_string(),
            },
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn reload_layout(&mut self) {
        let message = match self.parts() {
            Ok((strip, workspace)) => {
                strip.reload(workspace);
                "layout reloaded".to_string()
            }
            Err(err) => rejected(err),
        };
        self.status.message = message;
    }

    pub fn switch_buffer(&mut self, direction: BufferCycle) {
        self.workspace.cycle_active_buffer(direction);
        self.status.message = format!("buffer {}", self.workspace.active_buffer().name);
    }

    pub fn status_line(&self) -> String {
        let cursor = self.workspace.active_view().cursor;
        let position = self.strip.as_ref().and_then(|strip| {
            strip
                .active_pane_index(&self.workspace)
                .map(|index| format!("pane {}/{}", index + 1, strip.len()))
        });
        match position {
            Some(position) => format!(
                "{} | {} | {}:{}",
                self.status.message, position, cursor.row, cursor.col
            ),
            None => format!("{} | {}:{}", self.status.message, cursor.row, cursor.col),
        }
    }

    fn parts(&mut self) -> Result<(&mut PaneStrip<Workspace>, &mut Workspace), StripError> {
        match self.strip.as_mut() {
            Some(strip) => Ok((strip, &mut self.workspace)),
            None => Err(StripError::Inactive),
        }
    }
}

fn rejected(err: StripError) -> String {
    error!("strip command rejected: {}", err);
    err.to_string()
}

fn pane_position(strip: &PaneStrip<Workspace>, workspace: &Workspace) -> String {
    match strip.active_pane_index(workspace) {
        Some(index) => format!("pane {}/{}", index + 1, strip.len()),
        None => String::new(),
    }
}
