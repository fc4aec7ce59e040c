//! # UI Module
//!
//! Terminal front end: the [`App`] owns all state and turns key events
//! into command calls; [`render`] draws the current state.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐    KeyEvent     ┌──────────────┐    commands::*         │
//! │   │ crossterm│───────────────►│ App::handle_ │───────────────────┐     │
//! │   │  read()  │                 │    key()     │                   │     │
//! │   └──────────┘                 └──────────────┘                   ▼     │
//! │        ▲                                                   SessionState │
//! │        │                       ┌──────────────┐                   │     │
//! │        └───────────────────────│ render::draw │◄──────────────────┘     │
//! │                                └──────────────┘   get_*_summary()       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Bindings
//! | Key                  | Action                                           |
//! |----------------------|--------------------------------------------------|
//! | `Tab` / `Shift-Tab`  | toggle mode                                      |
//! | `F1` / `F2`          | per-port mode / device mode                      |
//! | `1` / `2`            | same as `F1` / `F2`, per-port mode only          |
//! | `↑` / `↓`            | move the cursor                                  |
//! | `←` / `→`            | cycle switch or port class, or step a count      |
//! | `Enter`              | from the switch row to the first port            |
//! | digits `-` `Bksp`    | edit the count under the cursor (device mode)    |
//! | `r`                  | reset the session                                |
//! | `q` `Esc` `Ctrl-C`   | quit                                             |

pub mod render;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use poe_core::{CalculatorMode, PoeClass};
use tracing::debug;

use crate::commands::{device, mode, port, session, switch};
use crate::error::{ApiError, ErrorCode};
use crate::state::{ConfigState, SessionState};

/// Longest text accepted in a count field.
pub const MAX_COUNT_INPUT_LEN: usize = 6;

/// Message shown when a port key is pressed before a switch is chosen.
pub const CHOOSE_SWITCH_FIRST: &str = "Choose a switch first";

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

/// The terminal application.
#[derive(Debug)]
pub struct App {
    session: SessionState,
    config: ConfigState,
    /// Row in per-port mode: 0 is the switch selector, `n` is port `n`.
    port_cursor: usize,
    /// Row in device mode, indexing [`PoeClass::ALL`].
    device_cursor: usize,
    /// Raw text of each count field, indexed like [`PoeClass::ALL`].
    count_inputs: [String; 8],
    status: Option<String>,
}

impl App {
    pub fn new(config: ConfigState) -> Self {
        App {
            session: SessionState::new(),
            config,
            port_cursor: 0,
            device_cursor: 0,
            count_inputs: Default::default(),
            status: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn mode(&self) -> CalculatorMode {
        self.session.with_session(|s| s.mode())
    }

    pub fn port_cursor(&self) -> usize {
        self.port_cursor
    }

    pub fn device_cursor(&self) -> usize {
        self.device_cursor
    }

    /// Text currently typed in a class's count field.
    pub fn count_input(&self, class: PoeClass) -> &str {
        &self.count_inputs[class.index()]
    }

    /// Last error, cleared by the next successful key.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                mode::toggle_mode(&mut self.session);
                Ok(())
            }
            KeyCode::F(1) => self.activate(CalculatorMode::ByPort),
            KeyCode::F(2) => self.activate(CalculatorMode::ByDevice),
            KeyCode::Char('r') => {
                self.reset();
                Ok(())
            }
            code => match self.mode() {
                CalculatorMode::ByPort => self.handle_port_key(code),
                CalculatorMode::ByDevice => self.handle_device_key(code),
            },
        };

        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                debug!(error = %err, "Key rejected");
                self.status = Some(err.message);
            }
        }
        KeyOutcome::Continue
    }

    fn activate(&mut self, target: CalculatorMode) -> Result<(), ApiError> {
        mode::set_mode(&mut self.session, target);
        Ok(())
    }

    fn reset(&mut self) {
        session::reset_session(&mut self.session, &self.config);
        self.port_cursor = 0;
        self.device_cursor = 0;
        self.count_inputs = Default::default();
    }

    // -------------------------------------------------------------------------
    // Per-port mode
    // -------------------------------------------------------------------------

    fn port_count(&self) -> usize {
        self.session
            .with_session(|s| s.selected_switch().map_or(0, |sw| sw.ports as usize))
    }

    fn handle_port_key(&mut self, code: KeyCode) -> Result<(), ApiError> {
        match code {
            KeyCode::Char('1') => self.activate(CalculatorMode::ByPort),
            KeyCode::Char('2') => self.activate(CalculatorMode::ByDevice),
            KeyCode::Up => {
                self.port_cursor = self.port_cursor.saturating_sub(1);
                Ok(())
            }
            KeyCode::Down => {
                self.port_cursor = (self.port_cursor + 1).min(self.port_count());
                Ok(())
            }
            KeyCode::Enter if self.port_cursor == 0 => {
                if self.port_count() == 0 {
                    return Err(ApiError::new(ErrorCode::NoSwitchSelected, CHOOSE_SWITCH_FIRST));
                }
                self.port_cursor = 1;
                Ok(())
            }
            KeyCode::Left => self.cycle_port_row(Step::Back),
            KeyCode::Right => self.cycle_port_row(Step::Forward),
            _ => Ok(()),
        }
    }

    fn cycle_port_row(&mut self, step: Step) -> Result<(), ApiError> {
        if self.port_cursor == 0 {
            let options: Vec<Option<&'static str>> = std::iter::once(None)
                .chain(switch::list_switches().into_iter().map(|sw| Some(sw.name)))
                .collect();
            let current = self
                .session
                .with_session(|s| s.selected_switch().map(|sw| sw.name));
            let next = cycle(&options, current, step);
            switch::select_switch(&mut self.session, &self.config, next)?;
            return Ok(());
        }

        // Cursor rows map 1:1 to port numbers; the switch has at most u16 ports.
        let port = u16::try_from(self.port_cursor)
            .map_err(|_| ApiError::validation("Port number too large"))?;
        let options: Vec<Option<PoeClass>> = std::iter::once(None)
            .chain(device::list_poe_classes().into_iter().map(|c| Some(c.class)))
            .collect();
        let current = self.session.with_session(|s| s.port_class(port));
        let next = cycle(&options, current, step);
        port::assign_port(&mut self.session, &self.config, port, next)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Device mode
    // -------------------------------------------------------------------------

    fn handle_device_key(&mut self, code: KeyCode) -> Result<(), ApiError> {
        let class = PoeClass::ALL[self.device_cursor];
        match code {
            KeyCode::Up => self.device_cursor = self.device_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.device_cursor = (self.device_cursor + 1).min(PoeClass::ALL.len() - 1)
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let input = &mut self.count_inputs[class.index()];
                if input.len() < MAX_COUNT_INPUT_LEN {
                    input.push(c);
                }
                self.store_count(class);
            }
            KeyCode::Backspace => {
                self.count_inputs[class.index()].pop();
                self.store_count(class);
            }
            KeyCode::Left => self.step_count(class, Step::Back),
            KeyCode::Right => self.step_count(class, Step::Forward),
            _ => {}
        }
        Ok(())
    }

    fn store_count(&mut self, class: PoeClass) {
        let raw = &self.count_inputs[class.index()];
        device::set_device_count(&mut self.session, &self.config, class, raw);
    }

    fn step_count(&mut self, class: PoeClass, step: Step) {
        let current = self.session.with_session(|s| s.device_count(class));
        let next = match step {
            Step::Back => current.saturating_sub(1),
            Step::Forward => current.saturating_add(1),
        };
        let stored = device::set_device_count(
            &mut self.session,
            &self.config,
            class,
            &next.to_string(),
        );
        let count = stored.rows[class.index()].count;
        self.count_inputs[class.index()] = if count == 0 {
            String::new()
        } else {
            count.to_string()
        };
    }
}

/// Next entry after `current` in `options`, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(options: &[Option<T>], current: Option<T>, step: Step) -> Option<T> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = match step {
        Step::Forward => (index + 1) % len,
        Step::Back => (index + len - 1) % len,
    };
    options[next]
}
