//! Interactive form: key handling and the event loop.
//!
//! Focus ring: every form field in schema order, then the Save button.
//! Leaving a field blurs it in the engine (touch + validate); announcements
//! coming back from the engine are shown in the status line.

use color_eyre::Result;
use contact_form::{view::announcements, ContactForm, Effect, Intent, Submission};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{render, tui};

/// Where keyboard focus sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    SaveButton,
}

/// Why the loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Saved(Submission),
}

pub struct App {
    form: ContactForm,
    focus: Focus,
    input: Input,
    last_announcement: Option<String>,
}

impl App {
    pub fn new(mut form: ContactForm) -> Self {
        let mut input = Input::default();
        if let Some(first) = form.schema().fields().first() {
            let key = first.key.clone();
            form.dispatch(Intent::Focus(key));
        }
        if let Some(value) = form.state().field(0).map(|f| f.value.clone()) {
            input = input.with_value(value);
        }
        let focus = if form.schema().field_count() > 0 {
            Focus::Field(0)
        } else {
            Focus::SaveButton
        };
        Self {
            form,
            focus,
            input,
            last_announcement: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn last_announcement(&self) -> Option<&str> {
        self.last_announcement.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
        match key.code {
            KeyCode::Esc => return Some(Exit::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Exit::Quit)
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.submit()
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => self.edit(key),
        }
        None
    }

    fn field_count(&self) -> usize {
        self.form.schema().field_count()
    }

    fn field_key(&self, index: usize) -> Option<String> {
        self.form.schema().fields().get(index).map(|f| f.key.clone())
    }

    fn focus_next(&mut self) {
        let target = match self.focus {
            Focus::Field(i) if i + 1 < self.field_count() => Focus::Field(i + 1),
            Focus::Field(_) => Focus::SaveButton,
            Focus::SaveButton if self.field_count() > 0 => Focus::Field(0),
            Focus::SaveButton => Focus::SaveButton,
        };
        self.move_focus(target);
    }

    fn focus_prev(&mut self) {
        let count = self.field_count();
        let target = match self.focus {
            Focus::Field(0) => Focus::SaveButton,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::SaveButton if count > 0 => Focus::Field(count - 1),
            Focus::SaveButton => Focus::SaveButton,
        };
        self.move_focus(target);
    }

    fn move_focus(&mut self, target: Focus) {
        if target == self.focus {
            return;
        }
        let effects = match target {
            Focus::Field(index) => match self.field_key(index) {
                Some(key) => self.form.dispatch(Intent::Focus(key)),
                None => return,
            },
            Focus::SaveButton => self.form.dispatch(Intent::Blur),
        };
        self.focus = target;
        self.input = match target {
            Focus::Field(index) => {
                let value = self
                    .form
                    .state()
                    .field(index)
                    .map(|f| f.value.clone())
                    .unwrap_or_default();
                Input::default().with_value(value)
            }
            Focus::SaveButton => Input::default(),
        };
        self.apply(&effects);
    }

    fn edit(&mut self, key: KeyEvent) {
        let Focus::Field(index) = self.focus else {
            return;
        };
        let Some(field_key) = self.field_key(index) else {
            return;
        };
        let changed = self
            .input
            .handle_event(&Event::Key(key))
            .is_some_and(|state| state.value);
        if changed {
            let effects = self.form.dispatch(Intent::Input {
                key: field_key,
                value: self.input.value().to_string(),
            });
            self.apply(&effects);
        }
    }

    fn submit(&mut self) -> Option<Exit> {
        let effects = self.form.dispatch(Intent::Submit);
        self.apply(&effects);
        effects.into_iter().find_map(|effect| match effect {
            Effect::Save(submission) => Some(Exit::Saved(submission)),
            Effect::Announce(_) => None,
        })
    }

    fn apply(&mut self, effects: &[Effect]) {
        for announcement in announcements(effects) {
            debug!(%announcement, "announce");
            self.last_announcement = Some(announcement.message);
        }
    }
}

/// Run the interactive form until the user quits or saves.
pub fn run(form: ContactForm) -> Result<Option<Submission>> {
    let mut terminal = tui::init()?;
    let result = event_loop(&mut terminal, App::new(form));
    tui::restore()?;
    result
}

fn event_loop(terminal: &mut tui::Terminal, mut app: App) -> Result<Option<Submission>> {
    loop {
        terminal.draw(|f| render::draw(f, &app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.handle_key(key) {
            Some(Exit::Quit) => {
                info!("form closed without saving");
                return Ok(None);
            }
            Some(Exit::Saved(submission)) => {
                info!(submission = %submission.to_json(), "form saved");
                return Ok(Some(submission));
            }
            None => {}
        }
    }
}
