// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Interactive single-page view over the application state machine: a
//! login form while unauthenticated, the event list plus draft form
//! otherwise. Every user gesture triggers at most one store operation,
//! awaited before the next input is read, so duplicate submits cannot
//! race a pending request.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use evman_client::StoreError;
use ratatui::crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::controller::{Controller, Mode};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::store::{EventForm, LoginForm};

/// Runs the interactive view until the user quits.
pub async fn run(controller: &mut Controller) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = event_loop(controller, &mut terminal).await;
    ratatui::restore();
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Identifier,
    Password,
    List,
    Name,
    Description,
}

struct Notice {
    text: String,
    error: bool,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

async fn event_loop(
    controller: &mut Controller,
    terminal: &mut ratatui::DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    let mut dispatcher = Dispatcher::new();
    let login = Rc::new(RefCell::new(LoginForm::default()));
    let form = Rc::new(RefCell::new(EventForm::default()));
    LoginForm::register_to(login.clone(), &mut dispatcher);
    EventForm::register_to(form.clone(), &mut dispatcher);

    let mut focus = if controller.is_authenticated() {
        Focus::List
    } else {
        Focus::Identifier
    };
    let mut selected: usize = 0;
    let mut notice: Option<Notice> = None;

    // Populate the list once at startup when a session was resumed.
    if controller.is_authenticated()
        && let Err(e) = controller.refresh().await
    {
        notice = Some(Notice::error(notice_for(e.as_ref())));
    }

    loop {
        terminal.draw(|frame| {
            draw(
                frame,
                controller,
                &login.borrow(),
                &form.borrow(),
                focus,
                selected,
                notice.as_ref(),
            );
        })?;

        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(());
        }

        if controller.mode() == Mode::Unauthenticated {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                    focus = if focus == Focus::Identifier {
                        Focus::Password
                    } else {
                        Focus::Identifier
                    };
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(&Action::SubmitChanges);
                    if std::mem::take(&mut login.borrow_mut().submit) {
                        let (identifier, password) = {
                            let f = login.borrow();
                            (f.identifier.clone(), f.password.clone())
                        };
                        match controller.login(&identifier, &password).await {
                            Ok(()) => {
                                login.borrow_mut().clear();
                                notice = Some(Notice::info("Logged in successfully"));
                                focus = Focus::List;
                                if let Err(e) = controller.refresh().await {
                                    notice = Some(Notice::error(notice_for(e.as_ref())));
                                }
                                selected = 0;
                            }
                            Err(e) => notice = Some(Notice::error(notice_for(e.as_ref()))),
                        }
                    }
                }
                KeyCode::Backspace => {
                    let action = match focus {
                        Focus::Password => Action::UpdatePassword(popped(&login.borrow().password)),
                        _ => Action::UpdateIdentifier(popped(&login.borrow().identifier)),
                    };
                    dispatcher.dispatch(&action);
                }
                KeyCode::Char(c) => {
                    let action = match focus {
                        Focus::Password => {
                            Action::UpdatePassword(pushed(&login.borrow().password, c))
                        }
                        _ => Action::UpdateIdentifier(pushed(&login.borrow().identifier, c)),
                    };
                    dispatcher.dispatch(&action);
                }
                _ => {}
            }
            continue;
        }

        // Authenticated: list navigation or the draft form.
        match focus {
            Focus::List => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => selected = selected.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    selected = (selected + 1).min(controller.events().len().saturating_sub(1));
                }
                KeyCode::Char('r') => match controller.refresh().await {
                    Ok(()) => {
                        selected = selected.min(controller.events().len().saturating_sub(1));
                        notice = None;
                    }
                    Err(e) => notice = Some(Notice::error(notice_for(e.as_ref()))),
                },
                KeyCode::Char('n') => {
                    controller.cancel_edit();
                    form.borrow_mut().clear();
                    focus = Focus::Name;
                }
                KeyCode::Char('e') => {
                    if let Some(event) = controller.events().get(selected) {
                        let id = event.id;
                        match controller.begin_edit(id) {
                            Ok(()) => {
                                form.borrow_mut().load(controller.cursor());
                                focus = Focus::Name;
                            }
                            Err(e) => notice = Some(Notice::error(e.to_string())),
                        }
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(event) = controller.events().get(selected) {
                        let id = event.id;
                        match controller.delete(id).await {
                            Ok(()) => {
                                selected =
                                    selected.min(controller.events().len().saturating_sub(1));
                                notice = Some(Notice::info("Event deleted"));
                            }
                            Err(e) => notice = Some(Notice::error(notice_for(e.as_ref()))),
                        }
                    }
                }
                KeyCode::Char('L') => {
                    controller.logout();
                    login.borrow_mut().clear();
                    form.borrow_mut().clear();
                    focus = Focus::Identifier;
                    notice = Some(Notice::info("Logged out successfully"));
                }
                _ => {}
            },
            Focus::Name | Focus::Description => match key.code {
                KeyCode::Esc => {
                    controller.cancel_edit();
                    form.borrow_mut().clear();
                    focus = Focus::List;
                }
                KeyCode::Tab => {
                    focus = if focus == Focus::Name {
                        Focus::Description
                    } else {
                        Focus::Name
                    };
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(&Action::SubmitChanges);
                    if std::mem::take(&mut form.borrow_mut().submit) {
                        let editing = matches!(controller.mode(), Mode::Editing(_));
                        {
                            let f = form.borrow();
                            controller.set_name(f.name.clone());
                            controller.set_description(f.description.clone());
                        }
                        match controller.submit().await {
                            Ok(_) => {
                                form.borrow_mut().clear();
                                focus = Focus::List;
                                notice = Some(Notice::info(if editing {
                                    "Event updated"
                                } else {
                                    "Event created"
                                }));
                            }
                            Err(e) => notice = Some(Notice::error(notice_for(e.as_ref()))),
                        }
                    }
                }
                KeyCode::Backspace => {
                    let action = match focus {
                        Focus::Description => {
                            Action::UpdateDescription(popped(&form.borrow().description))
                        }
                        _ => Action::UpdateName(popped(&form.borrow().name)),
                    };
                    dispatcher.dispatch(&action);
                }
                KeyCode::Char(c) => {
                    let action = match focus {
                        Focus::Description => {
                            Action::UpdateDescription(pushed(&form.borrow().description, c))
                        }
                        _ => Action::UpdateName(pushed(&form.borrow().name, c)),
                    };
                    dispatcher.dispatch(&action);
                }
                _ => {}
            },
            Focus::Identifier | Focus::Password => {
                // Stale focus after a mode change; snap back to the list.
                focus = Focus::List;
            }
        }
    }
}

fn pushed(value: &str, c: char) -> String {
    let mut value = value.to_string();
    value.push(c);
    value
}

fn popped(value: &str) -> String {
    let mut value = value.to_string();
    value.pop();
    value
}

/// Maps operation failures to the transient notices the page shows.
fn notice_for(e: &(dyn Error + 'static)) -> String {
    match e.downcast_ref::<StoreError>() {
        Some(err) if err.is_auth() => "Invalid credentials".to_string(),
        Some(StoreError::Http(_)) => format!("Connection error: {e}"),
        _ => e.to_string(),
    }
}

fn draw(
    frame: &mut Frame,
    controller: &Controller,
    login: &LoginForm,
    form: &EventForm,
    focus: Focus,
    selected: usize,
    notice: Option<&Notice>,
) {
    if controller.mode() == Mode::Unauthenticated {
        draw_login(frame, login, focus, notice);
    } else {
        draw_browse(frame, controller, form, focus, selected, notice);
    }
}

fn draw_login(frame: &mut Frame, login: &LoginForm, focus: Focus, notice: Option<&Notice>) {
    let [title, identifier, password, status, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("Event Management").centered().bold(),
        title,
    );
    frame.render_widget(
        field("Username", &login.identifier, focus == Focus::Identifier),
        identifier,
    );
    let masked = "*".repeat(login.password.chars().count());
    frame.render_widget(
        field("Password", &masked, focus == Focus::Password),
        password,
    );
    draw_notice(frame, status, notice);
    frame.render_widget(
        Paragraph::new("Tab switch field · Enter login · Esc quit").dim(),
        hint,
    );
}

fn draw_browse(
    frame: &mut Frame,
    controller: &Controller,
    form: &EventForm,
    focus: Focus,
    selected: usize,
    notice: Option<&Notice>,
) {
    let [title, list_area, name, description, status, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("Event Management").centered().bold(),
        title,
    );

    let items: Vec<ListItem> = controller
        .events()
        .iter()
        .map(|e| ListItem::new(format!("#{}  {}  {}", e.id, e.name, e.description)))
        .collect();
    let mut state = ListState::default();
    if !controller.events().is_empty() {
        state.select(Some(selected));
    }
    let list = List::new(items)
        .block(Block::bordered().title("Events"))
        .highlight_style(Style::new().reversed())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, &mut state);

    let form_label = match controller.mode() {
        Mode::Editing(id) => format!("Update Event #{id}"),
        _ => "Create Event".to_string(),
    };
    frame.render_widget(
        field(&format!("{form_label}: Name"), &form.name, focus == Focus::Name),
        name,
    );
    frame.render_widget(
        field("Description", &form.description, focus == Focus::Description),
        description,
    );

    draw_notice(frame, status, notice);
    frame.render_widget(
        Paragraph::new(
            "n new · e edit · d delete · r refresh · L logout · Tab/Enter in form · q quit",
        )
        .dim(),
        hint,
    );
}

fn field<'a>(label: &str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let block = if focused {
        Block::bordered()
            .title(label.to_string())
            .border_style(Style::new().cyan())
    } else {
        Block::bordered().title(label.to_string())
    };
    Paragraph::new(value).block(block)
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    if let Some(notice) = notice {
        let style = if notice.error {
            Style::new().red()
        } else {
            Style::new().green()
        };
        frame.render_widget(Paragraph::new(notice.text.as_str()).style(style), area);
    }
}
