use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::button::GENERATE_LABEL;
use crate::tui::components::empty::EMPTY_LABEL;
use crate::tui::components::heading::HEADING_HEIGHT;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::loader::LOADER_HEIGHT;
use crate::tui::components::{Button, Empty, Heading, Loader, MessageList};

/// Below this width the button stacks under the input.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 60;
const BUTTON_MIN_WIDTH: u16 = 12;
const PAGE_PAD_H: u16 = 2;

/// Page regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub heading: Rect,
    pub input: Rect,
    pub button: Rect,
    pub body: Rect,
}

fn form_height(width: u16) -> u16 {
    if width >= WIDE_LAYOUT_MIN_WIDTH {
        INPUT_HEIGHT
    } else {
        INPUT_HEIGHT * 2
    }
}

/// Split the page: heading, form row (input + button), body.
pub fn page_layout(area: Rect) -> PageLayout {
    use Constraint::{Length, Min};

    let [page] = Layout::horizontal([Min(0)])
        .horizontal_margin(PAGE_PAD_H)
        .areas(area);

    let [heading, _gap, form, _gap2, body] = Layout::vertical([
        Length(HEADING_HEIGHT),
        Length(1),
        Length(form_height(page.width)),
        Length(1),
        Min(0),
    ])
    .areas(page);

    let (input, button) = if page.width >= WIDE_LAYOUT_MIN_WIDTH {
        // 9:1 split, button never narrower than its label
        let button_width = (page.width / 10).max(BUTTON_MIN_WIDTH);
        let [input, button] =
            Layout::horizontal([Min(0), Length(button_width)]).areas(form);
        (input, button)
    } else {
        let [input, button] =
            Layout::vertical([Length(INPUT_HEIGHT), Length(INPUT_HEIGHT)]).areas(form);
        (input, button)
    };

    PageLayout {
        heading,
        input,
        button,
        body,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = page_layout(frame.area());
    tui.button_area = layout.button;

    Heading::new(app.client.name(), &app.status_message).render(frame, layout.heading);

    tui.input_box.render(frame, layout.input);
    Button::new(GENERATE_LABEL, app.is_submitting).render(frame, layout.button);

    let mut body = layout.body;
    if app.is_submitting {
        let [loader_area, _gap, rest] = Layout::vertical([
            Constraint::Length(LOADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);
        Loader::new(spinner_frame).render(frame, loader_area);
        body = rest;
    }

    if app.shows_empty_state() {
        Empty::new(EMPTY_LABEL).render(frame, body);
        return;
    }

    MessageList::new(&mut tui.message_list, &app.conversation, &tui.user_initials)
        .render(frame, body);
}
