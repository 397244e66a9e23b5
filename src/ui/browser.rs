//! Main browser screen: location bar, category sidebar, search box, and the
//! component list or detail page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::presentation::{CatalogView, DetailView, SidebarEntry};
use crate::ui::keybindings::{footer_hint, ShortcutContext};
use crate::ui::panels::{
    render_detail, render_location_bar, render_missing_detail, ComponentsPanel, SidebarPanel,
};
use crate::ui::search::SearchBox;

/// Which panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Search,
    Components,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Search,
            Focus::Search => Focus::Components,
            Focus::Components => Focus::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Components,
            Focus::Search => Focus::Sidebar,
            Focus::Components => Focus::Search,
        }
    }
}

/// What the main pane shows
pub enum MainPane<'a> {
    Listing,
    Detail(DetailView<'a>),
    MissingDetail { category: String, component: String },
}

/// Everything one frame needs, computed fresh from the controller
pub struct Screen<'a> {
    pub view: CatalogView<'a>,
    pub sidebar: Vec<SidebarEntry>,
    pub main: MainPane<'a>,
    pub location: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl Screen<'_> {
    pub fn context(&self, focus: Focus) -> ShortcutContext {
        match (&self.main, focus) {
            (MainPane::Listing, Focus::Search) => ShortcutContext::Search,
            (MainPane::Listing, _) => ShortcutContext::Browse,
            _ => ShortcutContext::Detail,
        }
    }
}

pub struct Browser {
    pub focus: Focus,
    pub sidebar: SidebarPanel,
    pub components: ComponentsPanel,
    pub search: SearchBox,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    pub fn new() -> Self {
        Self {
            focus: Focus::Components,
            sidebar: SidebarPanel::new(),
            components: ComponentsPanel::new(),
            search: SearchBox::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, screen: &Screen<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_location_bar(
            frame,
            rows[0],
            &screen.location,
            screen.can_go_back,
            screen.can_go_forward,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(30)])
            .split(rows[1]);

        self.sidebar.render(
            frame,
            columns[0],
            &screen.sidebar,
            self.focus == Focus::Sidebar,
        );
        self.render_main(frame, columns[1], screen);
        render_footer(frame, rows[2], screen.context(self.focus));
    }

    fn render_main(&mut self, frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
        match &screen.main {
            MainPane::Listing => {
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(3),
                        Constraint::Min(3),
                    ])
                    .split(area);

                let subtitle = Paragraph::new(Line::from(Span::styled(
                    screen.view.subtitle.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
                frame.render_widget(subtitle, parts[0]);

                self.search
                    .render(frame, parts[1], self.focus == Focus::Search);
                self.components.render(
                    frame,
                    parts[2],
                    &screen.view,
                    self.focus == Focus::Components,
                );
            }
            MainPane::Detail(view) => render_detail(frame, area, view),
            MainPane::MissingDetail {
                category,
                component,
            } => render_missing_detail(frame, area, category, component),
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, context: ShortcutContext) {
    let footer = Paragraph::new(Line::from(Span::styled(
        footer_hint(context),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
