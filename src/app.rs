use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::navigation::{History, Location, Route};
use crate::presentation::{present, present_detail, sidebar};
use crate::selection::SelectionController;
use crate::ui::{install_panic_hook, Browser, Focus, HelpDialog, MainPane, Screen, TerminalGuard};

/// Terminal browser: one selection controller driven by a location history
pub struct App {
    config: Config,
    catalog: Arc<Catalog>,
    controller: SelectionController,
    history: History,
    browser: Browser,
    help_dialog: HelpDialog,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: Arc<Catalog>, start: Location) -> Self {
        let history = History::new(start);
        let mut controller = SelectionController::new(Arc::clone(&catalog));
        controller.mount_from(&history);

        let mut app = Self {
            config,
            catalog,
            controller,
            history,
            browser: Browser::new(),
            help_dialog: HelpDialog::new(),
            should_quit: false,
        };
        app.load_query_from_location();
        app.follow_active_category();
        app
    }

    /// Where the browser opens.
    ///
    /// An explicit `--component` wins over `ui.start_component`; with neither
    /// the location carries no parameter and the default category shows.
    pub fn start_location(
        config: &Config,
        component: Option<&str>,
        query: Option<&str>,
    ) -> Location {
        let query = query.unwrap_or_default();
        match component.or(config.ui.start_component.as_deref()) {
            Some(id) => Location::catalog(id, query),
            None => Location::root().with_query(query),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        info!(location = %self.history.current(), "Browser started");
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        guard.restore();
        terminal.show_cursor()?;
        info!("Browser closed");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let catalog = Arc::clone(&self.catalog);
        let Some(state) = self.controller.state() else {
            return;
        };

        let main = match self.history.current().route() {
            Route::Detail {
                category,
                component,
            } => match present_detail(&catalog, &category, &component) {
                Some(view) => MainPane::Detail(view),
                None => MainPane::MissingDetail {
                    category,
                    component,
                },
            },
            _ => MainPane::Listing,
        };

        let screen = Screen {
            view: present(&catalog, &state),
            sidebar: sidebar(&catalog, &state.active_category),
            main,
            location: self.history.current().href(),
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        };

        self.browser.render(frame, &screen);
        self.help_dialog.render(frame);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.help_dialog.visible {
            self.help_dialog.close();
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.in_detail() {
            self.handle_detail_key(key.code);
        } else if self.browser.focus == Focus::Search {
            self.handle_search_key(key);
        } else {
            self.handle_browse_key(key.code);
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_dialog.toggle(),
            KeyCode::Char('/') => self.browser.focus = Focus::Search,
            KeyCode::Tab => self.browser.focus = self.browser.focus.next(),
            KeyCode::BackTab => self.browser.focus = self.browser.focus.prev(),
            KeyCode::Char('[') => self.go_back(),
            KeyCode::Char(']') => self.go_forward(),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(false),
            KeyCode::Enter => match self.browser.focus {
                Focus::Sidebar => self.select_category_at_cursor(),
                Focus::Components => self.open_selected_component(),
                Focus::Search => {}
            },
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.browser.search.is_empty() {
                    self.browser.focus = Focus::Components;
                } else {
                    self.browser.search.clear();
                    self.apply_search();
                }
            }
            KeyCode::Enter | KeyCode::Tab => self.browser.focus = Focus::Components,
            KeyCode::BackTab => self.browser.focus = self.browser.focus.prev(),
            _ => {
                if self.browser.search.handle_key(key) {
                    self.apply_search();
                }
            }
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_dialog.toggle(),
            KeyCode::Esc | KeyCode::Backspace => self.leave_detail(),
            KeyCode::Char('[') => self.go_back(),
            KeyCode::Char(']') => self.go_forward(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, down: bool) {
        match self.browser.focus {
            Focus::Sidebar => {
                let len = self.catalog.categories().len();
                if down {
                    self.browser.sidebar.select_next(len);
                } else {
                    self.browser.sidebar.select_prev(len);
                }
            }
            Focus::Components => {
                let len = self.visible_count();
                if down {
                    self.browser.components.select_next(len);
                } else {
                    self.browser.components.select_prev(len);
                }
            }
            Focus::Search => {}
        }
    }

    fn select_category_at_cursor(&mut self) {
        let Some(id) = self
            .browser
            .sidebar
            .state
            .selected()
            .and_then(|idx| self.catalog.categories().get(idx))
            .map(|c| c.id.clone())
        else {
            return;
        };

        if self.controller.user_select(&id, &mut self.history).changed() {
            self.browser.search.clear();
            self.browser.components.reset();
            self.browser.focus = Focus::Components;
        }
    }

    fn open_selected_component(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        let Some(state) = self.controller.state() else {
            return;
        };
        let cards = present(&catalog, &state).cards();

        if let Some(card) = self.browser.components.selected(&cards) {
            debug!(href = %card.href, "Opening component");
            self.history.push(Location::parse(&card.href));
            self.on_location_changed();
        }
    }

    /// "Back to <category>" link: a fresh catalog entry for the category
    fn leave_detail(&mut self) {
        if let Route::Detail { category, .. } = self.history.current().route() {
            self.history.push(Location::catalog(&category, ""));
            self.on_location_changed();
        }
    }

    fn go_back(&mut self) {
        if self.history.back() {
            self.on_location_changed();
        }
    }

    fn go_forward(&mut self) {
        if self.history.forward() {
            self.on_location_changed();
        }
    }

    fn apply_search(&mut self) {
        let query = self.browser.search.value();
        self.controller.set_query(query.as_str());
        self.history.replace_query(&query);
        self.browser.components.reset();
    }

    /// The location moved underneath the view (history step or link)
    fn on_location_changed(&mut self) {
        let transition = self.controller.sync_from(&self.history);
        debug!(location = %self.history.current(), ?transition, "Location changed");

        self.load_query_from_location();
        if transition.changed() {
            self.follow_active_category();
        }
        self.browser.components.reset();
    }

    /// Catalog locations carry the search text; detail pages keep the last one
    fn load_query_from_location(&mut self) {
        if let Route::Catalog { query, .. } = self.history.current().route() {
            let query = query.unwrap_or_default();
            self.browser.search.set_value(&query);
            self.controller.set_query(query);
        }
    }

    fn follow_active_category(&mut self) {
        if let Some(active) = self.controller.active_category() {
            let entries = sidebar(&self.catalog, active);
            self.browser.sidebar.follow_active(&entries);
        }
    }

    fn visible_count(&self) -> usize {
        self.controller
            .state()
            .map(|state| present(&self.catalog, &state).visible.len())
            .unwrap_or(0)
    }

    fn in_detail(&self) -> bool {
        matches!(self.history.current().route(), Route::Detail { .. })
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn help_visible(&self) -> bool {
        self.help_dialog.visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
