use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::presentation::{CatalogView, ComponentCard, DetailStatus, DetailView, SidebarEntry};

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Shorten `text` to at most `max` characters, ending in "..." when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Move a list selection by `delta`, clamped to `len`
fn step(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0).min(len - 1);
    let next = current.saturating_add_signed(delta).min(len - 1);
    state.select(Some(next));
}

/// Category list on the left
pub struct SidebarPanel {
    pub state: ListState,
}

impl Default for SidebarPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarPanel {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    pub fn select_next(&mut self, len: usize) {
        step(&mut self.state, len, 1);
    }

    pub fn select_prev(&mut self, len: usize) {
        step(&mut self.state, len, -1);
    }

    /// Put the cursor on the active entry
    pub fn follow_active(&mut self, entries: &[SidebarEntry]) {
        if let Some(idx) = entries.iter().position(|e| e.is_active) {
            self.state.select(Some(idx));
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, entries: &[SidebarEntry], focused: bool) {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                let marker = if entry.is_active { "● " } else { "  " };
                let name_style = if entry.is_active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(entry.name.clone(), name_style),
                    Span::styled(
                        format!(" ({})", entry.count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Categories ")
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Filtered component list for the active category
pub struct ComponentsPanel {
    pub state: ListState,
}

impl Default for ComponentsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentsPanel {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    pub fn select_next(&mut self, len: usize) {
        step(&mut self.state, len, 1);
    }

    pub fn select_prev(&mut self, len: usize) {
        step(&mut self.state, len, -1);
    }

    /// Back to the first card (after the list content changed)
    pub fn reset(&mut self) {
        self.state.select(Some(0));
    }

    pub fn selected<'c>(&self, cards: &'c [ComponentCard]) -> Option<&'c ComponentCard> {
        self.state.selected().and_then(|idx| cards.get(idx))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &CatalogView<'_>, focused: bool) {
        let block = Block::default()
            .title(format!(
                " {} ({}/{}) ",
                view.title,
                view.visible.len(),
                view.total()
            ))
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        if let Some(message) = view.empty_message() {
            let empty = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let max_len = (area.width as usize).saturating_sub(6);
        let items: Vec<ListItem> = view
            .cards()
            .into_iter()
            .map(|card| {
                let badge = if card.has_detail { "" } else { "  (coming soon)" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(card.name, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(badge, Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(Span::raw(truncate(&card.description, max_len))),
                    Line::from(Span::styled(card.tag_line, Style::default().fg(Color::Yellow))),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Lines for a detail page
pub fn detail_lines(view: &DetailView<'_>) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            view.breadcrumb.join(" / "),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(view.record.name.clone(), heading)),
        Line::from(view.summary().to_string()),
        Line::from(Span::styled(
            view.record.tags.join(" · "),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    match view.status {
        DetailStatus::Available(detail) => {
            lines.push(Line::from(Span::styled("Installation", heading)));
            lines.push(Line::from(Span::styled(
                format!("  $ {}", detail.install),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));

            lines.push(Line::from(Span::styled("Code", heading)));
            for tab in &detail.tabs {
                lines.push(Line::from(format!("  • {}", tab.label)));
            }
            lines.push(Line::from(""));

            lines.push(Line::from(Span::styled(detail.reference.label.clone(), heading)));
            for entry in &detail.reference.lines {
                lines.push(Line::from(format!("  {}", entry)));
            }
        }
        DetailStatus::ComingSoon => {
            lines.push(Line::from(Span::styled(
                "Coming soon",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(
                "This component's snippet hasn't been published yet.",
            ));
        }
    }

    lines
}

pub fn render_detail(frame: &mut Frame, area: Rect, view: &DetailView<'_>) {
    let detail = Paragraph::new(detail_lines(view))
        .block(
            Block::default()
                .title(format!(" {} ", view.category.display_name))
                .borders(Borders::ALL)
                .border_style(border_style(true)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(detail, area);
}

/// Shown when a detail location names an unknown component
pub fn render_missing_detail(frame: &mut Frame, area: Rect, category: &str, component: &str) {
    let missing = Paragraph::new(vec![
        Line::from(Span::styled(
            "Component not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("No component '{}' in '{}'.", component, category)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(true)),
    );

    frame.render_widget(missing, area);
}

/// Address bar with back/forward availability
pub fn render_location_bar(
    frame: &mut Frame,
    area: Rect,
    href: &str,
    can_go_back: bool,
    can_go_forward: bool,
) {
    let arrow = |enabled: bool, glyph: &'static str| {
        Span::styled(
            glyph,
            if enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )
    };

    let bar = Paragraph::new(Line::from(vec![
        arrow(can_go_back, " ◀ "),
        arrow(can_go_forward, "▶ "),
        Span::raw(href.to_string()),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" compkit "));

    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::presentation::present_detail;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        // Multi-byte characters are never split
        assert_eq!(truncate("éééééééééé", 5), "éé...");
    }

    #[test]
    fn test_step_clamps() {
        let mut state = ListState::default();
        step(&mut state, 3, -1);
        assert_eq!(state.selected(), Some(0));
        step(&mut state, 3, 5);
        assert_eq!(state.selected(), Some(2));
        step(&mut state, 0, 1);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_sidebar_follows_active() {
        let catalog = Catalog::builtin().unwrap();
        let entries = crate::presentation::sidebar(&catalog, "payments");
        let mut panel = SidebarPanel::new();
        panel.follow_active(&entries);
        assert_eq!(panel.state.selected(), Some(3));
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_lines_available() {
        let catalog = Catalog::builtin().unwrap();
        let view = present_detail(&catalog, "chat", "basic-chat").unwrap();
        let rendered = text(&detail_lines(&view));
        assert!(rendered.contains("Components / Real-time Chat / "));
        assert!(rendered.contains("Installation"));
        assert!(rendered.contains("Socket Events"));
        assert!(!rendered.contains("Coming soon"));
    }

    #[test]
    fn test_detail_lines_coming_soon() {
        let catalog = Catalog::builtin().unwrap();
        let view = present_detail(&catalog, "crud-api", "audit-logging").unwrap();
        let rendered = text(&detail_lines(&view));
        assert!(rendered.contains("Coming soon"));
        assert!(!rendered.contains("Installation"));
    }
}
