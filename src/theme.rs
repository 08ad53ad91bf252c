use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub heading: Style,
    pub text: Style,
    pub code: Style,
    pub timestamp: Style,
    pub collapsed: Style,
    pub highlight: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub list_item: Style,
    pub list_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Rgb(200, 200, 200)),
            code: Style::default().fg(Color::Rgb(200, 150, 100)), // Warm tan/orange
            timestamp: Style::default().fg(Color::Rgb(130, 130, 130)),
            collapsed: Style::default()
                .fg(Color::Rgb(130, 130, 130))
                .add_modifier(Modifier::ITALIC),
            highlight: Style::default()
                .bg(Color::Rgb(90, 80, 20))
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            footer_segment_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().fg(Color::Rgb(200, 200, 200)),
            footer_group_name: Style::default()
                .fg(Color::Rgb(110, 110, 110))
                .add_modifier(Modifier::ITALIC),
            status_ready: Style::default().fg(Color::Black).bg(Color::Green),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(Color::Rgb(200, 200, 200)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}
