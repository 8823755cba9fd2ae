use crate::dom::{Cell as DomCell, TableRow};
use crate::search::SearchBackend;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::search::SearchState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, ROW_ALT, STATUS_ERROR};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

pub fn draw<B: SearchBackend>(frame: &mut Frame<'_>, app: &App<B>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (input_area, results_area) = body_regions(body);
    let state = app.state();

    frame.render_widget(Header::new().widget(&app.count_text(), &state), header);
    frame.render_widget(Footer::new(&state).widget(footer), footer);
    frame.render_widget(Clear, body);

    let query = app.query_text();
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(query.clone(), Style::default().fg(HEADER_TEXT)),
    ]))
    .block(
        Block::default()
            .title("Query")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, input_area);
    if input_area.width > 2 && input_area.height > 2 {
        let query_width = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        // Border plus the "> " prompt
        let cursor_x = input_area.x.saturating_add(3).saturating_add(query_width);
        let max_x = input_area.x.saturating_add(input_area.width.saturating_sub(2));
        frame.set_cursor_position((cursor_x.min(max_x), input_area.y + 1));
    }

    let results_block = Block::default()
        .title("Results")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if app.table_visible() {
        let rows = app.rows();
        let table = Table::new(
            table_rows(&rows, app.table_offset()),
            [Constraint::Percentage(75), Constraint::Percentage(25)],
        )
        .header(
            Row::new(vec!["Match", "Work"])
                .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        )
        .block(results_block);
        frame.render_widget(table, results_area);
        return;
    }

    let message = match &state {
        SearchState::Idle => Line::from("Type a query and press Enter."),
        SearchState::Loading { query, .. } => Line::from(format!("Searching for \"{}\"...", query)),
        SearchState::Empty => Line::from("No matches."),
        SearchState::Error { message } => {
            Line::styled(message.clone(), Style::default().fg(STATUS_ERROR))
        }
        SearchState::Rendered { .. } => Line::from(""),
    };
    frame.render_widget(Paragraph::new(message).block(results_block), results_area);
}

fn table_rows(rows: &[TableRow], offset: usize) -> Vec<Row<'static>> {
    rows.iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, row)| {
            let matched = cell_text(&row.matched);
            let height = u16::try_from(matched.height().max(1)).unwrap_or(u16::MAX);
            let mut table_row = Row::new(vec![
                Cell::from(matched),
                Cell::from(cell_text(&row.work)),
            ])
            .height(height);
            if idx % 2 == 1 {
                table_row = table_row.style(Style::default().bg(ROW_ALT));
            }
            table_row
        })
        .collect()
}

/// One visual line per line break in the cell.
fn cell_text(cell: &DomCell) -> Text<'static> {
    Text::from(
        cell.lines()
            .into_iter()
            .map(|line| Line::from(line.replace(['\r', '\n'], " ")))
            .collect::<Vec<_>>(),
    )
}
