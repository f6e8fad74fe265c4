use bookfinder::controller::View;
use bookfinder::row::BookRow;
use bookfinder::Volume;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &crate::app::App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    draw_query_input(frame, chunks[0], app.controller.query());
    draw_hint(frame, chunks[1]);

    match app.controller.view() {
        View::Loading => draw_prompt(frame, chunks[2], "Loading..."),
        View::Welcome => {
            draw_prompt(frame, chunks[2], "Welcome to Book Finder. Enter a search query!");
        }
        View::NoResults => draw_prompt(frame, chunks[2], "No results, modify your search query."),
        View::Results(volumes) => draw_results(frame, chunks[2], volumes),
    }
}

fn draw_query_input(frame: &mut Frame, area: Rect, query: &str) {
    let input = Paragraph::new(query)
        .block(Block::default().borders(Borders::ALL).title(" Find a book: "));
    frame.render_widget(input, area);

    // Keep the cursor at the end of the typed query.
    let x = area.x + 1 + query.chars().count() as u16;
    frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(" Enter a book title or author. Esc quits.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, message: &str) {
    let prompt = Paragraph::new(message)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn draw_results(frame: &mut Frame, area: Rect, volumes: &[Volume]) {
    let header = Row::new(
        ["Cover", "Title", "Published", "Authors", "Goodreads", "BookFinder"]
            .into_iter()
            .map(Cell::from),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row<'_>> = volumes
        .iter()
        .filter_map(BookRow::from_volume)
        .map(book_row)
        .collect();

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(2),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(" Results "));

    frame.render_widget(table, area);
}

fn book_row(row: BookRow) -> Row<'static> {
    let height = row.authors.len().max(1) as u16;

    let authors = Text::from(
        row.authors
            .into_iter()
            .map(Line::from)
            .collect::<Vec<_>>(),
    );

    Row::new(vec![
        Cell::from(row.thumbnail.unwrap_or_default())
            .style(Style::default().fg(Color::DarkGray)),
        Cell::from(row.title).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(row.published_date.unwrap_or_default()),
        Cell::from(authors),
        Cell::from(row.goodreads_url).style(Style::default().fg(Color::Blue)),
        Cell::from(row.bookfinder_url).style(Style::default().fg(Color::Blue)),
    ])
    .height(height)
}
