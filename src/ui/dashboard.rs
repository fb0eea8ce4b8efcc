use crate::model::units;
use crate::report::StructureMetrics;
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const LABEL_STYLE: Style = Style::new().fg(BRAND_MUTED);
const COUNT_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        " ↑↓ Piece | Enter Details | r Report | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Metal Structure | {} pieces | {:.2} {} | {:.2} {} ",
        app.metal.structure().total_piece_count(),
        app.metal.total_weight(),
        units::WEIGHT,
        app.metal.total_volume(),
        units::VOLUME
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(65), // Pieces
        Constraint::Percentage(35), // Summary
    ])
    .split(area);

    draw_pieces(frame, chunks[0], app);
    draw_summary(frame, chunks[1], app);
}

fn draw_pieces(frame: &mut Frame, area: Rect, app: &App) {
    let pieces = app.sorted_pieces();

    // Calculate visible area (subtract 3 for borders and header)
    let visible_rows = (area.height as usize).saturating_sub(3);

    // Keep selected item visible
    let scroll_offset = if app.selected_piece >= visible_rows {
        app.selected_piece - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Name", "Material", "Qty", "Area", "Volume"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = pieces
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, p)| {
            let style = if i == app.selected_piece {
                SELECTED_STYLE
            } else {
                Style::default()
            };

            Row::new(vec![
                p.name.clone(),
                p.material.name().to_string(),
                format!("{} pcs", p.quantity),
                format!("{:.2} {}", p.area(), units::AREA),
                format!("{:.2} {}", p.volume(), units::VOLUME),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let title = format!(" Pieces ({}) ", pieces.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );

    frame.render_widget(table, area);

    // Draw scrollbar if needed and if there is room for one
    if visible_rows > 0 && pieces.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(pieces.len()).position(app.selected_piece);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        }
        .intersection(area);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let cans = app.metal.paint_cans();
    let mut lines = vec![Line::from(Span::styled("Volume by type", HEADER_STYLE))];

    for (shape, count, volume) in app.get_shape_totals() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", shape.name()), LABEL_STYLE),
            Span::raw(format!("{volume:.2} {} ", units::VOLUME)),
            Span::styled(format!("({count})"), Style::default().fg(COUNT_COLOR)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Paint ", HEADER_STYLE),
        Span::styled(
            format!(
                "{:.2} {}",
                app.metal.structure().total_paint_litres(),
                units::PAINT
            ),
            LABEL_STYLE,
        ),
    ]));
    for (label, count) in [
        ("5 l", cans.five_litre),
        ("2 l", cans.two_litre),
        ("0.5 l", cans.half_litre),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<18}"), LABEL_STYLE),
            Span::styled(format!("{count} can(s)"), Style::default().fg(COUNT_COLOR)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<18}", "Total cans"), LABEL_STYLE),
        Span::styled(
            format!("{} can(s)", cans.total()),
            Style::default().fg(COUNT_COLOR),
        ),
    ]));

    let summary =
        Paragraph::new(lines).block(Block::default().title(" Summary ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_piece_detail(frame: &mut Frame, app: &App) {
    let piece = match app.get_selected_piece() {
        Some(p) => p,
        None => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: piece name
        Constraint::Length(3), // Info: shape | material | position
        Constraint::Min(6),    // Figures and dimensions
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" Piece: {} ", piece.name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let info_text = format!(
        "{}  |  {}  |  Piece: {}/{}",
        piece.shape_type().name(),
        piece.material,
        app.selected_piece + 1,
        app.metal.structure().len()
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    let section = |title: &str| {
        Row::new(vec![format!("── {title} ──"), String::new()]).style(
            Style::default()
                .fg(BRAND_MUTED)
                .add_modifier(Modifier::ITALIC),
        )
    };

    let mut rows = vec![
        section("Figures"),
        Row::new(vec!["Quantity".to_string(), format!("{} pcs", piece.quantity)]),
        Row::new(vec![
            "Area (unit)".to_string(),
            format!("{:.2} {}", piece.area(), units::AREA),
        ]),
        Row::new(vec![
            "Volume (unit)".to_string(),
            format!("{:.2} {}", piece.volume(), units::VOLUME),
        ]),
        Row::new(vec![
            "Weight (all units)".to_string(),
            format!(
                "{:.2} {}",
                app.get_selected_weight().unwrap_or_default(),
                units::WEIGHT
            ),
        ]),
        section("Dimensions"),
    ];
    rows.extend(piece.dimensions().into_iter().map(|d| {
        Row::new(vec![
            d.name.to_string(),
            format!("{:.2} {}", d.value, units::LENGTH),
        ])
    }));

    let widths = [Constraint::Percentage(40), Constraint::Percentage(60)];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Property", "Value"]).style(HEADER_STYLE))
        .block(Block::default().title(" Details ").borders(Borders::ALL));
    frame.render_widget(table, chunks[2]);

    draw_footer(
        frame,
        chunks[3],
        " Esc Back | ←→ Piece | r Report | q Quit ",
    );
}

pub fn draw_report(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(6),    // Report text
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(" Report ")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let visible_lines = (chunks[1].height as usize).saturating_sub(2);
    let lines: Vec<Line> = app
        .report_lines
        .iter()
        .skip(app.report_scroll_offset)
        .take(visible_lines)
        .map(|l| Line::raw(l.as_str()))
        .collect();

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);

    if visible_lines > 0 && app.report_lines.len() > visible_lines {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(app.report_lines.len()).position(app.report_scroll_offset);

        let scrollbar_area = Rect {
            x: chunks[1].x + chunks[1].width.saturating_sub(1),
            y: chunks[1].y + 1,
            width: 1,
            height: chunks[1].height.saturating_sub(2),
        }
        .intersection(chunks[1]);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    draw_footer(
        frame,
        chunks[2],
        " Esc Back | ↑↓ Scroll | PgUp/PgDn Page | q Quit ",
    );
}
