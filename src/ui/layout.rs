use ratatui::layout::Rect;

/// Splits the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the query input (3 rows) and the results area.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let input_height = body.height.min(3);
    let input = Rect {
        height: input_height,
        ..body
    };
    let results = Rect {
        y: body.y + input_height,
        height: body.height.saturating_sub(input_height),
        ..body
    };
    (input, results)
}
