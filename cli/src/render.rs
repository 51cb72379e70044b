use std::fmt::Write;

use lightnet_core::{EngineState, Snapshot, TileView, Wires};

fn glyph(wires: Wires, lit: bool) -> char {
    const UP: u8 = Wires::UP.bits();
    const RIGHT: u8 = Wires::RIGHT.bits();
    const DOWN: u8 = Wires::DOWN.bits();
    const LEFT: u8 = Wires::LEFT.bits();

    let (light, heavy) = match wires.bits() {
        0 => ('·', '•'),
        UP => ('╵', '╹'),
        RIGHT => ('╶', '╺'),
        DOWN => ('╷', '╻'),
        LEFT => ('╴', '╸'),
        b if b == UP | DOWN => ('│', '┃'),
        b if b == RIGHT | LEFT => ('─', '━'),
        b if b == UP | RIGHT => ('└', '┗'),
        b if b == RIGHT | DOWN => ('┌', '┏'),
        b if b == DOWN | LEFT => ('┐', '┓'),
        b if b == LEFT | UP => ('┘', '┛'),
        b if b == UP | RIGHT | DOWN => ('├', '┣'),
        b if b == RIGHT | DOWN | LEFT => ('┬', '┳'),
        b if b == DOWN | LEFT | UP => ('┤', '┫'),
        b if b == LEFT | UP | RIGHT => ('┴', '┻'),
        _ => ('┼', '╋'),
    };
    if lit { heavy } else { light }
}

fn cell(view: &TileView) -> [char; 2] {
    [
        glyph(view.wires, view.lit),
        if view.source { '*' } else { ' ' },
    ]
}

/// Text picture of the board followed by a status line.
pub fn render(snapshot: &Snapshot) -> String {
    let (width, height) = snapshot.size;
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..width {
        let _ = write!(out, "{:<2}", x % 100);
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{:>2} ", y);
        for x in 0..width {
            if let Some(view) = snapshot.tile((x, y)) {
                out.extend(cell(view));
            }
        }
        out.push('\n');
    }

    let status = match snapshot.state {
        EngineState::Won => "solved",
        EngineState::Playing if snapshot.won => "all lit, rotate to finish",
        EngineState::Playing => "playing",
    };
    let _ = writeln!(
        out,
        "score {}  time {}s  {}",
        snapshot.score, snapshot.elapsed, status
    );
    out
}
