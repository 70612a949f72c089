//! End-to-end demo of the paint engine without a UI.
//!
//! Draws a handful of shapes through the session's pointer interface, prints
//! the braille and block renderings, then round-trips the document through a
//! save/load cycle and verifies the replay is dot-identical.
//!
//! Run with `RUST_LOG=debug` to see commit and persistence logging.

use retro_paint::{
    CharMode, Document, FillMode, PointerEvent, Rgb, Session, Style, ToolKind, ToolSelection,
};

fn stroke(session: &mut Session, sel: ToolSelection, style: Style, from: (i32, i32), to: (i32, i32)) {
    session.pointer_event(PointerEvent::press(from.0, from.1), sel, style);
    session.pointer_event(PointerEvent::moved(to.0, to.1), sel, style);
    session.pointer_event(PointerEvent::released(to.0, to.1), sel, style);
}

fn main() -> retro_paint::Result<()> {
    env_logger::init();

    let mut session = Session::new(40, 16)?;

    stroke(
        &mut session,
        ToolSelection::new(ToolKind::Rectangle, CharMode::Dot, FillMode::Empty),
        Style::new(Rgb::GREEN),
        (2, 2),
        (37, 13),
    );
    stroke(
        &mut session,
        ToolSelection::new(ToolKind::Circle, CharMode::Dot, FillMode::Empty),
        Style::new(Rgb::RED),
        (20, 8),
        (26, 8),
    );
    stroke(
        &mut session,
        ToolSelection::new(ToolKind::Ellipse, CharMode::Dot, FillMode::Filled),
        Style::new(Rgb::BLUE).with_bold(),
        (6, 5),
        (13, 11),
    );
    stroke(
        &mut session,
        ToolSelection::new(ToolKind::Line, CharMode::Block, FillMode::Empty),
        Style::new(Rgb::WHITE),
        (25, 12),
        (36, 4),
    );

    println!("dot mode:\n{}", session.canvas().render_text(CharMode::Dot));
    println!("block mode:\n{}", session.canvas().render_text(CharMode::Block));

    let path = session.save("demo")?;
    let reloaded = Document::load_from_path(&path)?;
    let replayed = reloaded.replay()?;
    println!(
        "saved {} figures to {}; replay identical: {}",
        reloaded.figures().len(),
        path.display(),
        replayed.dots_eq(session.canvas())
    );

    Ok(())
}
