//! Rasterizer and replay performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use retro_paint::{
    Canvas, CharMode, Document, Figure, FillMode, Rgb, Style, ToolKind,
};
use std::hint::black_box;

fn raster_lines(c: &mut Criterion) {
    let mut canvas = Canvas::new(80, 24).unwrap();
    let style = Style::new(Rgb::WHITE);

    c.bench_function("line_point_diagonal", |b| {
        b.iter(|| {
            canvas.draw_point_line(black_box(0), black_box(0), black_box(159), black_box(95), style);
        })
    });

    c.bench_function("line_block_diagonal", |b| {
        b.iter(|| {
            canvas.draw_block_line(black_box(0), black_box(0), black_box(159), black_box(95), style);
        })
    });
}

fn raster_circles(c: &mut Criterion) {
    let mut canvas = Canvas::new(80, 24).unwrap();
    let style = Style::new(Rgb::WHITE);

    c.bench_function("circle_point_r40", |b| {
        b.iter(|| {
            canvas.draw_point_circle(black_box(80), black_box(48), black_box(40), style);
        })
    });

    c.bench_function("circle_filled_r40", |b| {
        b.iter(|| {
            canvas.draw_point_circle_filled(black_box(80), black_box(48), black_box(40), style);
        })
    });
}

fn raster_ellipses(c: &mut Criterion) {
    let mut canvas = Canvas::new(80, 24).unwrap();
    let style = Style::new(Rgb::WHITE);

    c.bench_function("ellipse_point_wide", |b| {
        b.iter(|| {
            canvas.draw_point_ellipse(black_box(10), black_box(10), black_box(150), black_box(85), style);
        })
    });

    c.bench_function("ellipse_filled_wide", |b| {
        b.iter(|| {
            canvas.draw_point_ellipse_filled(black_box(10), black_box(10), black_box(150), black_box(85), style);
        })
    });
}

fn replay_log(c: &mut Criterion) {
    let mut doc = Document::new(80, 24).unwrap();
    for i in 0..100_i32 {
        doc.append(Figure {
            tool: match i % 4 {
                0 => ToolKind::Line,
                1 => ToolKind::Circle,
                2 => ToolKind::Ellipse,
                _ => ToolKind::Rectangle,
            },
            mode: if i % 2 == 0 { CharMode::Dot } else { CharMode::Block },
            fill: if i % 3 == 0 { FillMode::Filled } else { FillMode::Empty },
            x0: i,
            y0: i % 40,
            x1: 159 - i,
            y1: 95 - i % 40,
            color: Rgb::new((i * 7) as u8, (i * 13) as u8, (i * 29) as u8),
        });
    }

    c.bench_function("replay_100_figures", |b| {
        b.iter(|| black_box(&doc).replay().unwrap())
    });
}

fn render_glyphs(c: &mut Criterion) {
    let mut canvas = Canvas::new(80, 24).unwrap();
    let style = Style::new(Rgb::WHITE);
    canvas.draw_point_ellipse_filled(0, 0, 159, 95, style);

    c.bench_function("render_text_dot", |b| {
        b.iter(|| black_box(&canvas).render_text(CharMode::Dot))
    });

    c.bench_function("render_text_block", |b| {
        b.iter(|| black_box(&canvas).render_text(CharMode::Block))
    });
}

criterion_group!(
    benches,
    raster_lines,
    raster_circles,
    raster_ellipses,
    replay_log,
    render_glyphs
);
criterion_main!(benches);
