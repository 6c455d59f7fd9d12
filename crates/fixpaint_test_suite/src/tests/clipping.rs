//! Clip rectangle tests

use crate::runner::TestSuite;
use fixpaint::{Brush, Color, Ellipse, Pen, Rectangle};

/// Create the clipping test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("clipping");

    suite.add("clip_fill", |ctx| {
        let graphics = ctx.graphics();
        if let Err(e) = graphics.set_clip(100, 75, 200, 150) {
            tracing::error!("set_clip failed: {}", e);
            return;
        }
        graphics.fill(Some(&Brush::solid(Color::RED)), &Ellipse::new(50, 25, 300, 250));
    });

    suite.add("clip_past_edges", |ctx| {
        let graphics = ctx.graphics();
        if let Err(e) = graphics.set_clip_rect(&Rectangle::new(-50, -50, 250, 200)) {
            tracing::error!("set_clip failed: {}", e);
            return;
        }
        graphics.fill_rectangle(Some(&Brush::solid(Color::BLUE)), 0, 0, 400, 300);
    });

    // Clip then reset, second stroke is unclipped
    suite.add("clip_reset", |ctx| {
        let graphics = ctx.graphics();
        if let Err(e) = graphics.set_clip(0, 0, 200, 300) {
            tracing::error!("set_clip failed: {}", e);
            return;
        }
        graphics.draw_line(Some(&Pen::new(Color::BLACK)), 0, 100, 400, 100);
        graphics.reset();
        graphics.draw_line(None, 0, 200, 400, 200);
    });

    suite
}
