//! Shape rendering tests
//!
//! Tests for filled primitives: rectangles, ellipses, polygons, pies, curves

use crate::runner::TestSuite;
use fixpaint::{Brush, Color, Curve, Ellipse, FillRule, Pie, RoundRectangle};

/// Create the shapes test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("shapes");

    // Basic rectangle
    suite.add("fill_rect_basic", |ctx| {
        ctx.graphics()
            .fill_rectangle(Some(&Brush::solid(Color::BLUE)), 100, 75, 200, 150);
    });

    suite.add("fill_round_rect", |ctx| {
        ctx.graphics().fill(
            Some(&Brush::solid(Color::RED)),
            &RoundRectangle::new(100, 75, 200, 150, 40, 40),
        );
    });

    suite.add("fill_oval", |ctx| {
        ctx.graphics()
            .fill(Some(&Brush::solid(Color::GREEN)), &Ellipse::new(80, 50, 240, 200));
    });

    suite.add("fill_pie", |ctx| {
        ctx.graphics()
            .fill(Some(&Brush::solid(Color::YELLOW)), &Pie::new(100, 50, 200, 200, 30, 300));
    });

    // Five-pointed star under both fill rules
    let star = vec![(200, 30), (260, 250), (80, 110), (320, 110), (140, 250)];
    let even_odd = star.clone();
    suite.add("fill_star_non_zero", move |ctx| {
        ctx.graphics()
            .fill_polygon(Some(&Brush::solid(Color::BLACK)), &star);
    });
    suite.add("fill_star_even_odd", move |ctx| {
        let graphics = ctx.graphics();
        graphics.set_fill_rule(FillRule::EvenOdd);
        graphics.fill_polygon(Some(&Brush::solid(Color::BLACK)), &even_odd);
    });

    suite.add("fill_closed_curve", |ctx| {
        let curve = Curve::closed(vec![(100, 150), (200, 50), (300, 150), (200, 250)]);
        ctx.graphics()
            .fill(Some(&Brush::solid(Color::from_rgb(128, 0, 128))), &curve);
    });

    suite.add_sized("fill_tiny_rects", 32, 32, |ctx| {
        let brush = Brush::solid(Color::RED);
        for i in 0..8 {
            ctx.graphics().fill_rectangle(Some(&brush), i * 4, i * 4, 1 + i / 2, 1 + i / 2);
        }
    });

    suite
}
