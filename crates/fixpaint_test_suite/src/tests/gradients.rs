//! Gradient brush tests
//!
//! Linear and radial gradients under each fill mode

use crate::runner::TestSuite;
use fixpaint::{
    Brush, Color, Ellipse, FillMode, Fixed, LinearGradientBrush, RadialGradientBrush, Rectangle,
};

fn fx(v: i32) -> Fixed {
    Fixed::from_int(v)
}

fn linear(mode: FillMode, angle: Fixed) -> Brush {
    LinearGradientBrush::new(fx(100), fx(100), fx(300), fx(200), angle)
        .with_stops(&[(Fixed::ZERO, Color::BLACK), (Fixed::ONE, Color::WHITE)])
        .with_fill_mode(mode)
        .into()
}

fn radial(mode: FillMode) -> Brush {
    RadialGradientBrush::new(fx(200), fx(150), fx(60), Fixed::ZERO)
        .with_stops(&[
            (Fixed::ZERO, Color::YELLOW),
            (Fixed::HALF, Color::RED),
            (Fixed::ONE, Color::BLUE),
        ])
        .with_fill_mode(mode)
        .into()
}

/// Create the gradients test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("gradients");

    let modes = [
        ("no_cycle", FillMode::NoCycle),
        ("repeat", FillMode::Repeat),
        ("reflect", FillMode::Reflect),
    ];

    for (label, mode) in modes {
        suite.add(&format!("linear_{}", label), move |ctx| {
            let area = Rectangle::new(0, 0, ctx.width() as i32, ctx.height() as i32);
            ctx.graphics().fill(Some(&linear(mode, Fixed::ZERO)), &area);
        });
        suite.add(&format!("radial_{}", label), move |ctx| {
            let area = Rectangle::new(0, 0, ctx.width() as i32, ctx.height() as i32);
            ctx.graphics().fill(Some(&radial(mode)), &area);
        });
    }

    suite.add("linear_rotated", |ctx| {
        let brush = linear(FillMode::Reflect, Fixed::from_f32(0.785_398));
        ctx.graphics()
            .fill(Some(&brush), &Ellipse::new(50, 20, 300, 260));
    });

    suite
}
