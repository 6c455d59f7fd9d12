//! Path constructors for common shapes
//!
//! Boxes are given by two corners `(x_min, y_min)-(x_max, y_max)`; angles
//! are in radians, measured clockwise from the positive x axis (y grows
//! downwards).

use crate::fixed::Fixed;
use crate::geometry::Point;
use crate::path::Path;

/// Control distance for a quarter ellipse, as a fraction of the radius
pub const KAPPA: Fixed = Fixed(36195);

/// Straight line between two points
pub fn line(from: Point, to: Point) -> Path {
    Path::new().move_to(from).line_to(to)
}

/// Open chain through `points`
pub fn polyline(points: &[Point]) -> Path {
    let mut path = Path::with_capacity(points.len());
    if let Some((first, rest)) = points.split_first() {
        path.add_move_to(*first);
        for &p in rest {
            path.add_line_to(p);
        }
    }
    path
}

/// Closed chain through `points`
pub fn polygon(points: &[Point]) -> Path {
    let mut path = polyline(points);
    if !path.is_empty() {
        path.add_close();
    }
    path
}

/// Closed axis-aligned rectangle
pub fn rect(x_min: Fixed, y_min: Fixed, x_max: Fixed, y_max: Fixed) -> Path {
    Path::new()
        .move_to(Point::new(x_min, y_min))
        .line_to(Point::new(x_max, y_min))
        .line_to(Point::new(x_max, y_max))
        .line_to(Point::new(x_min, y_max))
        .close()
}

/// Rectangle with elliptical corners of radii `rx`, `ry`
///
/// Radii are clamped to half the box size.
pub fn round_rect(
    x_min: Fixed,
    y_min: Fixed,
    x_max: Fixed,
    y_max: Fixed,
    rx: Fixed,
    ry: Fixed,
) -> Path {
    let rx = rx.max(Fixed::ZERO).min((x_max - x_min).abs() / 2);
    let ry = ry.max(Fixed::ZERO).min((y_max - y_min).abs() / 2);
    if rx == Fixed::ZERO || ry == Fixed::ZERO {
        return rect(x_min, y_min, x_max, y_max);
    }

    let kx = rx * KAPPA;
    let ky = ry * KAPPA;
    let p = Point::new;

    Path::with_capacity(10)
        .move_to(p(x_min + rx, y_min))
        .line_to(p(x_max - rx, y_min))
        .cubic_to(
            p(x_max - rx + kx, y_min),
            p(x_max, y_min + ry - ky),
            p(x_max, y_min + ry),
        )
        .line_to(p(x_max, y_max - ry))
        .cubic_to(
            p(x_max, y_max - ry + ky),
            p(x_max - rx + kx, y_max),
            p(x_max - rx, y_max),
        )
        .line_to(p(x_min + rx, y_max))
        .cubic_to(
            p(x_min + rx - kx, y_max),
            p(x_min, y_max - ry + ky),
            p(x_min, y_max - ry),
        )
        .line_to(p(x_min, y_min + ry))
        .cubic_to(
            p(x_min, y_min + ry - ky),
            p(x_min + rx - kx, y_min),
            p(x_min + rx, y_min),
        )
        .close()
}

/// Ellipse inscribed in the box, as four cubics
pub fn oval(x_min: Fixed, y_min: Fixed, x_max: Fixed, y_max: Fixed) -> Path {
    let cx = x_min + (x_max - x_min) / 2;
    let cy = y_min + (y_max - y_min) / 2;
    let rx = (x_max - x_min) / 2;
    let ry = (y_max - y_min) / 2;
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;
    let p = Point::new;

    Path::with_capacity(6)
        .move_to(p(cx + rx, cy))
        .cubic_to(p(cx + rx, cy + ky), p(cx + kx, cy + ry), p(cx, cy + ry))
        .cubic_to(p(cx - kx, cy + ry), p(cx - rx, cy + ky), p(cx - rx, cy))
        .cubic_to(p(cx - rx, cy - ky), p(cx - kx, cy - ry), p(cx, cy - ry))
        .cubic_to(p(cx + kx, cy - ry), p(cx + rx, cy - ky), p(cx + rx, cy))
        .close()
}

/// Elliptic arc of the ellipse inscribed in the box
///
/// The sweep is split into cubics of at most a quarter turn. A `pie` arc is
/// closed through the center.
pub fn arc(
    x_min: Fixed,
    y_min: Fixed,
    x_max: Fixed,
    y_max: Fixed,
    start: Fixed,
    sweep: Fixed,
    pie: bool,
) -> Path {
    let center = Point::new(x_min + (x_max - x_min) / 2, y_min + (y_max - y_min) / 2);
    let rx = (x_max - x_min) / 2;
    let ry = (y_max - y_min) / 2;
    let sweep = sweep.clamp(-Fixed::TWO_PI, Fixed::TWO_PI);

    let at = |angle: Fixed| {
        Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
    };
    let tangent = |angle: Fixed| Point::new(-(rx * angle.sin()), ry * angle.cos());

    // PI_OVER_2 is truncated; a full turn must still make four pieces
    let quarter = Fixed::PI_OVER_2.raw() + 1;
    let pieces = ((sweep.abs().raw() + quarter - 1) / quarter).max(1);
    let step = sweep / pieces;
    // Handle length for a cubic spanning `step`
    let k = Fixed::from_int(4) * (step / 4).tan() / 3;

    let mut path = Path::with_capacity(pieces as usize + 3);
    if pie {
        path.add_move_to(center);
        path.add_line_to(at(start));
    } else {
        path.add_move_to(at(start));
    }

    if sweep != Fixed::ZERO {
        let mut angle = start;
        for _ in 0..pieces {
            let next = angle + step;
            let (p0, p1) = (at(angle), at(next));
            let (t0, t1) = (tangent(angle), tangent(next));
            path.add_curve_to(
                Point::new(p0.x + t0.x * k, p0.y + t0.y * k),
                Point::new(p1.x - t1.x * k, p1.y - t1.y * k),
                p1,
            );
            angle = next;
        }
    }

    if pie {
        path.add_close();
    }
    path
}

/// Cardinal spline through `points[offset..=offset + segments]`
///
/// `tension` scales the tangents (0 gives straight lines, 0.5 a typical
/// smooth curve). A `closed` curve also joins the last point back to the
/// first.
pub fn smooth_curves(
    points: &[Point],
    offset: usize,
    segments: usize,
    tension: Fixed,
    closed: bool,
) -> Path {
    if offset >= points.len() {
        return Path::new();
    }
    let last = (offset + segments).min(points.len() - 1);
    let pts = &points[offset..=last];
    let n = pts.len();
    if n < 2 {
        return polyline(pts);
    }

    let get = |i: isize| -> Point {
        if closed {
            pts[i.rem_euclid(n as isize) as usize]
        } else {
            pts[i.clamp(0, n as isize - 1) as usize]
        }
    };
    let scale = |v: Point| Point::new(v.x * tension / 3, v.y * tension / 3);

    let count = if closed { n } else { n - 1 };
    let mut path = Path::with_capacity(count + 2);
    path.add_move_to(pts[0]);
    for i in 0..count as isize {
        let (p0, p1, p2, p3) = (get(i - 1), get(i), get(i + 1), get(i + 2));
        let c1 = p1 + scale(p2 - p0);
        let c2 = p2 - scale(p3 - p1);
        path.add_curve_to(c1, c2, p2);
    }
    if closed {
        path.add_close();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{FillRule, PathCommand};

    fn fx(n: i32) -> Fixed {
        Fixed::from_int(n)
    }

    fn near(a: Point, b: Point, tolerance: f32) -> bool {
        (a.x.to_f32() - b.x.to_f32()).abs() <= tolerance
            && (a.y.to_f32() - b.y.to_f32()).abs() <= tolerance
    }

    #[test]
    fn test_polygon_closes() {
        let pts = [Point::from_int(0, 0), Point::from_int(4, 0), Point::from_int(0, 4)];
        assert_eq!(polyline(&pts).len(), 3);
        let closed = polygon(&pts);
        assert_eq!(closed.commands().last(), Some(&PathCommand::Close));
        assert!(polygon(&[]).is_empty());
    }

    #[test]
    fn test_oval_bounds_and_inside() {
        let path = oval(fx(0), fx(0), fx(100), fx(50));
        let flat = path.flatten();
        let bounds = flat.bounds();
        assert!((bounds.width().to_f32() - 100.0).abs() < 0.1);
        assert!((bounds.height().to_f32() - 50.0).abs() < 0.1);
        assert!(path.contains(Point::from_int(50, 25), FillRule::NonZero));
        assert!(!path.contains(Point::from_int(2, 2), FillRule::NonZero));
    }

    #[test]
    fn test_round_rect_clamps_radius() {
        let path = round_rect(fx(0), fx(0), fx(20), fx(10), fx(50), fx(50));
        let bounds = path.bounds();
        assert_eq!(bounds.width(), fx(20));
        assert_eq!(bounds.height(), fx(10));
        assert!(!path.contains(Point::from_f32(0.5, 0.5), FillRule::NonZero));
        assert!(path.contains(Point::from_int(10, 5), FillRule::NonZero));

        let square = round_rect(fx(0), fx(0), fx(10), fx(10), Fixed::ZERO, fx(2));
        assert_eq!(square, rect(fx(0), fx(0), fx(10), fx(10)));
    }

    #[test]
    fn test_quarter_arc_ends() {
        let path = arc(fx(0), fx(0), fx(100), fx(100), Fixed::ZERO, Fixed::PI_OVER_2, false);
        assert_eq!(path.len(), 2);
        assert!(near(path.current_point(), Point::from_int(50, 100), 0.1));
        let PathCommand::MoveTo(start) = path.commands()[0] else {
            panic!("arc must start with a move");
        };
        assert!(near(start, Point::from_int(100, 50), 0.1));
    }

    #[test]
    fn test_full_arc_splits_into_quarters() {
        let path = arc(fx(0), fx(0), fx(100), fx(100), Fixed::ZERO, Fixed::TWO_PI, false);
        assert_eq!(path.len(), 5);
        // midpoint of the first cubic stays on the circle
        let flat = path.flatten();
        let PathCommand::LineTo(mid) = flat.commands()[12] else {
            panic!("expected a line");
        };
        let r = Point::distance(mid, Point::from_int(50, 50));
        assert!((r.to_f32() - 50.0).abs() < 0.2, "radius {}", r);
    }

    #[test]
    fn test_pie_closes_through_center() {
        let path = arc(fx(0), fx(0), fx(100), fx(100), Fixed::ZERO, Fixed::PI_OVER_2, true);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::from_int(50, 50)));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        assert!(path.contains(Point::from_int(70, 70), FillRule::NonZero));
        assert!(!path.contains(Point::from_int(30, 30), FillRule::NonZero));
    }

    #[test]
    fn test_smooth_curves_pass_through_points() {
        let pts = [
            Point::from_int(0, 0),
            Point::from_int(10, 10),
            Point::from_int(20, 0),
            Point::from_int(30, 10),
        ];
        let open = smooth_curves(&pts, 0, 3, Fixed::HALF, false);
        assert_eq!(open.len(), 4);
        let ends: Vec<Point> = open.commands().iter().filter_map(|c| c.end_point()).collect();
        assert_eq!(ends, pts);

        let closed = smooth_curves(&pts, 0, 3, Fixed::HALF, true);
        assert_eq!(closed.len(), 6);
        assert_eq!(closed.current_point(), pts[0]);

        let partial = smooth_curves(&pts, 1, 1, Fixed::HALF, false);
        assert_eq!(partial.current_point(), pts[2]);
    }

    #[test]
    fn test_zero_tension_is_straight() {
        let pts = [Point::from_int(0, 0), Point::from_int(10, 0), Point::from_int(10, 10)];
        let path = smooth_curves(&pts, 0, 2, Fixed::ZERO, false);
        match path.commands()[1] {
            PathCommand::CubicTo { control1, control2, end } => {
                assert_eq!(control1, pts[0]);
                assert_eq!(control2, pts[1]);
                assert_eq!(end, pts[1]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
