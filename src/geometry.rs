use egui::{Pos2, Vec2};

/// Minimum number of dots used to draw a circle outline.
pub const MIN_CIRCLE_DOTS: usize = 32;

/// Arrow wings are this many times the line thickness.
pub const ARROW_WING_SCALE: f32 = 4.0;

/// Angle between the reversed shaft and each arrow wing (30 degrees).
pub const ARROW_WING_ANGLE: f32 = std::f32::consts::PI / 6.0;

/// Shapes are never rendered thinner than this.
pub const MIN_SHAPE_THICKNESS: f32 = 2.0;

/// Maximum gap between stored points of a stroke with the given width.
pub fn interpolation_spacing(width: f32) -> f32 {
    width / 2.0
}

/// Produces the points to append when the pointer moves from `previous` to `next`.
///
/// Points are spaced no farther apart than `spacing`, with `next` always being the
/// last point emitted. A spacing of 1 or less disables subdivision, and a zero-length
/// move emits nothing.
pub fn interpolate(previous: Pos2, next: Pos2, spacing: f32) -> Vec<Pos2> {
    if spacing <= 1.0 {
        return vec![next];
    }

    // f64 so long moves don't accumulate rounding error in the step positions
    let dx = (next.x - previous.x) as f64;
    let dy = (next.y - previous.y) as f64;
    let distance = dx.hypot(dy);
    if distance == 0.0 {
        return Vec::new();
    }

    let steps = (distance / spacing as f64).floor() as usize;
    if steps < 1 {
        return vec![next];
    }

    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Pos2::new(
                (previous.x as f64 + dx * t) as f32,
                (previous.y as f64 + dy * t) as f32,
            )
        })
        .collect()
}

/// Appends the interpolated path from the last point of `points` to `next`.
pub fn append_interpolated(points: &mut Vec<Pos2>, next: Pos2, spacing: f32) {
    match points.last() {
        Some(&last) => points.extend(interpolate(last, next, spacing)),
        None => points.push(next),
    }
}

/// Thickness a shape outline is rendered with.
pub fn shape_thickness(width: f32) -> f32 {
    width.max(MIN_SHAPE_THICKNESS)
}

/// Radius of each dot used to emulate a line of the given thickness.
pub fn dot_radius(thickness: f32) -> f32 {
    (thickness / 2.0).max(1.0)
}

/// Centers of the dots that make up a thick line from `start` to `end`.
///
/// Always yields at least three dots so even a zero-length segment paints something.
pub fn line_dots(start: Pos2, end: Pos2, thickness: f32) -> Vec<Pos2> {
    let radius = dot_radius(thickness);
    let length = start.distance(end);
    let steps = ((length / radius) as usize).max(2);

    (0..=steps)
        .map(|i| start.lerp(end, i as f32 / steps as f32))
        .collect()
}

/// Centers of the dots that make up a circle outline.
pub fn circle_dots(center: Pos2, radius: f32) -> Vec<Pos2> {
    if radius < 1.0 {
        return Vec::new();
    }

    let count = MIN_CIRCLE_DOTS.max((radius * 2.0) as usize);
    (0..count)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / count as f32;
            center + radius * Vec2::angled(angle)
        })
        .collect()
}

/// End points of the two arrowhead wings at `tip`, or `None` when the shaft is
/// too short to have a direction.
pub fn arrow_wings(tail: Pos2, tip: Pos2, thickness: f32) -> Option<[Pos2; 2]> {
    let shaft = tip - tail;
    let length = shaft.length();
    if length < 1.0 {
        return None;
    }

    let dir = shaft / length;
    let size = thickness * ARROW_WING_SCALE;
    let (sin, cos) = ARROW_WING_ANGLE.sin_cos();

    let left = Pos2::new(
        tip.x - size * (dir.x * cos + dir.y * sin),
        tip.y - size * (dir.y * cos - dir.x * sin),
    );
    let right = Pos2::new(
        tip.x - size * (dir.x * cos - dir.y * sin),
        tip.y - size * (dir.y * cos + dir.x * sin),
    );
    Some([left, right])
}
