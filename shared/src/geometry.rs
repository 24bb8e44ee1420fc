//! Pure SVG geometry for the prize wheel.
//!
//! Angles are in degrees, measured clockwise from the top of the wheel, which
//! is where the pointer sits.

use crate::wheel::segment_angle;

pub const WHEEL_SIZE: f64 = 546.0;
pub const RIM_INSET: f64 = 10.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.62;
pub const DIVIDER_INNER_RATIO: f64 = 0.25;
pub const HUB_RING_RATIO: f64 = 0.24;
pub const HUB_RATIO: f64 = 0.22;
pub const LABEL_LINE_HEIGHT: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0" in path data
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Closed wedge from the center out to the rim between two angles.
pub fn describe_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let sweep = end_angle - start_angle;
    if sweep >= 360.0 {
        // A single arc with identical endpoints renders nothing
        let top = polar_to_cartesian(center, radius, 0.0);
        let bottom = polar_to_cartesian(center, radius, 180.0);
        return format!(
            "M {} {} A {r} {r} 0 1 0 {} {} A {r} {r} 0 1 0 {} {} Z",
            num(top.x),
            num(top.y),
            num(bottom.x),
            num(bottom.y),
            num(top.x),
            num(top.y),
            r = num(radius),
        );
    }

    let start = polar_to_cartesian(center, radius, end_angle);
    let end = polar_to_cartesian(center, radius, start_angle);
    let large_arc = if sweep <= 180.0 { "0" } else { "1" };

    format!(
        "M {} {} L {} {} A {r} {r} 0 {} 0 {} {} Z",
        num(center.x),
        num(center.y),
        num(start.x),
        num(start.y),
        large_arc,
        num(end.x),
        num(end.y),
        r = num(radius),
    )
}

/// Layout of one wedge and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub path: String,
    pub label_anchor: Point,
}

impl SegmentGeometry {
    /// SVG `transform` that turns the label along the segment's bisector.
    pub fn label_transform(&self) -> String {
        format!(
            "rotate({}, {}, {})",
            num(self.mid_angle),
            num(self.label_anchor.x),
            num(self.label_anchor.y)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    pub radius: f64,
    pub segments: usize,
}

impl WheelLayout {
    pub fn new(size: f64, segments: usize) -> Self {
        Self {
            center: Point {
                x: size / 2.0,
                y: size / 2.0,
            },
            radius: size / 2.0 - RIM_INSET,
            segments,
        }
    }

    pub fn segment_angle(&self) -> f64 {
        segment_angle(self.segments)
    }

    pub fn segment(&self, index: usize) -> SegmentGeometry {
        let width = self.segment_angle();
        let start_angle = index as f64 * width;
        let end_angle = start_angle + width;
        let mid_angle = start_angle + width / 2.0;

        SegmentGeometry {
            index,
            start_angle,
            end_angle,
            mid_angle,
            path: describe_arc(self.center, self.radius, start_angle, end_angle),
            label_anchor: polar_to_cartesian(self.center, self.radius * LABEL_RADIUS_RATIO, mid_angle),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = SegmentGeometry> + '_ {
        (0..self.segments).map(move |index| self.segment(index))
    }

    /// Divider line on the leading edge of segment `index`, from the hub out
    /// to the rim.
    pub fn divider(&self, index: usize) -> (Point, Point) {
        let angle = index as f64 * self.segment_angle();
        (
            polar_to_cartesian(self.center, self.radius * DIVIDER_INNER_RATIO, angle),
            polar_to_cartesian(self.center, self.radius, angle),
        )
    }

    /// Dividers only make sense when there is more than one wedge.
    pub fn dividers(&self) -> Vec<(Point, Point)> {
        if self.segments < 2 {
            return Vec::new();
        }
        (0..self.segments).map(|index| self.divider(index)).collect()
    }
}

/// Splits a prize label into at most two display lines.
pub fn wrap_label(label: &str) -> Vec<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    match words.len() {
        0 | 1 => vec![label.trim().to_string()],
        2 => vec![words[0].to_string(), words[1].to_string()],
        count => {
            let mid = count.div_ceil(2);
            vec![words[..mid].join(" "), words[mid..].join(" ")]
        }
    }
}

/// Vertical `dy` for a label line, centering two-line labels on the anchor.
pub fn line_offset(line_index: usize, line_count: usize) -> f64 {
    match (line_index, line_count) {
        (0, 1) => 0.0,
        (0, _) => -LABEL_LINE_HEIGHT / 2.0,
        _ => LABEL_LINE_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_label() {
        assert_eq!(wrap_label("Free Shipping"), vec!["Free", "Shipping"]);
        assert_eq!(wrap_label("10% Off"), vec!["10%", "Off"]);
        assert_eq!(wrap_label("$100 Gift Card"), vec!["$100 Gift", "Card"]);
        assert_eq!(wrap_label("Mystery"), vec!["Mystery"]);
        assert_eq!(
            wrap_label("Chúc Bạn May Mắn Lần Sau"),
            vec!["Chúc Bạn May", "Mắn Lần Sau"]
        );
        assert_eq!(wrap_label("Better Luck Next Time"), vec!["Better Luck", "Next Time"]);
    }

    #[test]
    fn test_polar_to_cartesian_axes() {
        let center = Point { x: 100.0, y: 100.0 };
        let top = polar_to_cartesian(center, 50.0, 0.0);
        assert!((top.x - 100.0).abs() < 1e-9 && (top.y - 50.0).abs() < 1e-9);
        let right = polar_to_cartesian(center, 50.0, 90.0);
        assert!((right.x - 150.0).abs() < 1e-9 && (right.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_segments_tile_the_circle() {
        let layout = WheelLayout::new(WHEEL_SIZE, 8);
        let segments: Vec<_> = layout.segments().collect();
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[0].start_angle, 0.0);
        assert_eq!(segments[3].mid_angle, 157.5);
        assert_eq!(segments[7].end_angle, 360.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        assert_eq!(layout.radius, 263.0);
    }

    #[test]
    fn test_segment_geometry_is_deterministic() {
        let a = WheelLayout::new(WHEEL_SIZE, 6);
        let b = WheelLayout::new(WHEEL_SIZE, 6);
        assert_eq!(a.segment(4), b.segment(4));
        assert_eq!(a.divider(2), b.divider(2));
    }

    #[test]
    fn test_wedge_path() {
        let layout = WheelLayout::new(200.0, 4);
        assert_eq!(layout.segment(0).path, "M 100 100 L 190 100 A 90 90 0 0 0 100 10 Z");
        assert_eq!(layout.segment(1).label_transform(), "rotate(135, 139.457, 139.457)");
    }

    #[test]
    fn test_single_segment_is_full_circle() {
        let layout = WheelLayout::new(200.0, 1);
        let segment = layout.segment(0);
        assert_eq!(segment.end_angle, 360.0);
        assert_eq!(
            segment.path,
            "M 100 10 A 90 90 0 1 0 100 190 A 90 90 0 1 0 100 10 Z"
        );
        assert!(layout.dividers().is_empty());
    }

    #[test]
    fn test_two_segments_use_small_arc_flag() {
        let layout = WheelLayout::new(200.0, 2);
        assert!(layout.segment(1).path.contains(" 0 0 0 "));
    }

    #[test]
    fn test_line_offsets() {
        assert_eq!(line_offset(0, 1), 0.0);
        assert_eq!(line_offset(0, 2), -9.0);
        assert_eq!(line_offset(1, 2), 18.0);
    }
}
