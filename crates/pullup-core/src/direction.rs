use crate::Vec2;

/// Cardinal direction of a pan, taken from its dominant velocity axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, PanDirection::Up | PanDirection::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

/// Classify a velocity (points/second, y grows downward).
///
/// The vertical axis wins only when strictly larger, so equal magnitudes are
/// treated as horizontal. Returns `None` when the dominant component is zero,
/// which includes a velocity of `(0, 0)`.
pub fn pan_direction(velocity: Vec2) -> Option<PanDirection> {
    let vertical = velocity.y.abs() > velocity.x.abs();
    if vertical {
        if velocity.y < 0.0 {
            Some(PanDirection::Up)
        } else if velocity.y > 0.0 {
            Some(PanDirection::Down)
        } else {
            None
        }
    } else if velocity.x > 0.0 {
        Some(PanDirection::Right)
    } else if velocity.x < 0.0 {
        Some(PanDirection::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_axes_map_unambiguously() {
        assert_eq!(pan_direction(Vec2::new(0.0, -10.0)), Some(PanDirection::Up));
        assert_eq!(pan_direction(Vec2::new(0.0, 10.0)), Some(PanDirection::Down));
        assert_eq!(pan_direction(Vec2::new(-3.0, 0.0)), Some(PanDirection::Left));
        assert_eq!(pan_direction(Vec2::new(3.0, 0.0)), Some(PanDirection::Right));
    }

    #[test]
    fn zero_velocity_is_indeterminate() {
        assert_eq!(pan_direction(Vec2::ZERO), None);
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(pan_direction(Vec2::new(40.0, -41.0)), Some(PanDirection::Up));
        assert_eq!(pan_direction(Vec2::new(-90.0, 20.0)), Some(PanDirection::Left));
    }

    #[test]
    fn ties_resolve_horizontal() {
        assert_eq!(pan_direction(Vec2::new(5.0, 5.0)), Some(PanDirection::Right));
        assert_eq!(pan_direction(Vec2::new(-5.0, 5.0)), Some(PanDirection::Left));
    }

    #[test]
    fn every_sample_classifies_to_a_cardinal_or_none() {
        let samples = [-100.0f32, -1.0, -0.5, 0.0, 0.5, 1.0, 100.0];
        for &x in &samples {
            for &y in &samples {
                match pan_direction(Vec2::new(x, y)) {
                    Some(d) if d.is_vertical() => assert!(y.abs() > x.abs()),
                    Some(_) => assert!(x.abs() >= y.abs() && x != 0.0),
                    None => assert!(x == 0.0 && y == 0.0),
                }
            }
        }
    }
}
