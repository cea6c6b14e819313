use crate::entities::TransportMode;

pub const START_COLOR: &str = "#10B981";
pub const END_COLOR: &str = "#EF4444";
pub const WAYPOINT_COLOR: &str = "#3B82F6";

const PLACE_PIN_SIZE: (u32, u32) = (25, 41);
const SELECTED_PLACE_PIN_SIZE: (u32, u32) = (35, 55);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerIcon {
    Pin {
        size: (u32, u32),
    },
    Numbered {
        number: usize,
        color: &'static str,
        size: u32,
    },
}

impl MarkerIcon {
    pub const fn place(selected: bool) -> Self {
        Self::Pin {
            size: if selected {
                SELECTED_PLACE_PIN_SIZE
            } else {
                PLACE_PIN_SIZE
            },
        }
    }

    /// Icon of the waypoint at the zero based `index` of `count` waypoints.
    pub fn waypoint(index: usize, count: usize) -> Self {
        let (color, size) = if index == 0 {
            (START_COLOR, 35)
        } else if index + 1 == count {
            (END_COLOR, 35)
        } else {
            (WAYPOINT_COLOR, 30)
        };
        Self::Numbered {
            number: index + 1,
            color,
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: Option<&'static str>,
}

/// Path between waypoints that have not been routed.
pub const STRAIGHT_LINE: LineStyle = LineStyle {
    color: WAYPOINT_COLOR,
    weight: 4,
    opacity: 0.8,
    dash_array: None,
};

pub const fn segment_style(mode: TransportMode) -> LineStyle {
    let (color, dash_array) = match mode {
        TransportMode::Walking => ("#EF4444", None),
        TransportMode::Cycling => ("#F59E0B", Some("10, 5")),
        TransportMode::Driving => ("#3B82F6", None),
        TransportMode::PublicTransport => ("#8B5CF6", Some("15, 5, 5, 5")),
        TransportMode::Mixed => ("#6B7280", Some("10, 10")),
    };
    LineStyle {
        color,
        weight: 6,
        opacity: 1.0,
        dash_array,
    }
}

pub const fn transport_symbol(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Walking => "🚶",
        TransportMode::Driving => "🚗",
        TransportMode::Cycling => "🚴",
        TransportMode::PublicTransport => "🚌",
        TransportMode::Mixed => "🔄",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoint_icons() {
        assert_eq!(
            MarkerIcon::Numbered {
                number: 1,
                color: START_COLOR,
                size: 35
            },
            MarkerIcon::waypoint(0, 3)
        );
        assert_eq!(
            MarkerIcon::Numbered {
                number: 2,
                color: WAYPOINT_COLOR,
                size: 30
            },
            MarkerIcon::waypoint(1, 3)
        );
        assert_eq!(
            MarkerIcon::Numbered {
                number: 3,
                color: END_COLOR,
                size: 35
            },
            MarkerIcon::waypoint(2, 3)
        );
    }

    #[test]
    fn selected_place_has_larger_pin() {
        assert_eq!(MarkerIcon::Pin { size: (25, 41) }, MarkerIcon::place(false));
        assert_eq!(MarkerIcon::Pin { size: (35, 55) }, MarkerIcon::place(true));
    }

    #[test]
    fn segment_styles() {
        let cycling = segment_style(TransportMode::Cycling);
        assert_eq!("#F59E0B", cycling.color);
        assert_eq!(Some("10, 5"), cycling.dash_array);
        assert_eq!(6, cycling.weight);
        assert_eq!(1.0, cycling.opacity);
        assert_eq!(None, segment_style(TransportMode::Walking).dash_array);
        assert_eq!("#EF4444", segment_style(TransportMode::Walking).color);
        assert_eq!(
            Some("15, 5, 5, 5"),
            segment_style(TransportMode::PublicTransport).dash_array
        );
        assert_eq!("#6B7280", segment_style(TransportMode::Mixed).color);
    }
}
