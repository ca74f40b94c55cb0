//! Tracer configuration.
//!
//! Only corner bearings (2, 6, 10, 14, 18, 22) are affected. Along a corner
//! the line runs exactly through a hexagon vertex, touching the two
//! hexagons on either side of it.

/// How a tracer reports corner bearings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LosConfig {
    /// Report the two flanking hexagons and their edges on every corner hop.
    /// Default: true.
    pub corner_expanded: bool,

    /// Report the vertex between two hexagons on a collapsed corner hop.
    /// Only consulted when `corner_expanded` is false. Default: false.
    pub include_middle_edge_on_corner: bool,
}

impl Default for LosConfig {
    fn default() -> Self {
        Self {
            corner_expanded: true,
            include_middle_edge_on_corner: false,
        }
    }
}

impl LosConfig {
    /// Corner hops collapse to the hexagons on the line itself.
    #[must_use]
    pub fn hexagons_only() -> Self {
        Self {
            corner_expanded: false,
            include_middle_edge_on_corner: false,
        }
    }

    /// Every hexagon, edge and vertex the line touches.
    #[must_use]
    pub fn full() -> Self {
        Self {
            corner_expanded: true,
            include_middle_edge_on_corner: true,
        }
    }

    #[must_use]
    pub fn with_corner_expanded(mut self, expanded: bool) -> Self {
        self.corner_expanded = expanded;
        self
    }

    #[must_use]
    pub fn with_middle_edge_on_corner(mut self, include: bool) -> Self {
        self.include_middle_edge_on_corner = include;
        self
    }

    /// Whether a corner hop emits the point between its two hexagons.
    pub const fn emits_corner_middle(&self) -> bool {
        self.corner_expanded || self.include_middle_edge_on_corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expands_corners() {
        let config = LosConfig::default();
        assert!(config.corner_expanded);
        assert!(!config.include_middle_edge_on_corner);
        assert!(config.emits_corner_middle());
    }

    #[test]
    fn presets() {
        assert!(!LosConfig::hexagons_only().emits_corner_middle());
        assert_eq!(
            LosConfig::full(),
            LosConfig::default().with_middle_edge_on_corner(true)
        );
    }

    #[test]
    fn builders_compose() {
        let config = LosConfig::default()
            .with_corner_expanded(false)
            .with_middle_edge_on_corner(true);
        assert!(!config.corner_expanded);
        assert!(config.include_middle_edge_on_corner);
        assert!(config.emits_corner_middle());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: LosConfig = serde_json::from_str(r#"{"corner_expanded":false}"#).unwrap();
        assert_eq!(config, LosConfig::hexagons_only());
    }
}
