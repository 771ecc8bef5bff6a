use mote_engine::{FieldConfig, Rgba};

/// The documentation site's palette and tuning, pinned here so engine
/// default changes never restyle the site silently.
pub fn site_config() -> FieldConfig {
    FieldConfig {
        particle_count: 100,
        palette: vec![
            Rgba::new(0x0d as f32 / 255.0, 0x2a as f32 / 255.0, 0x4c as f32 / 255.0, 1.0), // deep navy
            Rgba::new(0x7b as f32 / 255.0, 0x97 as f32 / 255.0, 0xaf as f32 / 255.0, 1.0), // slate
            Rgba::new(0xcf as f32 / 255.0, 0xa2 as f32 / 255.0, 0x51 as f32 / 255.0, 1.0), // gold
        ],
        active_color: Rgba::new(
            0xf5 as f32 / 255.0,
            0xf5 as f32 / 255.0,
            0xf5 as f32 / 255.0,
            1.0,
        ),
        ..FieldConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_palette_matches_the_stylesheet() {
        let config = site_config();
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.palette[0].to_hex(), "#0d2a4c");
        assert_eq!(config.palette[1].to_hex(), "#7b97af");
        assert_eq!(config.palette[2].to_hex(), "#cfa251");
        assert_eq!(config.active_color.to_hex(), "#f5f5f5");
    }

    #[test]
    fn site_population_fills_a_laptop_viewport() {
        let config = site_config();
        // 1440x900 hero section
        assert_eq!(config.population(1440.0, 900.0), 200);
    }
}
