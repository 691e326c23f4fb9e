use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{ManagerTable, NumericColumn};

// ---------------------------------------------------------------------------
// Color scale: return value → Color32
// ---------------------------------------------------------------------------

/// Maps return values onto a red→green hue ramp spanning the observed range
/// of all return columns.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build the scale from every return column in the table, skipping NaN.
    pub fn for_returns(table: &ManagerTable) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rec in &table.records {
            for col in NumericColumn::ALL.iter().filter(|c| c.is_return()) {
                let v = col.value(rec);
                if v.is_nan() {
                    continue;
                }
                min = min.min(v);
                max = max.max(v);
            }
        }
        if !min.is_finite() || !max.is_finite() {
            // empty table, any value maps to the midpoint hue
            return ColorScale { min: 0.0, max: 0.0 };
        }
        ColorScale { min, max }
    }

    /// Look up the colour for a return value. NaN renders gray.
    pub fn color_for(&self, value: f64) -> Color32 {
        if value.is_nan() {
            return Color32::GRAY;
        }
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        // hue 0 (red) at the observed minimum, 120 (green) at the maximum
        let hsl = Hsl::new(t as f32 * 120.0, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ManagerRecord;

    fn table(returns: &[f64]) -> ManagerTable {
        let records = returns
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                ManagerRecord::from_raw(
                    format!("C{i}"),
                    format!("经理{i}"),
                    100.0,
                    10.0,
                    5.0,
                    0.8,
                    r,
                    r,
                    r,
                )
            })
            .collect();
        ManagerTable::new(records)
    }

    #[test]
    fn low_returns_are_red_high_returns_are_green() {
        let scale = ColorScale::for_returns(&table(&[-0.3, 0.0, 0.25]));
        let low = scale.color_for(-0.3);
        let high = scale.color_for(0.25);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }

    #[test]
    fn nan_renders_gray() {
        let scale = ColorScale::for_returns(&table(&[0.0, 0.1]));
        assert_eq!(scale.color_for(f64::NAN), Color32::GRAY);
    }

    #[test]
    fn degenerate_ranges_pick_the_midpoint() {
        let flat = ColorScale::for_returns(&table(&[0.1, 0.1]));
        let mid = flat.color_for(0.1);
        assert_ne!(mid, Color32::GRAY);

        let empty = ColorScale::for_returns(&ManagerTable::new(Vec::new()));
        assert_eq!(empty.color_for(0.5), flat.color_for(0.1));
    }
}
