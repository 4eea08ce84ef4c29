use super::*;

/// Width grows linearly with size: `per_char * size * chars`.
struct LinearMetric {
    per_char: f32,
    calls: Vec<f32>,
}

impl LinearMetric {
    fn new(per_char: f32) -> Self {
        Self {
            per_char,
            calls: Vec::new(),
        }
    }
}

impl TextMeasure for LinearMetric {
    fn measure_width(&mut self, text: &str, size_px: f32) -> AssetGenResult<f32> {
        self.calls.push(size_px);
        Ok(self.per_char * size_px * text.chars().count() as f32)
    }
}

#[test]
fn returns_target_when_it_already_fits() {
    let mut m = LinearMetric::new(0.5);
    let size = fit_font_size(&mut m, "Ntfy me", 10_000, 140).unwrap();
    assert_eq!(size, 140);
    assert_eq!(m.calls, vec![140.0]);
}

#[test]
fn picks_largest_even_step_that_fits() {
    // 7 chars * 0.5 => width = 3.5 * size; 3.5 * 84 = 294 <= 300 < 3.5 * 86 = 301.
    let mut m = LinearMetric::new(0.5);
    let size = fit_font_size(&mut m, "Ntfy me", 300, 140).unwrap();
    assert_eq!(size, 84);
    assert!(m.measure_width("Ntfy me", 84.0).unwrap() <= 300.0);
    assert!(m.measure_width("Ntfy me", 86.0).unwrap() > 300.0);
}

#[test]
fn width_equal_to_budget_counts_as_fitting() {
    let mut m = LinearMetric::new(1.0);
    // "ab" at 50 => width 100.
    assert_eq!(fit_font_size(&mut m, "ab", 100, 50).unwrap(), 50);
}

#[test]
fn falls_back_to_floor_without_measuring_it() {
    let mut m = LinearMetric::new(1.0);
    let size = fit_font_size(&mut m, "Ntfy me", 5, 20).unwrap();
    assert_eq!(size, FONT_FLOOR_PX);
    assert_eq!(m.calls, vec![20.0, 18.0, 16.0, 14.0, 12.0]);
}

#[test]
fn negative_budget_falls_back_to_floor() {
    let mut m = LinearMetric::new(0.1);
    assert_eq!(fit_font_size(&mut m, "x", -4, 40).unwrap(), FONT_FLOOR_PX);
}

#[test]
fn target_at_or_below_floor_returns_floor() {
    let mut m = LinearMetric::new(1.0);
    assert_eq!(fit_font_size(&mut m, "x", 1_000, 10).unwrap(), FONT_FLOOR_PX);
    assert_eq!(fit_font_size(&mut m, "x", 1_000, 4).unwrap(), FONT_FLOOR_PX);
    assert!(m.calls.is_empty());
}

#[test]
fn fitting_is_deterministic() {
    let mut a = LinearMetric::new(0.55);
    let mut b = LinearMetric::new(0.55);
    let first = fit_font_size(&mut a, "Ntfy me", 343, 140).unwrap();
    let second = fit_font_size(&mut b, "Ntfy me", 343, 140).unwrap();
    assert_eq!(first, second);
    assert_eq!(a.calls, b.calls);
}
