// File: crates/schedule-core/src/grid.rs
// Summary: Grid/tick layout helpers and label decimation rules.

/// Horizontal gridlines drawn across the plot area (top and bottom included).
pub const HORIZONTAL_LINES: usize = 5;
/// Upper bound on vertical gridlines, whatever the schedule length.
pub const MAX_VERTICAL_LINES: usize = 24;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Index step between vertical gridlines: `max(1, floor(n / 24))`.
pub fn vertical_step(n: usize) -> usize {
    (n / MAX_VERTICAL_LINES).max(1)
}

/// Indices that get a vertical gridline.
pub fn vertical_grid_indices(n: usize) -> Vec<usize> {
    (0..n).step_by(vertical_step(n)).collect()
}

/// Years between consecutive year labels; longer schedules get sparser labels.
pub fn year_step(total_years: usize) -> usize {
    if total_years > 20 {
        4
    } else if total_years > 12 {
        3
    } else {
        2
    }
}

/// Row indices that carry a year label: `(year - 1) * 12` for
/// year = 1, 1 + step, 1 + 2 * step, ... while the index is inside the schedule.
pub fn year_label_indices(n: usize) -> Vec<usize> {
    let total_years = n.div_ceil(12);
    let step = year_step(total_years);
    (1..)
        .step_by(step)
        .map(|year: usize| (year - 1) * 12)
        .take_while(|&index| index < n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(0.0, 100.0, 5);
        assert_eq!(v, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn vertical_lines_are_capped() {
        assert_eq!(vertical_step(1), 1);
        assert_eq!(vertical_step(47), 1);
        assert_eq!(vertical_step(48), 2);
        assert_eq!(vertical_step(360), 15);
        assert_eq!(vertical_grid_indices(360).len(), 24);
        assert_eq!(vertical_grid_indices(10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn year_labels_decimate_with_length() {
        assert_eq!(year_step(10), 2);
        assert_eq!(year_step(13), 3);
        assert_eq!(year_step(20), 3);
        assert_eq!(year_step(21), 4);

        // 30 years: every 4th year
        assert_eq!(year_label_indices(360), vec![0, 48, 96, 144, 192, 240, 288, 336]);
        // 5 years: every 2nd year
        assert_eq!(year_label_indices(60), vec![0, 24, 48]);
        assert_eq!(year_label_indices(1), vec![0]);
        assert!(year_label_indices(0).is_empty());
    }
}
