/// Plot a series as ASCII art, `width` columns by `height` rows of plot
/// area plus a title, max/min lines and a point count.
pub fn plot_series(values: &[f32], title: &str, width: usize, height: usize) -> String {
    if values.is_empty() || width < 10 || height < 5 {
        return format!("{}: Invalid data or dimensions", title);
    }

    let min_val = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max_val = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if (max_val - min_val).abs() < f32::EPSILON {
        return format!("{}: All {} values are {:.4}", title, values.len(), min_val);
    }

    let mut plot = vec![vec![' '; width]; height];

    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for cell in plot[height - 1].iter_mut() {
        *cell = '-';
    }
    plot[height - 1][0] = '+';

    // Data lives in columns 2..width and rows 0..height-1.
    let columns = width - 2;
    let rows = height - 1;
    let last_index = (values.len() - 1).max(1) as f32;
    let y_scale = (rows - 1) as f32 / (max_val - min_val);

    for (i, &value) in values.iter().enumerate() {
        let x = 2 + ((i as f32 / last_index) * (columns - 1) as f32).round() as usize;
        let level = ((value - min_val) * y_scale).round() as usize;
        let y = rows - 1 - level.min(rows - 1);
        plot[y][x.min(width - 1)] = '*';
    }

    let mut output = format!("{}\n", title);
    output.push_str(&format!("Max: {:.4}\n", max_val));
    for row in &plot {
        output.push_str(&row.iter().collect::<String>());
        output.push('\n');
    }
    output.push_str(&format!("Min: {:.4}\n", min_val));
    output.push_str(&format!("Points: {}\n", values.len()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_series_is_summarised() {
        let out = plot_series(&[3.0, 3.0, 3.0], "Score", 20, 6);
        assert_eq!(out, "Score: All 3 values are 3.0000");
    }

    #[test]
    fn test_rejects_tiny_canvas() {
        assert!(plot_series(&[1.0, 2.0], "Score", 4, 6).contains("Invalid"));
        assert!(plot_series(&[], "Score", 20, 6).contains("Invalid"));
    }

    #[test]
    fn test_extremes_land_on_corners() {
        let out = plot_series(&[0.0, 10.0], "Score", 12, 6);
        let rows: Vec<&str> = out.lines().skip(2).take(6).collect();
        assert_eq!(rows.len(), 6);
        // Max at top right, min just above the axis at the left.
        assert_eq!(rows[0].chars().nth(11), Some('*'));
        assert_eq!(rows[4].chars().nth(2), Some('*'));
        assert!(rows[5].starts_with("+-"));
        assert!(out.ends_with("Points: 2\n"));
    }
}
