// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY line series.

/// Largest-Triangle-Three-Buckets downsampling for XY series.
/// Returns up to `threshold` points preserving overall shape; the first and
/// last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 {
        return Vec::new();
    }
    if threshold >= n || n <= 2 {
        return points.to_vec();
    }
    if threshold == 1 {
        return vec![points[0]];
    }
    if threshold == 2 {
        return vec![points[0], points[n - 1]];
    }

    let buckets = threshold - 2;
    let bucket_size = (n - 2) as f64 / buckets as f64;
    let bucket_bounds = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);
    // index of the point picked in the previous bucket
    let mut a = 0usize;

    for i in 0..buckets {
        let (start, end) = bucket_bounds(i);

        // average of the next bucket, or the last point for the final bucket
        let (avg_x, avg_y) = if i + 1 < buckets {
            let (ns, ne) = bucket_bounds(i + 1);
            let count = (ne - ns) as f64;
            let (sx, sy) = points[ns..ne]
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            (sx / count, sy / count)
        } else {
            points[n - 1]
        };

        let (a_x, a_y) = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for (k, &(x, y)) in points.iter().enumerate().take(end).skip(start) {
            // twice the triangle area; the factor does not change the argmax
            let area = ((a_x - avg_x) * (y - a_y) - (a_x - x) * (avg_y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
