use std::collections::HashMap;

/// Descriptive statistics for a non-empty sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Every value sharing the highest frequency, in first-seen order.
    pub modes: Vec<f64>,
    /// Population variance (divisor = count).
    pub variance: f64,
    pub std_dev: f64,
}

impl SampleStats {
    /// Compute statistics from `values`. Returns `None` for an empty sample.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mean = mean(values);
        let variance = variance(values, mean);
        Some(SampleStats {
            count: values.len(),
            mean,
            median: median(values),
            modes: mode(values),
            variance,
            std_dev: std_dev(variance),
        })
    }
}

/// Arithmetic mean. `values` must be non-empty.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance around a precomputed `mean`.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

/// Median of a sorted copy; the caller's slice is left untouched.
pub fn median(values: &[f64]) -> f64 {
    let mut vals = values.to_vec();
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = vals.len();
    if count % 2 == 0 {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    } else {
        vals[count / 2]
    }
}

/// All values with the maximum occurrence count, in order of first appearance.
///
/// Equality is exact. When every value is unique the whole distinct set is returned.
pub fn mode(values: &[f64]) -> Vec<f64> {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut counts: Vec<(f64, usize)> = Vec::new();

    for &v in values {
        match index.get(&value_key(v)) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value_key(v), counts.len());
                counts.push((v, 1));
            }
        }
    }

    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    counts
        .into_iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| v)
        .collect()
}

// -0.0 and 0.0 are equal, so they share a key.
fn value_key(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
