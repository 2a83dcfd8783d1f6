// Lagged-series derivation
/// Row offsets for the three lag columns. Offsets are row positions, not
/// calendar periods; they only line up with days when the series itself has
/// daily spacing.
pub const LAG_OFFSETS: [usize; 3] = [365, 730, 1095];

/// The three lag values for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagValues {
    pub lag1: f64,
    pub lag2: f64,
    pub lag3: f64,
}

/// Shift `series` forward by `positions` rows. Slots with no source row
/// (the first `positions` of them) take `fill`.
pub fn shift(series: &[f64], positions: usize, fill: f64) -> Vec<f64> {
    (0..series.len())
        .map(|i| if i < positions { fill } else { series[i - positions] })
        .collect()
}

/// Derive the three lag columns for every row of `series`.
pub fn lag_values(series: &[f64], fill: f64) -> Vec<LagValues> {
    let lag1 = shift(series, LAG_OFFSETS[0], fill);
    let lag2 = shift(series, LAG_OFFSETS[1], fill);
    let lag3 = shift(series, LAG_OFFSETS[2], fill);

    (0..series.len())
        .map(|i| LagValues {
            lag1: lag1[i],
            lag2: lag2[i],
            lag3: lag3[i],
        })
        .collect()
}
