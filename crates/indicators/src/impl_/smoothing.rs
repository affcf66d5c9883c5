//! Shared rolling-window and smoothing helpers.
//!
//! All helpers take and return full-length series and use NaN for
//! indices where the output is undefined. Window-based helpers yield a
//! value only when the whole window is finite, so NaN warmup regions
//! propagate through derived series instead of leaking partial windows.

/// Simple moving average of an arbitrary series.
pub(crate) fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if period == 0 || len < period {
        return result;
    }

    for i in (period - 1)..len {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(|v| v.is_finite()) {
            result[i] = window.iter().sum::<f64>() / period as f64;
        }
    }

    result
}

/// EMA with `ewm(span=period, adjust=False)` semantics.
///
/// Seeded at the first finite value; leading NaNs are skipped and
/// interior NaNs carry the previous value forward. Callers mask the
/// warmup region themselves via [`mask_warmup`].
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    smooth_recursive(values, 2.0 / (period as f64 + 1.0), period)
}

/// Wilder smoothing: `ewm(alpha=1/period, adjust=False)`.
pub(crate) fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    smooth_recursive(values, 1.0 / period as f64, period)
}

fn smooth_recursive(values: &[f64], alpha: f64, period: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if period == 0 || len == 0 {
        return result;
    }

    let mut prev = f64::NAN;
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            if prev.is_finite() {
                result[i] = prev;
            }
            continue;
        }

        if prev.is_finite() {
            prev = alpha * value + (1.0 - alpha) * prev;
        } else {
            prev = value;
        }
        result[i] = prev;
    }

    result
}

/// Linearly-weighted moving average (weights 1..=period within the window).
pub(crate) fn wma_series(values: &[f64], period: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if period == 0 || len < period {
        return result;
    }

    let weight_sum = (period * (period + 1)) as f64 / 2.0;
    for i in (period - 1)..len {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(|v| v.is_finite()) {
            let weighted: f64 = window
                .iter()
                .enumerate()
                .map(|(j, v)| (j + 1) as f64 * v)
                .sum();
            result[i] = weighted / weight_sum;
        }
    }

    result
}

/// Rolling maximum over `period` bars.
pub(crate) fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    rolling_fold(values, period, f64::max)
}

/// Rolling minimum over `period` bars.
pub(crate) fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    rolling_fold(values, period, f64::min)
}

fn rolling_fold(values: &[f64], period: usize, fold: fn(f64, f64) -> f64) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if period == 0 || len < period {
        return result;
    }

    for i in (period - 1)..len {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(|v| v.is_finite()) {
            let mut acc = window[0];
            for &value in &window[1..] {
                acc = fold(acc, value);
            }
            result[i] = acc;
        }
    }

    result
}

/// Rolling sum over `period` bars.
pub(crate) fn rolling_sum(values: &[f64], period: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if period == 0 || len < period {
        return result;
    }

    for i in (period - 1)..len {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(|v| v.is_finite()) {
            result[i] = window.iter().sum();
        }
    }

    result
}

/// Shifts a series forward so that `out[i] = values[i - by]`.
pub(crate) fn shift_forward(values: &[f64], by: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    for i in by..len {
        result[i] = values[i - by];
    }
    result
}

/// Masks indices before `warmup - 1` to NaN.
pub(crate) fn mask_warmup(values: &mut [f64], warmup: usize) {
    let cut = warmup.saturating_sub(1).min(values.len());
    for value in &mut values[..cut] {
        *value = f64::NAN;
    }
}
