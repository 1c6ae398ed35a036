use polars::prelude::*;
use serde::Serialize;

/// Global min/max of the payload column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Width of the bounds in kilograms
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Min and max of a numeric series using polars, ignoring nulls
///
/// Returns `None` for an empty or all-null series, or one that cannot be cast to f64.
pub fn payload_bounds(series: &Series) -> Option<PayloadBounds> {
    if series.is_empty() {
        return None;
    }

    let series_f64 = series.cast(&DataType::Float64).ok()?;
    let chunked = series_f64.f64().ok()?;

    Some(PayloadBounds {
        min: chunked.min()?,
        max: chunked.max()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_bounds() {
        let data = vec![525.0, 0.0, 9600.0, 2490.0];
        let series = Series::new("test".into(), &data);
        let bounds = payload_bounds(&series).unwrap();

        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 9600.0);
        assert_eq!(bounds.span(), 9600.0);
        assert!(bounds.contains(9600.0));
        assert!(!bounds.contains(9600.5));
        assert_eq!(bounds.clamp(-3.0), 0.0);
    }

    #[test]
    fn test_integer_series_is_cast() {
        let data = vec![3i64, 1, 2];
        let series = Series::new("ints".into(), &data);
        let bounds = payload_bounds(&series).unwrap();

        assert_eq!(bounds, PayloadBounds { min: 1.0, max: 3.0 });
    }

    #[test]
    fn test_empty_series() {
        let data: Vec<f64> = vec![];
        let series = Series::new("test".into(), &data);

        assert!(payload_bounds(&series).is_none());
    }
}
