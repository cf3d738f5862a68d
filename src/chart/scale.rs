// ---------------------------------------------------------------------------
// Axis extents and nice rounding
// ---------------------------------------------------------------------------

/// Inclusive data range along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Smallest extent covering all finite values, or `None` if there are
    /// none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Extent> {
        let mut extent: Option<Extent> = None;
        for v in values {
            if !v.is_finite() {
                continue;
            }
            extent = Some(match extent {
                None => Extent { min: v, max: v },
                Some(e) => Extent {
                    min: e.min.min(v),
                    max: e.max.max(v),
                },
            });
        }
        extent
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen to round boundaries so axis ticks land on even values.
    ///
    /// The endpoints move outward to multiples of a 1-2-5 step sized for
    /// about `target_ticks` divisions. A single-value extent has no span to
    /// round, so it is padded by one unit on each side instead.
    pub fn nice(&self, target_ticks: usize) -> Extent {
        if self.span() <= 0.0 {
            return Extent {
                min: self.min - 1.0,
                max: self.max + 1.0,
            };
        }
        let step = nice_step(self.span(), target_ticks);
        Extent {
            min: (self.min / step).floor() * step,
            max: (self.max / step).ceil() * step,
        }
    }
}

/// Round `range / target_steps` up to the nearest 1, 2, or 5 times a power
/// of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_skips_non_finite() {
        let e = Extent::of([3.0, f64::NAN, -1.0, f64::INFINITY, 2.0]).unwrap();
        assert_eq!(e, Extent { min: -1.0, max: 3.0 });
    }

    #[test]
    fn extent_of_nothing_is_none() {
        assert_eq!(Extent::of([]), None);
        assert_eq!(Extent::of([f64::NAN]), None);
    }

    #[test]
    fn nice_rounds_outward_to_even_steps() {
        let e = Extent { min: 0.0, max: 637_000.0 }.nice(10);
        assert_eq!(e, Extent { min: 0.0, max: 700_000.0 });
    }

    #[test]
    fn nice_keeps_already_round_year_spans() {
        let e = Extent { min: 2017.0, max: 2024.0 }.nice(10);
        assert_eq!(e, Extent { min: 2017.0, max: 2024.0 });
    }

    #[test]
    fn nice_never_shrinks() {
        let raw = Extent { min: 123.4, max: 9_876.5 };
        let niced = raw.nice(10);
        assert!(niced.min <= raw.min);
        assert!(niced.max >= raw.max);
    }

    #[test]
    fn single_value_extent_is_padded() {
        let e = Extent { min: 2020.0, max: 2020.0 }.nice(10);
        assert_eq!(e, Extent { min: 2019.0, max: 2021.0 });
    }

    #[test]
    fn nice_step_follows_the_125_ladder() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(14.0, 10), 2.0);
        assert_eq!(nice_step(43.0, 10), 5.0);
        assert_eq!(nice_step(70.0, 10), 10.0);
        assert_eq!(nice_step(637_000.0, 10), 100_000.0);
    }
}
