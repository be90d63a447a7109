//! Slider value options
//!
//! Only the options that change which values a slider can hold live here.

use std::fmt;
use std::sync::Arc;

use crate::error::SliderError;
use crate::slider::format::Formatter;
use crate::format_spec::FormatSpec;

/// The value range of a linear slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// How close the first and last handle may come to the range edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub lower: f64,
    pub upper: f64,
}

impl Padding {
    /// The same padding on both edges
    pub fn both(padding: f64) -> Self {
        Self {
            lower: padding,
            upper: padding,
        }
    }
}

/// Options a slider is created with
#[derive(Clone)]
pub struct SliderOptions {
    /// Start value of every handle; the length sets the handle count
    pub start: Vec<f64>,
    pub range: Range,
    /// Handles jump between multiples of `step` from `range.min`
    pub step: Option<f64>,
    /// Minimum distance between neighbouring handles
    pub margin: Option<f64>,
    /// Maximum distance between neighbouring handles
    pub limit: Option<f64>,
    pub padding: Option<Padding>,
    /// Formatter used for `get` and event values
    pub format: Arc<dyn Formatter>,
}

impl SliderOptions {
    /// Options with the given start values and range, two-decimal output and no constraints
    pub fn new(start: impl Into<Vec<f64>>, range: Range) -> Self {
        Self {
            start: start.into(),
            range,
            step: None,
            margin: None,
            limit: None,
            padding: None,
            format: Arc::new(FormatSpec::default()),
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_format(mut self, format: impl Formatter + 'static) -> Self {
        self.format = Arc::new(format);
        self
    }

    /// Check every option, reporting the first problem
    pub fn validate(&self) -> Result<(), SliderError> {
        let Range { min, max } = self.range;
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderError::invalid("range", "'min' and 'max' must be finite"));
        }
        if min >= max {
            return Err(SliderError::invalid(
                "range",
                format!("'min' ({min}) must be less than 'max' ({max})"),
            ));
        }

        if self.start.is_empty() {
            return Err(SliderError::invalid("start", "at least one handle is required"));
        }
        if let Some(value) = self.start.iter().find(|v| !v.is_finite()) {
            return Err(SliderError::invalid(
                "start",
                format!("start value {value} is not finite"),
            ));
        }

        if let Some(step) = self.step {
            if !step.is_finite() || step <= 0.0 {
                return Err(SliderError::invalid("step", format!("{step} is not a positive number")));
            }
        }

        let span = self.range.span();
        for (option, value) in [("margin", self.margin), ("limit", self.limit)] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(SliderError::invalid(option, format!("{value} is negative or not finite")));
                }
                if value > span {
                    return Err(SliderError::invalid(
                        option,
                        format!("{value} exceeds the range span {span}"),
                    ));
                }
            }
        }
        if let (Some(margin), Some(limit)) = (self.margin, self.limit) {
            if limit < margin {
                return Err(SliderError::invalid(
                    "limit",
                    format!("{limit} is smaller than margin {margin}"),
                ));
            }
        }

        if let Some(Padding { lower, upper }) = self.padding {
            if !(lower.is_finite() && upper.is_finite()) || lower < 0.0 || upper < 0.0 {
                return Err(SliderError::invalid("padding", "must be non-negative and finite"));
            }
            if lower + upper > span {
                return Err(SliderError::invalid(
                    "padding",
                    format!("{} exceeds the range span {span}", lower + upper),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderOptions")
            .field("start", &self.start)
            .field("range", &self.range)
            .field("step", &self.step)
            .field("margin", &self.margin)
            .field("limit", &self.limit)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

/// Options that may change on a live slider; `None` keeps the current value
#[derive(Clone, Default)]
pub struct SliderUpdate {
    pub start: Option<Vec<f64>>,
    pub range: Option<Range>,
    pub step: Option<f64>,
    pub margin: Option<f64>,
    pub limit: Option<f64>,
    pub padding: Option<Padding>,
    pub format: Option<Arc<dyn Formatter>>,
}

impl SliderUpdate {
    /// Apply this update to a copy of `options`
    pub(crate) fn applied_to(&self, options: &SliderOptions) -> SliderOptions {
        let mut updated = options.clone();
        if let Some(start) = &self.start {
            updated.start = start.clone();
        }
        if let Some(range) = self.range {
            updated.range = range;
        }
        if self.step.is_some() {
            updated.step = self.step;
        }
        if self.margin.is_some() {
            updated.margin = self.margin;
        }
        if self.limit.is_some() {
            updated.limit = self.limit;
        }
        if self.padding.is_some() {
            updated.padding = self.padding;
        }
        if let Some(format) = &self.format {
            updated.format = Arc::clone(format);
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SliderOptions {
        SliderOptions::new([20.0, 80.0], Range::new(0.0, 100.0))
    }

    fn rejected_option(options: SliderOptions) -> &'static str {
        match options.validate() {
            Err(SliderError::InvalidOption { option, .. }) => option,
            other => panic!("expected an invalid option, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_options() {
        assert!(base().with_step(5.0).with_margin(10.0).with_limit(50.0).validate().is_ok());
    }

    #[test]
    fn test_range_checks() {
        assert_eq!(rejected_option(SliderOptions::new([1.0], Range::new(5.0, 5.0))), "range");
        assert_eq!(rejected_option(SliderOptions::new([1.0], Range::new(9.0, 5.0))), "range");
        assert_eq!(
            rejected_option(SliderOptions::new([1.0], Range::new(0.0, f64::INFINITY))),
            "range"
        );
    }

    #[test]
    fn test_start_checks() {
        assert_eq!(rejected_option(SliderOptions::new(Vec::new(), Range::new(0.0, 1.0))), "start");
        assert_eq!(rejected_option(SliderOptions::new([f64::NAN], Range::new(0.0, 1.0))), "start");
    }

    #[test]
    fn test_constraint_checks() {
        assert_eq!(rejected_option(base().with_step(0.0)), "step");
        assert_eq!(rejected_option(base().with_margin(-1.0)), "margin");
        assert_eq!(rejected_option(base().with_limit(200.0)), "limit");
        assert_eq!(rejected_option(base().with_margin(30.0).with_limit(10.0)), "limit");
        assert_eq!(rejected_option(base().with_padding(Padding::both(60.0))), "padding");
    }
}
