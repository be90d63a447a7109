//! Headless slider value model
//!
//! Keeps the handle values of a linear range slider, applies the step, margin,
//! limit and padding constraints, and notifies bound handlers when values change.
//! Rendering and pointer interaction belong to whatever front end drives it.

mod events;
mod format;
mod options;

pub use events::{EVENT_SET, EVENT_UPDATE, EventHandler, EventRegistry};
pub use format::Formatter;
pub use options::{Padding, Range, SliderOptions, SliderUpdate};

use tracing::debug;

use crate::error::{FormatError, SliderError};

/// A range slider's values and event bindings
///
/// # Examples
/// ```
/// use slider_format::slider::{Range, Slider, SliderOptions};
///
/// let mut slider = Slider::create(
///     SliderOptions::new([20.0, 80.0], Range::new(0.0, 100.0)).with_step(10.0),
/// )
/// .unwrap();
///
/// slider.set(&[None, Some(64.0)]).unwrap();
/// assert_eq!(slider.get_raw(), &[20.0, 60.0]);
/// assert_eq!(slider.get().unwrap(), vec!["20.00", "60.00"]);
/// ```
pub struct Slider {
    options: SliderOptions,
    values: Vec<f64>,
    events: EventRegistry,
}

impl Slider {
    /// Validate the options and place every handle at its (constrained) start value
    pub fn create(options: SliderOptions) -> Result<Self, SliderError> {
        options.validate()?;
        let start: Vec<Option<f64>> = options.start.iter().copied().map(Some).collect();
        let mut slider = Self {
            values: options.start.clone(),
            options,
            events: EventRegistry::new(),
        };
        slider.place_handles(&start);
        debug!(options = ?slider.options, values = ?slider.values, "created slider");
        Ok(slider)
    }

    /// The options currently in effect
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn handle_count(&self) -> usize {
        self.values.len()
    }

    /// Current values, formatted
    pub fn get(&self) -> Result<Vec<String>, FormatError> {
        self.values
            .iter()
            .map(|value| self.options.format.to(*value))
            .collect()
    }

    /// Current values, unformatted
    pub fn get_raw(&self) -> &[f64] {
        &self.values
    }

    /// Move handles to new values; `None` leaves a handle where it is
    ///
    /// Entries past the handle count are ignored. Fires `update` for every handle
    /// and `set` for every handle that was given a value.
    pub fn set(&mut self, values: &[Option<f64>]) -> Result<(), SliderError> {
        self.set_values(values, true)
    }

    /// Like [`Slider::set`], reading each value through the slider's formatter
    pub fn set_text(&mut self, values: &[Option<&str>]) -> Result<(), SliderError> {
        let parsed = values
            .iter()
            .map(|text| text.map(|text| self.options.format.from(text)).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        self.set(&parsed)
    }

    /// Return every handle to its start value
    pub fn reset(&mut self) -> Result<(), SliderError> {
        let start: Vec<Option<f64>> = self.options.start.iter().copied().map(Some).collect();
        self.set_values(&start, true)
    }

    /// Change options on a live slider and re-apply the current values
    ///
    /// When the update carries `start` values, those are applied instead. The handle
    /// count is fixed at creation, so `start` must keep the same length.
    pub fn update_options(
        &mut self,
        update: SliderUpdate,
        fire_set_event: bool,
    ) -> Result<(), SliderError> {
        let updated = update.applied_to(&self.options);
        updated.validate()?;
        if updated.start.len() != self.values.len() {
            return Err(SliderError::invalid(
                "start",
                format!(
                    "handle count is fixed at {}, got {} start values",
                    self.values.len(),
                    updated.start.len()
                ),
            ));
        }

        let requested: Vec<Option<f64>> = match &update.start {
            Some(start) => start.iter().copied().map(Some).collect(),
            None => self.values.iter().copied().map(Some).collect(),
        };
        self.options = updated;
        debug!(options = ?self.options, "updated slider options");
        self.set_values(&requested, fire_set_event)
    }

    /// Bind a handler to `event` or `event.namespace`
    ///
    /// Binding an `update` handler fires `update` for every handle right away.
    pub fn on(
        &mut self,
        event: &str,
        handler: impl Fn(&[String], usize, &[f64]) + 'static,
    ) -> Result<(), SliderError> {
        self.events.on(event, Box::new(handler));
        if event.split('.').next() == Some(EVENT_UPDATE) {
            let formatted = self.get()?;
            for handle in 0..self.values.len() {
                self.events
                    .emit(EVENT_UPDATE, &formatted, handle, &self.values);
            }
        }
        Ok(())
    }

    /// Unbind handlers; see [`EventRegistry::off`] for how keys match
    pub fn off(&mut self, event: &str) -> usize {
        self.events.off(event)
    }

    /// Tear the slider down, dropping every handler, and return the final values
    pub fn destroy(mut self) -> Vec<f64> {
        self.events.clear();
        debug!(values = ?self.values, "destroyed slider");
        self.values
    }

    fn set_values(
        &mut self,
        values: &[Option<f64>],
        fire_set_event: bool,
    ) -> Result<(), SliderError> {
        self.place_handles(values);

        let formatted = self.get()?;
        for handle in 0..self.values.len() {
            self.events
                .emit(EVENT_UPDATE, &formatted, handle, &self.values);
            let was_given = matches!(values.get(handle), Some(Some(_)));
            if fire_set_event && was_given {
                self.events.emit(EVENT_SET, &formatted, handle, &self.values);
            }
        }
        Ok(())
    }

    /// Run the constraint passes over the requested values
    fn place_handles(&mut self, requested: &[Option<f64>]) {
        let count = self.values.len();

        // First pass, left to right, only looking at already placed handles
        for handle in 0..count {
            let candidate = match requested.get(handle).copied().flatten() {
                Some(value) if value.is_finite() => value,
                _ => self.values[handle],
            };
            let candidate = candidate.clamp(self.options.range.min, self.options.range.max);
            self.values[handle] = self.constrain(handle, candidate, true, false);
        }

        // Now that every handle has a base value, apply constraints both ways
        let passes = if count == 1 { 1 } else { count - 1 };
        for _ in 0..passes {
            for handle in 0..count {
                self.values[handle] = self.constrain(handle, self.values[handle], true, true);
            }
        }
    }

    fn constrain(&self, handle: usize, candidate: f64, look_backward: bool, look_forward: bool) -> f64 {
        let options = &self.options;
        let count = self.values.len();
        let margin = options.margin.unwrap_or(0.0);
        let mut to = candidate;

        if count > 1 {
            if look_backward && handle > 0 {
                let previous = self.values[handle - 1];
                to = to.max(previous + margin);
                if let Some(limit) = options.limit {
                    to = to.min(previous + limit);
                }
            }
            if look_forward && handle + 1 < count {
                let next = self.values[handle + 1];
                to = to.min(next - margin);
                if let Some(limit) = options.limit {
                    to = to.max(next - limit);
                }
            }
        }

        if let Some(padding) = options.padding {
            if handle == 0 {
                to = to.max(options.range.min + padding.lower);
            }
            if handle + 1 == count {
                to = to.min(options.range.max - padding.upper);
            }
        }

        if let Some(step) = options.step {
            let steps = ((to - options.range.min) / step).round();
            to = options.range.min + steps * step;
        }

        to.clamp(options.range.min, options.range.max)
    }
}
