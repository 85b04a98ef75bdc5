/// A value that walks back and forth between two bounds at a fixed step.
///
/// When a step would cross a bound the value is clamped to it and the
/// direction flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    value: f64,
    step: f64,
    min: f64,
    max: f64,
    rising: bool,
}

impl Oscillator {
    /// Swings across `[-range, range]`, starting at zero.
    pub fn symmetric(step: f64, range: f64) -> Self {
        Self::new(step, -range, range)
    }

    /// Swings across `[0, range]`, starting at zero.
    pub fn positive(step: f64, range: f64) -> Self {
        Self::new(step, 0.0, range)
    }

    fn new(step: f64, min: f64, max: f64) -> Self {
        Self {
            value: 0.0,
            step: step.abs(),
            min,
            max,
            rising: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn tick(&mut self) -> f64 {
        if self.rising {
            self.value += self.step;
            if self.value >= self.max {
                self.value = self.max;
                self.rising = false;
            }
        } else {
            self.value -= self.step;
            if self.value <= self.min {
                self.value = self.min;
                self.rising = true;
            }
        }
        self.value
    }
}
