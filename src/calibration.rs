use crate::config;

/// Maps a sensor voltage to a temperature.
pub trait Calibration {
    fn apply(&self, voltage: f64) -> f64;
}

/// Straight line from `[0, vref]` volts onto `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    pub vref: f64,
    pub min: f64,
    pub max: f64,
}

impl Calibration for Linear {
    fn apply(&self, voltage: f64) -> f64 {
        (voltage / self.vref) * (self.max - self.min) + self.min
    }
}

/// `a + b·v + c·v²`
#[derive(Debug, Clone, Copy)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Calibration for Quadratic {
    fn apply(&self, voltage: f64) -> f64 {
        self.a + self.b * voltage + self.c * voltage * voltage
    }
}

/// `a + b·v + c/v²`
#[derive(Debug, Clone, Copy)]
pub struct QuadraticInverse {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Calibration for QuadraticInverse {
    fn apply(&self, voltage: f64) -> f64 {
        let inverse = if voltage == 0.0 {
            // c/0² diverges towards the sign of c, the clamp turns it into a bound
            match self.c {
                c if c > 0.0 => f64::INFINITY,
                c if c < 0.0 => f64::NEG_INFINITY,
                _ => 0.0,
            }
        } else {
            self.c / (voltage * voltage)
        };

        self.a + self.b * voltage + inverse
    }
}

/// Restricts another calibration to `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Clamped<C> {
    inner: C,
    min: f64,
    max: f64,
}

impl<C: Calibration> Clamped<C> {
    pub fn new(inner: C, min: f64, max: f64) -> Self {
        Self { inner, min, max }
    }
}

impl<C: Calibration> Calibration for Clamped<C> {
    fn apply(&self, voltage: f64) -> f64 {
        let t = self.inner.apply(voltage);
        if t.is_nan() || t < self.min {
            self.min
        } else if t > self.max {
            self.max
        } else {
            t
        }
    }
}

pub fn from_config(cfg: &config::Calibration, vref: f64) -> Box<dyn Calibration + Send> {
    let (min, max) = (cfg.temp_min, cfg.temp_max);

    match cfg.formula {
        config::Formula::Linear {
            min: low,
            max: high,
        } => Box::new(Clamped::new(
            Linear {
                vref,
                min: low,
                max: high,
            },
            min,
            max,
        )),
        config::Formula::Quadratic { a, b, c } => {
            Box::new(Clamped::new(Quadratic { a, b, c }, min, max))
        }
        config::Formula::QuadraticInverse { a, b, c } => {
            Box::new(Clamped::new(QuadraticInverse { a, b, c }, min, max))
        }
    }
}
