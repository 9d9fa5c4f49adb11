/// Right-hand side of a second-order oscillator IVP with state `[σ, σ̇]`.
pub trait Oscillator: Send + Sync {
    /// Derivative `[σ̇, σ̈]` of the state at time `t`.
    fn derivative(&self, t: f64, y: [f64; 2]) -> [f64; 2];
}

/// Simple pendulum with linear drag: `σ̈ = -σ - k·σ̇`.
///
/// ```
/// use clocksim::core::oscillator::{Oscillator, Pendulum};
///
/// let pendulum = Pendulum::new(0.1);
/// let [dsigma, ddsigma] = pendulum.derivative(0.0, [0.0, 1.0]);
/// assert_eq!(dsigma, 1.0);
/// assert_eq!(ddsigma, -0.1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pendulum {
    pub drag: f64,
}

impl Pendulum {
    pub fn new(drag: f64) -> Self {
        Self { drag }
    }
}

impl Oscillator for Pendulum {
    fn derivative(&self, _t: f64, y: [f64; 2]) -> [f64; 2] {
        let [sigma, dsigma] = y;
        [dsigma, -sigma - self.drag * dsigma]
    }
}

/// Pendulum with an idealised escapement.
///
/// The escapement gives the pendulum a push at each end of the swing,
/// letting it run indefinitely (like a clock) despite the drag. The push
/// is modelled as two Gaussian lobes in phase space, one per swing end,
/// of opposite sign:
///
/// `σ̈ += q · (peak(0.4) - peak(-0.4))` with
/// `peak(c) = exp(-20·((-σ - c)² + (σ̇ - c)²))`.
#[derive(Debug, Clone, Copy)]
pub struct Escapement {
    pub drag: f64,
    pub kick: f64,
}

impl Escapement {
    pub fn new(drag: f64, kick: f64) -> Self {
        Self { drag, kick }
    }

    /// Acceleration contributed by the escapement at phase-space point (σ, σ̇).
    pub fn kick_accel(&self, sigma: f64, dsigma: f64) -> f64 {
        let peak = |offset: f64| {
            let d = (-sigma - offset).powi(2) + (dsigma - offset).powi(2);
            (-20.0 * d).exp()
        };
        self.kick * (peak(0.4) - peak(-0.4))
    }
}

impl Oscillator for Escapement {
    fn derivative(&self, t: f64, y: [f64; 2]) -> [f64; 2] {
        let [dsigma, ddsigma] = Pendulum::new(self.drag).derivative(t, y);
        [dsigma, ddsigma + self.kick_accel(y[0], y[1])]
    }
}
