//! Adaptive Dormand–Prince 5(4) integration with dense output.
//!
//! The solver advances with error-controlled steps and evaluates the
//! solution on a uniform output grid with cubic Hermite interpolation,
//! so the sample spacing never constrains the step size.

use crate::core::oscillator::Oscillator;
use crate::domain::model::{Solution, State};
use crate::utils::error::{Result, SimError};

/// Butcher nodes.
const C: [f64; 7] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

/// Stage coefficients; the last row doubles as the 5th-order weights (FSAL).
const A: [[f64; 6]; 7] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0],
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
        0.0,
    ],
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
        0.0,
    ],
    [
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
];

/// Difference between the 5th- and 4th-order weights; `e = h·Σ E[j]·k[j]`.
const E: [f64; 7] = [
    71.0 / 57600.0,
    0.0,
    -71.0 / 16695.0,
    71.0 / 1920.0,
    -17253.0 / 339200.0,
    22.0 / 525.0,
    -1.0 / 40.0,
];

const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;
const SAFETY: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    pub rtol: f64,
    pub atol: f64,
    pub max_steps: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-8,
            atol: 1e-10,
            max_steps: 1_000_000,
        }
    }
}

/// Solve the IVP from `init` over `[0, t]`, sampled `freq` times per second.
///
/// Returns `floor(t·freq) + 1` samples on a uniform grid from 0 to `t`.
///
/// ```
/// use clocksim::core::oscillator::Pendulum;
/// use clocksim::core::solver::solve;
///
/// let pendulum = Pendulum::new(0.1);
/// let solution = solve(&pendulum, [0.0, 1.0], 10.0, 50.0).unwrap();
/// assert_eq!(solution.len(), 501);
/// assert!((solution.t[1] - 0.02).abs() < 1e-12);
/// ```
pub fn solve<M>(model: &M, init: [f64; 2], t: f64, freq: f64) -> Result<Solution>
where
    M: Oscillator + ?Sized,
{
    solve_with(model, init, t, freq, SolverOptions::default())
}

pub fn solve_with<M>(
    model: &M,
    init: [f64; 2],
    t: f64,
    freq: f64,
    opts: SolverOptions,
) -> Result<Solution>
where
    M: Oscillator + ?Sized,
{
    if !(t > 0.0 && t.is_finite()) || !(freq > 0.0 && freq.is_finite()) {
        return Err(SimError::SimulationError {
            message: format!("invalid time span or frequency (t={t}, freq={freq})"),
        });
    }
    if !init[0].is_finite() || !init[1].is_finite() {
        return Err(SimError::SimulationError {
            message: "initial state is not finite".to_string(),
        });
    }

    let n = (t * freq).floor() as usize + 1;
    let grid = |i: usize| {
        if n == 1 {
            0.0
        } else {
            t * i as f64 / (n - 1) as f64
        }
    };
    let grid_tol = 1e-9 * t.max(1.0);

    let mut out_t = Vec::with_capacity(n);
    let mut states = Vec::with_capacity(n);
    out_t.push(0.0);
    states.push(State::from(init));

    let mut t_now = 0.0;
    let mut y = init;
    let mut f = model.derivative(t_now, y);
    let mut h: f64 = (t / 100.0).min(1e-2);
    let min_step = 1e-14 * t.max(1.0);

    let mut next_idx = 1;
    let mut steps = 0;

    while next_idx < n {
        if steps >= opts.max_steps {
            return Err(SimError::SimulationError {
                message: format!("no convergence within {} steps", opts.max_steps),
            });
        }
        if h < min_step {
            return Err(SimError::SimulationError {
                message: format!("step size underflow at t = {t_now:.6}"),
            });
        }
        steps += 1;

        if t_now + h > t {
            h = t - t_now;
        }

        let mut k = [[0.0f64; 2]; 7];
        k[0] = f;
        let mut y_new = y;
        for s in 1..7 {
            let mut ys = y;
            for (j, kj) in k.iter().enumerate().take(s) {
                ys[0] += h * A[s][j] * kj[0];
                ys[1] += h * A[s][j] * kj[1];
            }
            k[s] = model.derivative(t_now + C[s] * h, ys);
            if s == 6 {
                y_new = ys;
            }
        }

        let mut err = 0.0;
        for i in 0..2 {
            let e: f64 = h * (0..7).map(|j| E[j] * k[j][i]).sum::<f64>();
            let scale = opts.atol + opts.rtol * y[i].abs().max(y_new[i].abs());
            err += (e / scale).powi(2);
        }
        let err = (err / 2.0).sqrt();

        if err <= 1.0 {
            let t_new = t_now + h;
            if !y_new[0].is_finite() || !y_new[1].is_finite() {
                return Err(SimError::SimulationError {
                    message: format!("state diverged near t = {t_new:.6}"),
                });
            }

            while next_idx < n {
                let ts = grid(next_idx);
                if ts > t_new + grid_tol {
                    break;
                }
                let sample = hermite(t_now, t_new, y, y_new, f, k[6], ts.min(t_new));
                out_t.push(ts);
                states.push(State::from(sample));
                next_idx += 1;
            }

            t_now = t_new;
            y = y_new;
            f = k[6];
        }

        let factor = if err == 0.0 {
            MAX_FACTOR
        } else {
            (SAFETY * err.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
        };
        h *= factor;
    }

    Ok(Solution { t: out_t, states })
}

/// Cubic Hermite interpolation over one accepted step.
fn hermite(t0: f64, t1: f64, y0: [f64; 2], y1: [f64; 2], f0: [f64; 2], f1: [f64; 2], ts: f64) -> [f64; 2] {
    let h = t1 - t0;
    let u = ((ts - t0) / h).clamp(0.0, 1.0);
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;

    let mut out = [0.0; 2];
    for i in 0..2 {
        out[i] = h00 * y0[i] + h * h10 * f0[i] + h01 * y1[i] + h * h11 * f1[i];
    }
    out
}
