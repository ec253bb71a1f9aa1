//! Over/under probabilities for game markets
//!
//! - binomial tails for continent counts over a fixed number of rounds
//! - normal tails for player point totals
//! - "appears at least once" for country props

use serde::{Deserialize, Serialize};

/// Fair probabilities for both sides of a two-way market
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailProbs {
    pub over: f64,
    pub under: f64,
}

/// n choose k as a float
fn choose(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * f64::from(n - k + i) / f64::from(i))
}

/// P(X == k) for X ~ Binomial(n, p)
fn binomial_pmf(n: u32, k: u32, p: f64) -> f64 {
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    choose(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}

/// Tail probabilities for a half-point hook on a binomial count
///
/// `k = floor(hook)` clamped to `[0, n]`; under is `P(X <= k)` and over is
/// `P(X >= k + 1)`. A 2.5 hook over 5 rounds means "3 or more" vs "2 or fewer".
pub fn binomial_tail_probs(n: u32, p: f64, hook: f64) -> TailProbs {
    if p.is_nan() {
        return TailProbs {
            over: 0.0,
            under: 0.0,
        };
    }
    if n == 0 {
        return TailProbs {
            over: 0.0,
            under: 1.0,
        };
    }

    let p = p.clamp(0.0, 1.0);
    let k = (hook.floor().max(0.0) as u32).min(n);

    let under: f64 = (0..=k).map(|j| binomial_pmf(n, j, p)).sum();
    let over: f64 = (k + 1..=n).map(|j| binomial_pmf(n, j, p)).sum();

    TailProbs {
        over: over.clamp(0.0, 1.0),
        under: under.clamp(0.0, 1.0),
    }
}

/// Standard normal CDF approximation (Abramowitz and Stegun 7.1.26)
pub fn normal_cdf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Probability that a normally distributed score lands over/under `threshold`
///
/// A non-positive `sigma` makes the score deterministic at `mu`.
pub fn normal_tail_probs(mu: f64, sigma: f64, threshold: f64) -> TailProbs {
    let cdf = if sigma <= 0.0 {
        if threshold >= mu {
            1.0
        } else {
            0.0
        }
    } else {
        normal_cdf((threshold - mu) / sigma)
    };

    let over = (1.0 - cdf).max(0.0);
    TailProbs {
        over,
        under: 1.0 - over,
    }
}

/// Probability that an event with per-round probability `p` shows up in
/// `rounds` rounds (`over` = YES, `under` = NO)
pub fn appearance_probs(per_round: f64, rounds: u32) -> TailProbs {
    let p = if per_round.is_nan() {
        0.0
    } else {
        per_round.clamp(0.0, 1.0)
    };
    let never = (1.0 - p).powi(rounds as i32);
    TailProbs {
        over: 1.0 - never,
        under: never,
    }
}
