#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
use crate::utils::Float;
use num_traits::AsPrimitive;
use rand::distributions::Open01;
use rand::prelude::{Distribution, Rng};
pub use rand_xoshiro::Xoroshiro128Plus as PRng;

fn polynomial<F: Float>(z: F, coeff: &[f64]) -> F
where
    f64: AsPrimitive<F>,
{
    let n = coeff.len();
    if n == 0 {
        return F::ZERO;
    }
    let mut sum: F = coeff[n - 1].as_();
    for i in (0..n - 1).rev() {
        sum = sum.mul_add(z, coeff[i].as_());
    }
    sum
}

const SHAW_P: &[f64] = &[
    1.2533141359896652729,
    3.0333178251950406994,
    2.3884158540184385711,
    0.73176759583280610539,
    0.085838533424158257377,
    0.0034424140686962222423,
    0.000036313870818023761224,
    4.3304513840364031401e-8,
];

const SHAW_Q: &[f64] = &[
    1.0,
    2.9202373175993672857,
    2.9373357991677046357,
    1.2356513216582148689,
    0.2168237095066675527,
    0.014494272424798068406,
    0.00030617264753008793976,
    1.3141263119543315917e-6,
];

/// Fast Non-branching Standard Normal inverse CDF
/// To transform into a normal distribution with stddev=a and mean=b
/// x = b + a * norminv(u)
/// precision is ~1E-9 when 1E-15 <= u <= 1 - 1E-15
/// precision is ~1E-6 when 1E-22 <= u <= 1 - 1E-22
/// precision is ~1E-3 when 1E-30 <= u <= 1 - 1E-30
///
/// Source:
/// arXiv:0901.0638 [q-fin.CP]
/// Quantile Mechanics II: Changes of Variables in Monte Carlo methods and GPU-Optimized Normal Quantiles
/// William T. Shaw, Thomas Luu, Nick Brickman
pub fn norminv<F: Float>(x: F) -> F
where
    f64: AsPrimitive<F>,
{
    let half: F = (0.5f64).as_();
    let two: F = (2.0f64).as_();
    let u = if x > half { F::ONE - x } else { x };
    let v = -F::ln(two * u);
    let p = polynomial(v, SHAW_P);
    let q = polynomial(v, SHAW_Q);
    (v * p / q).copysign(x - half)
}

/// Depth to the next interaction for a process with linear attenuation `rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential<F> {
    pub rate: F,
}

impl<F> Exponential<F> {
    pub const fn new(rate: F) -> Self { Self { rate } }
}

impl<F: Float> Distribution<F> for Exponential<F>
where
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        // drawn unconditionally, a closed channel still advances the stream
        let u: F = Open01.sample(rng);
        if self.rate > F::ZERO {
            -u.ln() / self.rate
        } else {
            F::infinity()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal<F> {
    pub mean:    F,
    pub std_dev: F,
}

impl<F> Normal<F> {
    pub const fn new(mean: F, std_dev: F) -> Self { Self { mean, std_dev } }
}

impl<F: Float> Distribution<F> for Normal<F>
where
    Open01: Distribution<F>,
    f64: AsPrimitive<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let u: F = Open01.sample(rng);
        self.mean + self.std_dev * norminv(u)
    }
}
