#[allow(unused_imports)]
pub(crate) use num_traits::real::Real;

pub trait Float: 'static + num_traits::Float {
    const ZERO: Self;
    const ONE: Self;
}

impl Float for f32 {
    const ONE: Self = 1f32;
    const ZERO: Self = 0f32;
}

impl Float for f64 {
    const ONE: Self = 1f64;
    const ZERO: Self = 0f64;
}

pub trait BoolExt {
    fn if_else<T>(self, true_val: T, false_val: T) -> T;
}

impl BoolExt for bool {
    fn if_else<T>(self, true_val: T, false_val: T) -> T {
        if self {
            true_val
        } else {
            false_val
        }
    }
}
