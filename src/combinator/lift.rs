//! Point-wise lifting of n-ary functions.

/// Applies an n-ary function point-wise to the results of n unary functions.
///
/// `lift!(h, f1, ..., fn)(p)` is `h(f1(p), ..., fn(p))`. All `fi` take the same argument
/// type, which must be `Clone`; each stage receives its own clone of `p`. With no stages,
/// `lift!(h)` ignores its argument and returns `h()`.
///
/// The combinator comes first, followed by the stages in the order their results are
/// passed to it.
///
/// ```
/// use pointwise::lift;
///
/// let sum_and_product = lift!(|a: i32, b: i32| (a, b), |x: i32| x + x, |x: i32| x * x);
/// assert_eq!(sum_and_product(3), (6, 9));
///
/// let always = lift!(|| "same");
/// assert_eq!(always(123), "same");
/// ```
#[macro_export]
macro_rules! lift {
    ($h:expr $(,)?) => {{
        let h = $h;
        move |_| h()
    }};

    ($h:expr, $($f:expr),+ $(,)?) => {{
        let h = $h;
        $crate::__lift_stages!(h; []; $($f),+)
    }};
}

// Binds each stage to its own local (hygiene keeps the repeated `f` names apart), then
// emits the lifted closure once all stages are bound.
#[doc(hidden)]
#[macro_export]
macro_rules! __lift_stages {
    ($h:ident; [$($bound:ident)*];) => {
        move |p| $h($($bound(::core::clone::Clone::clone(&p))),*)
    };

    ($h:ident; [$($bound:ident)*]; $f:expr $(, $rest:expr)*) => {{
        let f = $f;
        $crate::__lift_stages!($h; [$($bound)* f]; $($rest),*)
    }};
}

#[cfg(test)]
#[path = "../../tests/unit/combinator/lift.rs"]
mod tests;
