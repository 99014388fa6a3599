//! Sequential function composition.

/// Chains unary functions left to right.
///
/// `compose!(f1, f2, ..., fn)(x)` is `fn(...f2(f1(x)))`: the first function sees the outer
/// argument and each later one consumes the previous result. `compose!()` is the identity.
///
/// Every stage is moved into the returned closure once, at construction. The result is an
/// ordinary `Fn` closure that can be called any number of times, and it is `Clone`,
/// `Send` and `Sync` whenever all of its stages are.
///
/// ```
/// use pointwise::compose;
///
/// let id = compose!();
/// assert_eq!(id(7), 7);
///
/// let digits = compose!(|x: i32| x * 10, |x: i32| x.to_string(), |s: String| s.len());
/// assert_eq!(digits(123), 4);
/// ```
///
/// Stage types must line up; a mismatch fails to compile rather than at evaluation time:
///
/// ```compile_fail
/// use pointwise::compose;
///
/// let broken = compose!(|x: i32| x + 1, |s: &str| s.len());
/// broken(1);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };

    ($f:expr $(,)?) => {{
        let f = $f;
        move |x| f(x)
    }};

    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let f = $f;
        let rest = $crate::compose!($($rest),+);
        move |x| rest(f(x))
    }};
}

#[cfg(test)]
#[path = "../../tests/unit/combinator/compose.rs"]
mod tests;
