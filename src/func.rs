//! Small combinators for building stage functions out of smaller ones.
//!
//! ```
//! use ironstream::*;
//! use ironstream::func::{and, not, starts_with};
//! use ironstream::testing::friends;
//!
//! let p = Pipeline::default();
//! let picked = from_vec(&p, friends())
//!     .filter(and(starts_with("S"), not(|name: &String| name.len() > 4)))
//!     .collect_seq()?;
//! assert_eq!(picked, vec!["Sara".to_string()]);
//! # Ok::<(), ironstream::Error>(())
//! ```

/// A unary transformation that can be stored and composed.
pub type Transform<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Chain `fns` left to right into one function. An empty list yields identity.
///
/// ```
/// use ironstream::func::{Transform, compose_all};
///
/// let brighten: Transform<u8> = Box::new(|c| c.saturating_add(40));
/// let halve: Transform<u8> = Box::new(|c| c / 2);
/// let filter = compose_all(vec![brighten, halve]);
/// assert_eq!(filter(100), 70);
/// assert_eq!(compose_all::<u8>(Vec::new())(7), 7);
/// ```
#[must_use]
pub fn compose_all<T>(fns: Vec<Transform<T>>) -> impl Fn(T) -> T + Send + Sync {
    move |input: T| fns.iter().fold(input, |acc, f| f(acc))
}

/// Predicate factory: does the text start with `prefix`?
///
/// The returned closure owns its copy of `prefix`, so it can outlive the argument.
#[must_use]
pub fn starts_with<S>(prefix: &str) -> impl Fn(&S) -> bool + Clone + Send + Sync + use<S>
where
    S: AsRef<str> + ?Sized,
{
    let prefix = prefix.to_owned();
    move |text: &S| text.as_ref().starts_with(prefix.as_str())
}

/// Both predicates hold. `q` is not evaluated when `p` fails.
pub fn and<T, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |t: &T| p(t) && q(t)
}

/// Negate a predicate.
pub fn not<T, P>(p: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |t: &T| !p(t)
}
