//! Two-argument currying.
//!
//! [`curry2!`] turns `f(a, b)` into `|a| |b| f(a, b)`. Binding the first
//! argument once (a lookup table, a rate) yields a one-argument step that
//! can be handed straight to `map` or `chain`, with the dependency passed
//! in explicitly instead of read from a global.
//!
//! The function and the bound argument are held in `std::rc::Rc` so that the
//! partially applied closure is `Fn` and can be called any number of times.
//! Each call receives its own copy of the bound argument, which is why that
//! argument must be [`Clone`]; keep it cheap to clone (wrap large tables in
//! `Rc`/`Arc`).

/// Converts a 2-argument function into a curried form.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument must implement [`Clone`]
///
/// # Examples
///
/// ## Partial application
///
/// ```
/// use mapchain::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## Binding a dependency for a chain step
///
/// ```
/// use mapchain::control::Optional;
/// use mapchain::curry2;
/// use std::collections::HashMap;
/// use std::rc::Rc;
///
/// fn lookup(table: Rc<HashMap<&'static str, &'static str>>, key: &str) -> Optional<&'static str> {
///     Optional::from(table.get(key).copied())
/// }
///
/// let table = Rc::new(HashMap::from([("en", "mysite.com/en")]));
/// let lookup_in_table = curry2!(lookup)(table);
///
/// assert_eq!(Optional::of("en").chain(&lookup_in_table), Optional::Present("mysite.com/en"));
/// assert_eq!(Optional::of("jp").chain(&lookup_in_table), Optional::Absent);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}
