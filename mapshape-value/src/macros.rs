/// Builds a [`Map`](crate::Map) from `key => value` pairs.
///
/// Keys may be anything that converts into a `String`; values anything
/// [`Value`](crate::Value) converts from, including nested `map!`s.
///
/// ```
/// use mapshape_value::{Value, map};
///
/// let m = map! {
///     "id" => 1u64,
///     "job" => map! { "squad" => "Platform" },
/// };
/// assert_eq!(m.len(), 2);
/// assert_eq!(m["id"], Value::U64(1));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(::core::convert::Into::into($key), $crate::Value::from($value));
        )+
        map
    }};
}
