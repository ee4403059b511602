/// For an enum whose variants each wrap the same-named type from module `$m`,
/// derives the `From` conversions and a `kind()` naming the variant as scene
/// files spell it.
#[macro_export]
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident => $kind:literal),*]) => {
        $(impl From<$m::$var> for $t {
            fn from(m: $m::$var) -> Self {
                $t::$var(m)
            }
        })*

        impl $t {
            pub fn kind(&self) -> &'static str {
                match self {
                    $($t::$var(_) => $kind,)*
                }
            }
        }
    };
}
