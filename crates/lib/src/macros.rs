/// Helper macro to build an input processor out of another one.
///
/// ```
/// use lib::from_input;
/// use lib::input::Columns;
///
/// struct Pair(i64, i64);
///
/// from_input!(|(Columns(a, b)): Columns<i64, i64>| -> Pair {
///     Ok(Pair(a, b))
/// });
/// ```
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        $crate::from_input!(@impl [$value] $ty, $out, $block);
    };

    (|($pat:pat): $ty:ty| -> $out:ident $block:block) => {
        $crate::from_input!(@impl [$pat] $ty, $out, $block);
    };

    (@impl [$pat:pat] $ty:ty, $out:ident, $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn error_kind() -> $crate::input::ErrorKind {
                <$ty as $crate::input::FromInput>::error_kind()
            }

            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|value: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    let $pat = value;
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(e)))
                    }
                }
            }
        }
    };
}
