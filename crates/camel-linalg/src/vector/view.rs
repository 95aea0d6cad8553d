//! Named element access (`v.x`, `v.y`, ...) for vectors with 2 to 4 elements.
//!
//! Each vector dereferences to a view struct with one public field per element. The view is laid
//! out exactly like the vector's backing array, so the field `v.y` *is* `v[1]`, and writes go
//! straight into the vector.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $view:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[doc = concat!(
                "Field view of a ", $n, "-element [`Vector`], reached through `Deref`. ",
                "Cannot be constructed directly."
            )]
            #[repr(C)]
            pub struct $view<T> {
                $(pub $field: T,)+
                _sealed: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &$view<T> {
                    let ptr = self.as_slice().as_ptr().cast::<$view<T>>();
                    // SAFETY: the view is `repr(C)` with exactly `$n` fields of type `T` and a
                    // trailing zero-sized field, so it has the size, alignment and field offsets
                    // of `[T; $n]`.
                    unsafe { &*ptr }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut $view<T> {
                    let ptr = self.as_mut_slice().as_mut_ptr().cast::<$view<T>>();
                    // SAFETY: as for `deref`; the exclusive borrow of `self` covers the view.
                    unsafe { &mut *ptr }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}

#[cfg(test)]
mod tests {
    use std::mem;

    use crate::{vec2, vec3, vec4};

    use super::*;

    #[test]
    fn layout_matches_array() {
        assert_eq!(mem::size_of::<XYZ<f64>>(), mem::size_of::<[f64; 3]>());
        assert_eq!(mem::align_of::<XYZW<u8>>(), mem::align_of::<[u8; 4]>());
    }

    #[test]
    fn fields_alias_elements() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));

        let mut p = vec3(0.0, 0.0, 0.0);
        p.y = 2.5;
        p.z -= 1.0;
        assert_eq!(p, vec3(0.0, 2.5, -1.0));

        let mut q = vec2('a', 'b');
        let view = &mut *q;
        mem::swap(&mut view.x, &mut view.y);
        assert_eq!(q[0], 'b');
    }
}
