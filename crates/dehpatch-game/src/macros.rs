// macros.rs — accessor boilerplate for range-checked integer fields

/// Expands `field / setter: "Label", min, max;` entries into a getter and a
/// validating setter that returns the receiver for chaining.
macro_rules! int_fields {
    ($($(#[$meta:meta])* $field:ident / $setter:ident : $label:literal, $min:expr, $max:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> i32 {
                self.$field
            }

            pub fn $setter(&mut self, value: i32) -> dehpatch_common::PatchResult<&mut Self> {
                dehpatch_common::error::check_range($label, $min, $max, value)?;
                self.$field = value;
                Ok(self)
            }
        )*
    };
}

/// Same as `int_fields!` for sparse template fields: the getter returns
/// `Option<i32>` and the setter stores `Some`.
macro_rules! opt_int_fields {
    ($($(#[$meta:meta])* $field:ident / $setter:ident : $label:literal, $min:expr, $max:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> Option<i32> {
                self.$field
            }

            pub fn $setter(&mut self, value: i32) -> dehpatch_common::PatchResult<&mut Self> {
                dehpatch_common::error::check_range($label, $min, $max, value)?;
                self.$field = Some(value);
                Ok(self)
            }
        )*
    };
}

/// Copy every populated template field onto the same-named entity field.
macro_rules! apply_set_fields {
    ($src:expr, $dst:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(v) = &$src.$field {
                $dst.$field = v.clone();
            }
        )*
    };
}
