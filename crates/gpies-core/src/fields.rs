//! Uniform access to the scalar fields of a model record
//!
//! Records expose their `GpFloat` fields as an ordered list. The order is
//! fixed per record type and is the order fixtures are populated in.

use crate::{GpFloat, GpiesError, GpiesResult};

/// A record made of named `GpFloat` fields in a fixed order.
pub trait ScalarFields {
    /// Record name used in error messages
    const RECORD_NAME: &'static str;

    /// Field names, in field order
    const FIELD_NAMES: &'static [&'static str];

    /// Field values, in field order
    fn field_values(&self) -> Vec<GpFloat>;

    /// Mutable references to every field, in field order
    fn field_values_mut(&mut self) -> Vec<&mut GpFloat>;

    /// `(name, value)` pairs, in field order
    fn fields(&self) -> Vec<(&'static str, GpFloat)> {
        Self::FIELD_NAMES
            .iter()
            .copied()
            .zip(self.field_values())
            .collect()
    }

    /// Look up a field by name
    fn field(&self, name: &str) -> GpiesResult<GpFloat> {
        let index = field_index::<Self>(name)?;
        Ok(self.field_values()[index])
    }

    /// Overwrite a field by name
    fn set_field(&mut self, name: &str, value: GpFloat) -> GpiesResult<()> {
        let index = field_index::<Self>(name)?;
        *self.field_values_mut().swap_remove(index) = value;
        Ok(())
    }
}

fn field_index<F: ScalarFields + ?Sized>(name: &str) -> GpiesResult<usize> {
    F::FIELD_NAMES
        .iter()
        .position(|field| *field == name)
        .ok_or_else(|| GpiesError::UnknownField {
            record: F::RECORD_NAME,
            field: name.to_string(),
        })
}

/// Implement [`ScalarFields`] for a struct from its field list.
///
/// The listed order becomes the record's field order.
#[macro_export]
macro_rules! impl_scalar_fields {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::ScalarFields for $ty {
            const RECORD_NAME: &'static str = stringify!($ty);
            const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),+];

            fn field_values(&self) -> Vec<$crate::GpFloat> {
                vec![$(self.$field),+]
            }

            fn field_values_mut(&mut self) -> Vec<&mut $crate::GpFloat> {
                vec![$(&mut self.$field),+]
            }
        }
    };
}
