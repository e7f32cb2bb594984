/// Implement the debug representation for a model type: `{field: value, ...}`
/// listing set fields in declared order and skipping unset ones entirely.
macro_rules! display_fields {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut sep = "";
                f.write_str("{")?;
                $(
                    if let Some(value) = self.$field.as_ref() {
                        write!(f, "{}{}: ", sep, stringify!($field))?;
                        crate::types::display::DisplayValue::fmt_value(value, f)?;
                        sep = ", ";
                    }
                )+
                let _ = sep;
                f.write_str("}")
            }
        }

        impl crate::types::display::DisplayValue for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}
