//! Field-descriptor flattening.
//!
//! Each numeric report detail declares a static table pairing its external
//! metric name with an accessor. Flattening walks the table in declaration
//! order; it never validates or normalizes.

/// Static metadata mapping one numeric field to its external metric name.
pub struct FieldDescriptor<T> {
    /// Name used in emitted metrics (e.g. `dns`).
    pub name: &'static str,
    /// Reads the field's value.
    pub get: fn(&T) -> i64,
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor").field("name", &self.name).finish()
    }
}

/// Implemented by report details that carry numeric metric fields.
pub trait Flatten: Sized + 'static {
    /// Declared fields, in emission order.
    const FIELDS: &'static [FieldDescriptor<Self>];
}

/// Yield one `(external name, value)` pair per declared field.
pub fn flatten<T: Flatten>(detail: &T) -> impl Iterator<Item = (&'static str, i64)> + '_ {
    T::FIELDS.iter().map(move |f| (f.name, (f.get)(detail)))
}
