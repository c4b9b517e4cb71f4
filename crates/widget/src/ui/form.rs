//! Forms and submit events.

/// A named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// A form with ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    id: String,
    fields: Vec<FormField>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field with an initial value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current value of field `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Empty every field and return how many there are.
    pub fn reset(&mut self) -> usize {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.fields.len()
    }
}

/// A form submission about to happen.
///
/// Unless [`SubmitEvent::prevent_default`] is called, the host performs its
/// default submission.
#[derive(Debug)]
pub struct SubmitEvent<'a> {
    target: &'a mut Form,
    default_prevented: bool,
}

impl<'a> SubmitEvent<'a> {
    #[must_use]
    pub fn new(target: &'a mut Form) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Cancel the host's default submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The form being submitted.
    pub fn target(&mut self) -> &mut Form {
        self.target
    }
}
