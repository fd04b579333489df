//! Editable properties an object exposes to the level editor.
//!
//! An object builds a fresh [`ObjectSettings`] every time the editor asks;
//! edits come back as a key plus an [`OptionValue`].

use skyline_common::{Color, ObjectError};

/// What kind of widget an option needs, with its current value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Text(String),
    Color(Color),
    IntField(i32),
    /// Pick one of `choices`; `selected` indexes into it.
    StringSelect {
        selected: usize,
        choices: Vec<&'static str>,
    },
    /// Deletes the object. Carries no value.
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectOption {
    pub label: &'static str,
    /// Field the option edits, matching the level file key.
    pub key: &'static str,
    pub kind: OptionKind,
}

impl ObjectOption {
    pub fn text(label: &'static str, key: &'static str, value: &str) -> Self {
        Self {
            label,
            key,
            kind: OptionKind::Text(value.into()),
        }
    }

    pub fn color(label: &'static str, key: &'static str, value: Color) -> Self {
        Self {
            label,
            key,
            kind: OptionKind::Color(value),
        }
    }

    pub fn int(label: &'static str, key: &'static str, value: i32) -> Self {
        Self {
            label,
            key,
            kind: OptionKind::IntField(value),
        }
    }

    pub fn select(
        label: &'static str,
        key: &'static str,
        selected: usize,
        choices: Vec<&'static str>,
    ) -> Self {
        Self {
            label,
            key,
            kind: OptionKind::StringSelect { selected, choices },
        }
    }

    pub fn remove() -> Self {
        Self {
            label: "",
            key: "",
            kind: OptionKind::Remove,
        }
    }
}

/// A value the editor writes back into an object.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Color(Color),
    Int(i32),
    Select(usize),
}

impl OptionValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Int(_) => "integer",
            Self::Select(_) => "selection",
        }
    }

    /// Error for an edit whose value kind does not fit the option.
    pub fn mismatch(&self, key: &str, expected: &str) -> ObjectError {
        ObjectError::InvalidOption {
            key: key.into(),
            reason: format!("expected {expected}, got {}", self.kind_name()),
        }
    }
}

/// Ordered option list for one object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSettings {
    /// Display name of the object class.
    pub name: String,
    pub options: Vec<ObjectOption>,
}

impl ObjectSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn push(&mut self, option: ObjectOption) {
        self.options.push(option);
    }

    pub fn find(&self, key: &str) -> Option<&ObjectOption> {
        self.options
            .iter()
            .find(|o| !key.is_empty() && o.key == key)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.label).collect()
    }
}
