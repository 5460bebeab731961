// Tags outside this list and the dedicated kinds render as `text`.
const NATIVE_INPUT_TYPES: &[&str] = &[
    "tel",
    "url",
    "search",
    "time",
    "datetime-local",
    "month",
    "week",
    "color",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Password,
    Number,
    Date,
    File,
    Files,
    /// Any other tag, including the empty tag of an entry without `:`.
    Other(String),
}

impl FieldKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "date" => Self::Date,
            "file" => Self::File,
            "files" => Self::Files,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn input_type(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::File | Self::Files => "file",
            Self::Other(tag) if NATIVE_INPUT_TYPES.contains(&tag.as_str()) => tag.as_str(),
            Self::Text | Self::Textarea | Self::Other(_) => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn parse(raw: &str) -> Self {
        let (name, tag) = raw.split_once(':').unwrap_or((raw, ""));
        Self {
            name: name.to_string(),
            kind: FieldKind::from_tag(tag),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Form {
    pub fn parse<S: AsRef<str>>(name: &str, raw_fields: &[S]) -> Self {
        Self {
            name: name.to_string(),
            fields: raw_fields
                .iter()
                .map(|raw| Field::parse(raw.as_ref()))
                .collect(),
        }
    }

    pub fn has_file_fields(&self) -> bool {
        self.fields
            .iter()
            .any(|field| matches!(field.kind, FieldKind::File | FieldKind::Files))
    }
}
