#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Form control holding a user-editable value.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
}
