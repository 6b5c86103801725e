use thiserror::Error;

/// A submitted form left a required field absent or empty.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required field `{0}`")]
pub struct MissingField(pub &'static str);

/// Takes a submitted value, treating an empty string like an absent one.
///
/// Whitespace counts as content; only the empty string is rejected.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, MissingField> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_present_values_verbatim() {
        assert_eq!(required("nome", Some(" Bruno ".to_owned())), Ok(" Bruno ".to_owned()));
        assert_eq!(required("nome", Some(" ".to_owned())), Ok(" ".to_owned()));
    }

    #[test]
    fn rejects_absent_and_empty() {
        assert_eq!(required("nickname", None), Err(MissingField("nickname")));
        assert_eq!(required("nickname", Some(String::new())), Err(MissingField("nickname")));
        assert_eq!(
            MissingField("nickname").to_string(),
            "missing required field `nickname`"
        );
    }
}
