use serde_yaml::{Mapping, Value};

/// The runtime shape of a decoded YAML node.
///
/// Compose files have no schema we can rely on: `environment` may be a map
/// or a list, `ports` may mix strings with long-form objects, and any key
/// may be missing. Extraction inspects a node once through `Shape` and
/// branches on the tag instead of probing the raw `Value`.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Map(&'a Mapping),
    Sequence(&'a [Value]),
    Scalar(&'a Value),
    Absent,
}

impl<'a> Shape<'a> {
    /// `null` is treated the same as a missing key; tags are looked through.
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Shape::Absent,
            Some(Value::Mapping(map)) => Shape::Map(map),
            Some(Value::Sequence(seq)) => Shape::Sequence(seq),
            Some(Value::Tagged(tagged)) => Shape::of(Some(&tagged.value)),
            Some(scalar) => Shape::Scalar(scalar),
        }
    }

    /// Look up a key of a map node. Anything else has no fields.
    pub fn field(&self, key: &str) -> Shape<'a> {
        match *self {
            Shape::Map(map) => Shape::of(map.get(key)),
            _ => Shape::Absent,
        }
    }

    /// The string value of a scalar node, if it is a YAML string.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Shape::Scalar(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display text for a scalar node, `None` for everything else.
    pub fn text(&self) -> Option<String> {
        match *self {
            Shape::Scalar(value) => scalar_text(value),
            _ => None,
        }
    }
}

/// Render a scalar the way it reads in the file.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Any node as display text. Nested maps and lists fall back to their YAML
/// serialization without the trailing newline.
pub fn display_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| {
        serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_shape_tags() {
        let doc = yaml("a: {x: 1}\nb: [1, 2]\nc: hello\nd: null\n");
        let root = Shape::of(Some(&doc));

        assert!(matches!(root, Shape::Map(_)));
        assert!(matches!(root.field("a"), Shape::Map(_)));
        assert!(matches!(root.field("b"), Shape::Sequence(s) if s.len() == 2));
        assert_eq!(root.field("c").as_str(), Some("hello"));
        assert!(matches!(root.field("d"), Shape::Absent));
        assert!(matches!(root.field("missing"), Shape::Absent));
    }

    #[test]
    fn test_field_on_non_map_is_absent() {
        let doc = yaml("- a\n- b\n");
        assert!(matches!(Shape::of(Some(&doc)).field("services"), Shape::Absent));
        assert!(matches!(Shape::Absent.field("services"), Shape::Absent));
    }

    #[test]
    fn test_tagged_value_is_looked_through() {
        let doc = yaml("v: !custom plain\n");
        assert_eq!(Shape::of(Some(&doc)).field("v").as_str(), Some("plain"));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&yaml("true")).as_deref(), Some("true"));
        assert_eq!(scalar_text(&yaml("42")).as_deref(), Some("42"));
        assert_eq!(scalar_text(&yaml("1.5")).as_deref(), Some("1.5"));
        assert_eq!(scalar_text(&yaml("~")).as_deref(), Some(""));
        assert_eq!(scalar_text(&yaml("'08'")).as_deref(), Some("08"));
        assert_eq!(scalar_text(&yaml("[1]")), None);
    }

    #[test]
    fn test_number_is_not_a_string() {
        let doc = yaml("port: 80\n");
        let field = Shape::of(Some(&doc)).field("port");
        assert_eq!(field.as_str(), None);
        assert_eq!(field.text().as_deref(), Some("80"));
    }
}
