use serde::{Deserialize, Serialize};

/// Card label in its normalized form.
///
/// Labels arrive either as a bare color string (`"#61bd4f"`) or as an
/// object. Both deserialize into this struct; a bare color uses the color
/// itself as the label id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LabelWire")]
pub struct Label {
    pub id: String,
    pub name: Option<String>,
    pub color: String,
}

impl Label {
    pub fn from_color(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            id: color.clone(),
            name: None,
            color,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            color: color.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelWire {
    Color(String),
    Rich {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        color: String,
    },
}

impl From<LabelWire> for Label {
    fn from(wire: LabelWire) -> Self {
        match wire {
            LabelWire::Color(color) => Label::from_color(color),
            LabelWire::Rich { id, name, color } => Label {
                id: id.unwrap_or_else(|| color.clone()),
                name,
                color,
            },
        }
    }
}
