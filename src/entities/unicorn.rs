use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Unicorn {
    pub name: String,
    pub color: String,
    pub gender: String,
}

impl Unicorn {
    pub fn new(name: &str, color: &str, gender: &str) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            gender: gender.into(),
        }
    }
}
