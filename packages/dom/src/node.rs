use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Reserved id of the untouchable root node of every editable surface.
///
/// The root container can never be deleted, moved, or nested under another
/// node; the editor's mutation layer rejects any attempt to do so.
pub const ROOT_CONTAINER_ID: &str = "root-container";

/// Closed enumeration of component kinds the builder can place.
///
/// The core never interprets type-specific rendering; the external component
/// registry maps each kind to a default-props template and a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    Container,
    Header,
    Footer,
    Button,
    Input,
    Text,
    Image,
    Select,
    Checkbox,
    Switch,
    Textarea,
    DataGrid,
    MaterialIcon,
    DatePicker,
    TimePicker,
    DateTimePicker,
    MultiSelect,
    Tabs,
    Stepper,
    Group,
    RadioGroup,
    Rating,
}

impl ComponentType {
    /// Kinds whose children are regular editable content.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            ComponentType::Container
                | ComponentType::Header
                | ComponentType::Footer
                | ComponentType::Group
                | ComponentType::Tabs
                | ComponentType::Stepper
        )
    }
}

/// One element of the editable component tree.
///
/// `props` is an open-ended bag: `className` (utility-class string), an
/// optional `style` sub-object of structured CSS-like properties, and
/// whatever type-specific fields the component kind carries (`items` for
/// Tabs, `steps` for Stepper, `menuItems` for Header/Footer, ...).
///
/// Children are `Arc`-shared so tree edits copy only the path from the root
/// to the edited node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub props: HashMap<String, Value>,
    #[serde(default)]
    pub children: Vec<Arc<ComponentNode>>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: ComponentType) -> Self {
        Self {
            id: id.into(),
            kind,
            props: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// The root node every fresh surface starts with.
    pub fn root_container() -> Self {
        Self::new(ROOT_CONTAINER_ID, ComponentType::Container)
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// The node's utility-class string, empty when unset.
    pub fn class_name(&self) -> &str {
        self.props
            .get("className")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The structured `style` sub-object, if any.
    pub fn style(&self) -> Option<&Map<String, Value>> {
        self.props.get("style").and_then(Value::as_object)
    }
}
