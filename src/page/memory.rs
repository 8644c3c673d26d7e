//! In-memory stand-in for the rendered document.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{ActionPort, Control, DocumentReader, ElementId, PageError, Probe};

/// A node as the extractor sees it: a container with an optional first child.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub text_content: String,
    pub first_child: Option<Child>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Child {
    pub inner_text: Option<String>,
    pub text_content: String,
    /// `None` models a text node, which has no class name.
    pub class_name: Option<String>,
}

impl Node {
    /// A container whose only child is a text node.
    pub fn text(text: &str) -> Self {
        Self {
            text_content: text.to_string(),
            first_child: Some(Child {
                inner_text: None,
                text_content: text.to_string(),
                class_name: None,
            }),
        }
    }

    /// A container whose first child is an element with `class`.
    pub fn with_child_class(class: &str) -> Self {
        Self {
            text_content: String::new(),
            first_child: Some(Child {
                class_name: Some(class.to_string()),
                ..Child::default()
            }),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Default)]
pub(crate) struct MemoryPage {
    nodes: Mutex<HashMap<ElementId, Node>>,
    buttons: Mutex<Vec<Control>>,
    clicks: Mutex<Vec<Control>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with all four transport buttons present.
    pub fn with_transport() -> Self {
        let page = Self::new();
        *page.buttons.lock().unwrap() =
            vec![Control::Play, Control::Stop, Control::Previous, Control::Next];
        page
    }

    pub fn set(&self, id: ElementId, node: Node) -> &Self {
        self.nodes.lock().unwrap().insert(id, node);
        self
    }

    pub fn remove(&self, id: ElementId) -> &Self {
        self.nodes.lock().unwrap().remove(&id);
        self
    }

    pub fn remove_button(&self, control: Control) {
        self.buttons.lock().unwrap().retain(|c| *c != control);
    }

    pub fn clicks(&self) -> Vec<Control> {
        self.clicks.lock().unwrap().clone()
    }

    fn read(&self, probe: &Probe) -> Option<String> {
        let nodes = self.nodes.lock().unwrap();
        let node = nodes.get(&probe.element())?;
        match probe {
            Probe::TextContent(_) => Some(node.text_content.clone()),
            Probe::FirstChildText(_) => {
                let child = node.first_child.as_ref()?;
                let text = child
                    .inner_text
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| child.text_content.clone());
                (!text.is_empty()).then_some(text)
            }
            Probe::FirstChildClass(_) => node.first_child.as_ref()?.class_name.clone(),
        }
    }
}

impl DocumentReader for MemoryPage {
    async fn try_read(&self, probe: &Probe) -> Option<String> {
        self.read(probe)
    }
}

impl ActionPort for MemoryPage {
    async fn click(&self, control: Control) -> Result<(), PageError> {
        if !self.buttons.lock().unwrap().contains(&control) {
            return Err(PageError::MissingControl(control));
        }
        self.clicks.lock().unwrap().push(control);
        Ok(())
    }
}
