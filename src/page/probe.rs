//! Element identifiers of the Volumio UI and the reads the extractor makes.

/// Containers the extractor reads from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Artist,
    Song,
    Album,
    /// Progress widget whose first child's class flips between play and pause.
    Countdown,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Artist => "currentartist",
            ElementId::Song => "currentsong",
            ElementId::Album => "currentalbum",
            ElementId::Countdown => "countdown-display",
        }
    }
}

/// Transport buttons the dispatcher clicks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Play,
    Stop,
    Previous,
    Next,
}

impl Control {
    pub fn element_id(self) -> &'static str {
        match self {
            Control::Play => "play",
            Control::Stop => "stop",
            Control::Previous => "previous",
            Control::Next => "next",
        }
    }
}

/// One independently failing read against the document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Rendered text of the element's first child node, falling back to its
    /// `textContent`. Empty text reads as absent.
    FirstChildText(ElementId),
    /// `textContent` of the element itself.
    TextContent(ElementId),
    /// `className` of the element's first child, when it is a string.
    FirstChildClass(ElementId),
}

impl Probe {
    pub fn element(self) -> ElementId {
        match self {
            Probe::FirstChildText(id) | Probe::TextContent(id) | Probe::FirstChildClass(id) => id,
        }
    }

    /// Script evaluating to the probed string or `null`.
    pub fn script(self) -> String {
        let lookup = format!(
            "document.getElementById({})",
            js_string(self.element().as_str())
        );
        let body = match self {
            Probe::FirstChildText(_) => {
                "const c = el.firstChild; if (!c) return null; \
                 const t = c.innerText || c.textContent; return t ? t : null;"
            }
            Probe::TextContent(_) => "return el.textContent;",
            Probe::FirstChildClass(_) => {
                "const c = el.firstChild; if (!c) return null; \
                 return typeof c.className === 'string' ? c.className : null;"
            }
        };
        format!("(() => {{ const el = {lookup}; if (!el) return null; {body} }})()")
    }
}

/// Script clicking `control`, evaluating to whether the element existed.
pub fn click_script(control: Control) -> String {
    format!(
        "(() => {{ const el = document.getElementById({}); if (!el) return false; el.click(); return true; }})()",
        js_string(control.element_id())
    )
}

fn js_string(s: &str) -> String {
    // JSON string literals are valid JavaScript string literals.
    serde_json::Value::from(s).to_string()
}
