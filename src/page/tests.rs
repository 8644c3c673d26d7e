use super::memory::{Child, MemoryPage, Node};
use super::*;

#[test]
fn element_and_control_ids_match_the_volumio_ui() {
    assert_eq!(ElementId::Artist.as_str(), "currentartist");
    assert_eq!(ElementId::Song.as_str(), "currentsong");
    assert_eq!(ElementId::Album.as_str(), "currentalbum");
    assert_eq!(ElementId::Countdown.as_str(), "countdown-display");

    assert_eq!(Control::Play.element_id(), "play");
    assert_eq!(Control::Stop.element_id(), "stop");
    assert_eq!(Control::Previous.element_id(), "previous");
    assert_eq!(Control::Next.element_id(), "next");
}

#[test]
fn probe_scripts_look_up_the_quoted_element_id() {
    let script = Probe::FirstChildText(ElementId::Song).script();
    assert!(script.contains(r#"document.getElementById("currentsong")"#));
    assert!(script.contains("innerText || c.textContent"));

    let script = Probe::FirstChildClass(ElementId::Countdown).script();
    assert!(script.contains(r#"getElementById("countdown-display")"#));
    assert!(script.contains("typeof c.className === 'string'"));

    let script = Probe::TextContent(ElementId::Album).script();
    assert!(script.contains("return el.textContent;"));
    assert!(script.starts_with("(() => {") && script.ends_with("})()"));
}

#[test]
fn click_script_reports_missing_elements() {
    let script = click_script(Control::Previous);
    assert!(script.contains(r#"getElementById("previous")"#));
    assert!(script.contains("if (!el) return false; el.click(); return true;"));
}

#[test]
fn missing_control_error_names_the_element() {
    let err = PageError::MissingControl(Control::Stop);
    assert_eq!(err.to_string(), "page has no `#stop` control");
}

async fn read(page: &MemoryPage, probe: Probe) -> Option<String> {
    page.try_read(&probe).await
}

#[tokio::test]
async fn memory_page_reads_follow_dom_semantics() {
    let page = MemoryPage::new();
    page.set(ElementId::Artist, Node::text("Artist"));
    page.set(
        ElementId::Song,
        Node {
            text_content: "ignored".into(),
            first_child: Some(Child {
                inner_text: Some("Rendered".into()),
                text_content: "Raw".into(),
                class_name: None,
            }),
        },
    );
    page.set(ElementId::Album, Node::empty());
    page.set(ElementId::Countdown, Node::with_child_class("play"));

    assert_eq!(read(&page, Probe::FirstChildText(ElementId::Artist)).await.as_deref(), Some("Artist"));
    assert_eq!(read(&page, Probe::FirstChildText(ElementId::Song)).await.as_deref(), Some("Rendered"));
    assert_eq!(read(&page, Probe::FirstChildText(ElementId::Album)).await, None);
    assert_eq!(read(&page, Probe::TextContent(ElementId::Album)).await.as_deref(), Some(""));
    assert_eq!(read(&page, Probe::FirstChildClass(ElementId::Countdown)).await.as_deref(), Some("play"));
    assert_eq!(read(&page, Probe::FirstChildClass(ElementId::Artist)).await, None);

    page.remove(ElementId::Artist);
    assert_eq!(read(&page, Probe::TextContent(ElementId::Artist)).await, None);
}

#[tokio::test]
async fn memory_page_clicks_only_present_buttons() {
    let page = MemoryPage::with_transport();
    page.remove_button(Control::Stop);

    assert!(page.click(Control::Play).await.is_ok());
    assert!(matches!(
        page.click(Control::Stop).await,
        Err(PageError::MissingControl(Control::Stop))
    ));
    assert_eq!(page.clicks(), vec![Control::Play]);
}
