use pagecraft::application::services::{TAILWIND_RUNTIME_URL, render_document};
use pagecraft::domain::{ComponentType, Website, WebsiteComponent};

#[test]
fn given_website_when_rendering_then_components_appear_in_order() {
    let mut website = Website::new("Bakery <Shop>");
    website.add_component(WebsiteComponent::new(
        ComponentType::Footer,
        "<footer>F</footer>".to_string(),
        1,
    ));
    website.add_component(WebsiteComponent::new(
        ComponentType::Header,
        "<header>H</header>".to_string(),
        0,
    ));

    let html = render_document(&website);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Bakery &lt;Shop&gt;</title>"));
    assert!(html.contains(TAILWIND_RUNTIME_URL));
    assert!(html.contains("<header>H</header>\n<footer>F</footer>"));
}

#[test]
fn given_empty_website_when_rendering_then_returns_document_shell() {
    let html = render_document(&Website::default());
    assert!(html.contains("<body>\n\n</body>"));
}
