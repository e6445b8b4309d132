use super::*;

fn render(state: UiState) -> String {
    Owner::new().with(|| {
        provide_context(RwSignal::new(state));
        view! { <SiteHeader/> }.to_html()
    })
}

#[test]
fn closed_menu_renders_open_button() {
    let html = render(UiState::default());
    assert!(html.contains("aria-label=\"Open menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("\u{2630}"));
    assert!(!html.contains("class=\"active\""));
}

#[test]
fn open_menu_renders_active_nav_and_close_button() {
    let html = render(UiState { menu_open: true });
    assert!(html.contains("class=\"active\""));
    assert!(html.contains("aria-label=\"Close menu\""));
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("\u{2715}"));
}

#[test]
fn header_renders_every_nav_link() {
    let html = render(UiState::default());
    for link in NAV_LINKS {
        assert!(html.contains(&format!("href=\"{}\"", link.href)), "missing {}", link.href);
    }
    assert!(html.contains(LOGIN_LABEL));
}
