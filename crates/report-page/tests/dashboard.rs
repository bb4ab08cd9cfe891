use pretty_assertions::assert_eq;
use report_config::UiConfig;
use report_dom::{parse_markup, NodeId};
use report_page::{Environment, Page};

const DASHBOARD: &str = r#"
<div id="page-loader" class="page-loader"><div class="spinner-border"></div></div>
<a class="nav-back" href="/dashboard">戻る</a>
<div class="row stats-cards">
  <div class="col"><div class="card" id="card-reports"><div class="card-body"><i class="fas fa-file-alt"></i><span>12</span></div></div></div>
  <div class="col"><div class="card" id="card-customers"><div class="card-body"><i class="fas fa-users"></i><span>34</span></div></div></div>
</div>
<div class="row">
  <a class="btn btn-lg btn-primary" id="quick-new" href="/reports/new">新規報告書</a>
  <a class="btn btn-lg btn-secondary" id="quick-list" href="/reports">報告書一覧</a>
</div>
<div class="card"><div class="card-body"><a class="btn btn-outline-primary" id="more" href="/reports?page=2">もっと見る</a></div></div>
<table class="table">
  <tbody>
    <tr data-href="/reports/7"><td>2024-05-01</td><td>山田様</td></tr>
    <tr><td>2024-05-02</td><td>佐藤様</td></tr>
  </tbody>
</table>"#;

fn dashboard(env: Environment) -> Page {
    let mut page = Page::builder(parse_markup(DASHBOARD).unwrap())
        .environment(env)
        .with_main_scripts()
        .with_dashboard_scripts()
        .build();
    page.ready();
    page
}

fn find(page: &Page, selector: &str) -> NodeId {
    page.document()
        .query_selector(page.document().root(), selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {}", selector))
}

fn faded(page: &Page, selector: &str) -> bool {
    page.document().has_class(find(page, selector), "animate-fade-in")
}

#[test]
fn test_entrance_animation_and_loader_timeline() {
    let mut page = dashboard(Environment::desktop());
    let loader = find(&page, "#page-loader");

    page.advance(0);
    assert!(faded(&page, "#card-reports"));
    assert!(!faded(&page, "#card-customers"));

    page.advance(100);
    assert!(faded(&page, "#card-customers"));

    page.advance(200);
    assert_eq!(page.now(), 300);
    assert!(page.document().has_class(loader, "loaded"));
    assert_eq!(page.document().style(loader, "display"), None);

    page.advance(200);
    assert!(faded(&page, "#quick-new"));
    assert!(!faded(&page, "#quick-list"));

    page.advance(100);
    assert!(faded(&page, "#quick-list"));

    page.advance(199);
    assert_eq!(page.document().style(loader, "display"), None);
    page.advance(1);
    assert_eq!(page.document().style(loader, "display"), Some("none"));
    assert_eq!(page.scheduler().pending(), 0);
}

#[test]
fn test_configured_timings() {
    let config = UiConfig::from_toml_str(
        r#"
        [page]
        card_stagger_ms = 50
        quick_button_delay_ms = 0
        "#,
    )
    .unwrap();
    let mut page = Page::builder(parse_markup(DASHBOARD).unwrap())
        .config(config)
        .with_dashboard_scripts()
        .build();
    page.ready();

    page.advance(50);
    assert!(faded(&page, "#card-customers"));
    assert!(faded(&page, "#quick-list"));
}

#[test]
fn test_card_icon_beats_on_hover() {
    let mut page = dashboard(Environment::desktop());
    let card = find(&page, "#card-reports");
    let icon = find(&page, "#card-reports i");

    page.mouse_enter(card);
    assert!(page.document().has_class(icon, "fa-beat"));
    page.mouse_leave(card);
    assert!(!page.document().has_class(icon, "fa-beat"));
}

#[test]
fn test_row_link_navigates() {
    let mut page = dashboard(Environment::desktop());
    let row = find(&page, "tr[data-href]");
    assert_eq!(page.document().style(row, "cursor"), Some("pointer"));

    let cell = page.document().children(row)[1];
    page.click(cell);
    assert_eq!(page.location(), Some("/reports/7"));

    let plain_row = find(&page, "tr:not([data-href]) td");
    page.click(plain_row);
    assert_eq!(page.history().len(), 1);
}

#[test]
fn test_stats_layout_follows_viewport() {
    let mut page = dashboard(Environment::desktop());
    let cards = ["#card-reports", "#card-customers"].map(|s| find(&page, s));
    assert!(cards.iter().all(|&c| !page.document().has_class(c, "mb-3")));

    page.resize(600);
    assert!(cards.iter().all(|&c| page.document().has_class(c, "mb-3")));

    page.resize(768);
    assert!(cards.iter().all(|&c| !page.document().has_class(c, "mb-3")));
}

#[test]
fn test_narrow_device_starts_stacked() {
    let page = dashboard(Environment::iphone());
    assert!(page.document().has_class(find(&page, "#card-reports"), "mb-3"));
}

#[test]
fn test_touch_feedback_on_card_buttons() {
    let mut page = dashboard(Environment::android());
    let button = find(&page, "#more");

    page.touch_start(button, 200);
    assert_eq!(page.document().style(button, "transform"), Some("scale(0.97)"));
    page.touch_end(button, 200);
    assert_eq!(page.document().style(button, "transform"), Some("scale(1)"));
    assert_eq!(page.location(), None);

    let mut desktop = dashboard(Environment::desktop());
    let button = find(&desktop, "#more");
    desktop.touch_start(button, 200);
    assert_eq!(desktop.document().style(button, "transform"), None);
}

#[test]
fn test_swipe_right_goes_back() {
    let mut page = dashboard(Environment::android());
    let body = page.document().body();

    page.touch_start(body, 20);
    page.touch_end(body, 120);
    assert_eq!(page.location(), None, "exactly the threshold is not a swipe");

    page.touch_start(body, 300);
    page.touch_end(body, 40);
    assert_eq!(page.location(), None, "leftward swipes are ignored");

    page.touch_start(body, 20);
    page.touch_end(body, 180);
    assert_eq!(page.location(), Some("/dashboard"));
}

#[test]
fn test_swipe_ignored_without_touch() {
    let mut page = dashboard(Environment::desktop());
    let body = page.document().body();
    page.touch_start(body, 0);
    page.touch_end(body, 500);
    assert_eq!(page.location(), None);
}

#[test]
fn test_dropdown_touch_does_not_start_swipe() {
    let markup = format!(
        r##"<nav class="navbar"><div class="collapse navbar-collapse"><ul class="navbar-nav">
              <li class="nav-item dropdown">
                <a class="nav-link dropdown-toggle" href="#" data-bs-toggle="dropdown">報告書</a>
                <ul class="dropdown-menu"><li><a class="dropdown-item" href="/reports">一覧</a></li></ul>
              </li>
            </ul></div></nav>{}"##,
        DASHBOARD
    );
    let mut page = Page::builder(parse_markup(&markup).unwrap())
        .environment(Environment::iphone())
        .with_main_scripts()
        .with_dashboard_scripts()
        .build();
    page.ready();
    let toggle = find(&page, ".dropdown-toggle");
    let body = page.document().body();

    page.touch_start(toggle, 10);
    page.touch_end(body, 300);
    assert_eq!(page.location(), None);

    page.touch_start(body, 10);
    page.touch_end(body, 300);
    assert_eq!(page.location(), Some("/dashboard"));
}
