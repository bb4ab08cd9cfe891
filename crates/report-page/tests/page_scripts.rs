use pretty_assertions::assert_eq;
use report_dom::{parse_markup, NodeId, ScrollOffset, SelectedFile};
use report_page::{DialogHost, Environment, Page, ScriptedDialogs};
use report_photo_compare::CompareEvent;

fn main_page(markup: &str, env: Environment) -> Page {
    let mut page = Page::builder(parse_markup(markup).unwrap())
        .environment(env)
        .with_main_scripts()
        .build();
    page.ready();
    page
}

fn find<D: DialogHost>(page: &Page<D>, selector: &str) -> NodeId {
    page.document()
        .query_selector(page.document().root(), selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {}", selector))
}

fn count<D: DialogHost>(page: &Page<D>, selector: &str) -> usize {
    page.document()
        .query_selector_all(page.document().root(), selector)
        .unwrap()
        .len()
}

#[test]
fn test_tooltip_follows_hover() {
    let mut page = main_page(
        r#"<button class="btn" data-bs-toggle="tooltip" title="PDFをダウンロード">PDF</button>"#,
        Environment::desktop(),
    );
    let button = find(&page, "button");
    assert_eq!(page.document().attribute(button, "title"), None);

    page.mouse_enter(button);
    let tip = find(&page, ".tooltip.show");
    let inner = find(&page, ".tooltip .tooltip-inner");
    assert_eq!(page.document().text(inner), "PDFをダウンロード");
    assert_eq!(
        page.document().attribute(button, "aria-describedby"),
        page.document().attribute(tip, "id")
    );

    page.mouse_leave(button);
    assert_eq!(count(&page, ".tooltip"), 0);
    assert_eq!(page.document().attribute(button, "aria-describedby"), None);
}

#[test]
fn test_popover_toggles_on_click() {
    let mut page = main_page(
        r#"<button data-bs-toggle="popover" data-bs-title="料金" data-bs-content="税込表示です">?</button>"#,
        Environment::desktop(),
    );
    let trigger = find(&page, "button");

    page.click(trigger);
    assert_eq!(page.document().text(find(&page, ".popover .popover-header")), "料金");
    assert_eq!(page.document().text(find(&page, ".popover .popover-body")), "税込表示です");

    page.click(trigger);
    assert_eq!(count(&page, ".popover"), 0);
}

#[test]
fn test_alerts_close_after_delay() {
    let mut page = main_page(
        r#"<div class="alert alert-success fade show" role="alert">報告書を保存しました</div>
           <div class="alert alert-warning show" id="manual">確認してください</div>"#,
        Environment::desktop(),
    );
    let saved = find(&page, ".alert-success");
    let manual = find(&page, "#manual");
    // Removed by hand before the timer fires
    page.document_mut().detach(manual);

    page.advance(4_999);
    assert!(page.document().is_connected(saved));

    page.advance(1);
    assert!(!page.document().is_connected(saved));
    assert!(!page.document().has_class(saved, "show"));
    assert_eq!(page.scheduler().pending(), 0);
}

#[test]
fn test_confirm_declined_keeps_page() {
    let mut page = main_page(
        r#"<a href="/reports/12/delete" data-confirm="この報告書を削除しますか？"><i class="fa fa-trash"></i></a>"#,
        Environment::desktop(),
    );
    let icon = find(&page, "i");

    page.dialogs_mut().answer_next(false);
    page.click(icon);
    assert_eq!(page.location(), None);

    page.click(icon);
    assert_eq!(page.location(), Some("/reports/12/delete"));
    assert_eq!(
        page.dialogs().confirms,
        vec!["この報告書を削除しますか？".to_string(); 2]
    );
}

#[test]
fn test_confirm_with_custom_dialog_host() {
    let mut page = Page::builder(
        parse_markup(r#"<a href="/logout" data-confirm="ログアウトしますか？">ログアウト</a>"#).unwrap(),
    )
    .dialogs(ScriptedDialogs::new().with_default_answer(false))
    .with_main_scripts()
    .build();
    page.ready();

    let link = find(&page, "a");
    page.click(link);
    assert!(page.history().is_empty());
}

#[test]
fn test_invalid_form_is_not_submitted() {
    let mut page = main_page(
        r#"<form class="needs-validation" action="/customers" method="post">
             <input name="name" required="" maxlength="20"/>
             <input name="zip" pattern="[0-9]{3}-?[0-9]{4}"/>
             <button type="submit">登録</button>
           </form>"#,
        Environment::desktop(),
    );
    let form = find(&page, "form");
    let submit = find(&page, "button");

    page.click(submit);
    assert!(page.submitted_forms().is_empty());
    assert!(page.document().has_class(form, "was-validated"));

    page.input(find(&page, r#"input[name="name"]"#), "株式会社クリーン");
    page.input(find(&page, r#"input[name="zip"]"#), "150-0001");
    page.click(submit);
    assert_eq!(page.submitted_forms(), &[form]);
}

#[test]
fn test_required_checkbox_checked_by_click() {
    let mut page = main_page(
        r#"<form class="needs-validation">
             <label><input type="checkbox" name="agree" required=""/>同意する</label>
             <button type="submit">送信</button>
           </form>"#,
        Environment::desktop(),
    );
    let form = find(&page, "form");
    let submit = find(&page, "button");

    page.click(submit);
    assert!(page.submitted_forms().is_empty());

    page.click(find(&page, r#"input[name="agree"]"#));
    page.click(submit);
    assert_eq!(page.submitted_forms(), &[form]);
}

#[test]
fn test_plain_form_skips_validation() {
    let mut page = main_page(
        r#"<form><input required=""/><input type="submit" value="検索"/></form>"#,
        Environment::desktop(),
    );
    let form = find(&page, "form");
    page.click(find(&page, r#"input[type="submit"]"#));
    assert_eq!(page.submitted_forms(), &[form]);
    assert!(!page.document().has_class(form, "was-validated"));
}

#[test]
fn test_image_preview_after_read() {
    let mut page = main_page(
        r#"<input type="file" class="image-input" data-preview="before-preview"/>
           <img id="before-preview" style="display: none"/>"#,
        Environment::desktop(),
    );
    let input = find(&page, ".image-input");
    let preview = find(&page, "#before-preview");

    page.select_files(input, Vec::new());
    assert_eq!(page.scheduler().pending(), 0);

    page.select_files(
        input,
        vec![SelectedFile::new("kitchen.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])],
    );
    assert_eq!(page.document().attribute(preview, "src"), None);

    page.advance(0);
    assert_eq!(
        page.document().attribute(preview, "src"),
        Some("data:image/jpeg;base64,/9j/")
    );
    assert_eq!(page.document().style(preview, "display"), Some("block"));
}

#[test]
fn test_tables_get_wrapped_once() {
    let page = main_page(
        r#"<div class="card"><table class="table" id="plain"/></div>
           <div class="table-responsive"><table id="wrapped"/></div>
           <table class="no-responsive" id="opted-out"/>"#,
        Environment::desktop(),
    );
    assert_eq!(count(&page, ".table-responsive"), 2);

    let doc = page.document();
    let plain = find(&page, "#plain");
    let wrapper = doc.parent(plain).unwrap();
    assert!(doc.has_class(wrapper, "table-responsive"));
    assert_eq!(doc.tag(doc.parent(wrapper).unwrap()), "div");
    assert!(doc.has_class(doc.parent(wrapper).unwrap(), "card"));

    let opted_out = find(&page, "#opted-out");
    assert_eq!(doc.parent(opted_out), Some(doc.body()));
}

#[test]
fn test_device_classes() {
    let page = main_page("<main/>", Environment::iphone());
    let body = page.document().body();
    assert!(page.document().has_class(body, "ios-device"));
    assert!(page.document().has_class(body, "touch-device"));

    let page = main_page("<main/>", Environment::android());
    let body = page.document().body();
    assert!(!page.document().has_class(body, "ios-device"));
    assert!(page.document().has_class(body, "touch-device"));

    let page = main_page("<main/>", Environment::desktop());
    let body = page.document().body();
    assert!(!page.document().has_class(body, "touch-device"));
}

const NAVBAR: &str = r##"
<nav class="navbar navbar-expand-lg">
  <button class="navbar-toggler" type="button" data-bs-target="#mainNav" aria-expanded="false">
    <span class="navbar-toggler-icon"></span>
  </button>
  <div class="collapse navbar-collapse" id="mainNav">
    <ul class="navbar-nav">
      <li class="nav-item"><a class="nav-link" href="/reports">報告書一覧</a></li>
      <li class="nav-item"><a class="nav-link" href="/customers">顧客</a></li>
    </ul>
  </div>
</nav>"##;

#[test]
fn test_navbar_closes_after_link_on_mobile() {
    let mut page = main_page(NAVBAR, Environment::android());
    let collapse = find(&page, "#mainNav");
    let toggler = find(&page, ".navbar-toggler");

    page.click(find(&page, ".navbar-toggler-icon"));
    assert!(page.document().has_class(collapse, "show"));
    assert_eq!(page.document().attribute(toggler, "aria-expanded"), Some("true"));

    page.click(find(&page, r#"a[href="/reports"]"#));
    assert_eq!(page.location(), Some("/reports"));
    assert!(!page.document().has_class(collapse, "show"));
    assert_eq!(page.document().attribute(toggler, "aria-expanded"), Some("false"));
}

#[test]
fn test_navbar_stays_open_on_desktop() {
    let mut page = main_page(NAVBAR, Environment::desktop().with_viewport_width(800));
    let collapse = find(&page, "#mainNav");
    page.click(find(&page, ".navbar-toggler"));
    page.resize(1200);

    page.click(find(&page, r#"a[href="/customers"]"#));
    assert_eq!(page.location(), Some("/customers"));
    assert!(page.document().has_class(collapse, "show"));
}

const DROPDOWNS: &str = r##"
<nav class="navbar">
  <div class="collapse navbar-collapse">
    <ul class="navbar-nav">
      <li class="nav-item dropdown" id="reports">
        <a class="nav-link dropdown-toggle" href="#" data-bs-toggle="dropdown" aria-expanded="false">報告書</a>
        <ul class="dropdown-menu">
          <li><a class="dropdown-item" href="/reports/new">新規作成</a></li>
          <li><a class="dropdown-item" href="#">準備中</a></li>
        </ul>
      </li>
      <li class="nav-item dropdown" id="settings">
        <a class="nav-link dropdown-toggle" href="#" data-bs-toggle="dropdown" aria-expanded="false">設定</a>
        <ul class="dropdown-menu">
          <li><a class="dropdown-item" href="/settings/company">会社情報</a></li>
        </ul>
      </li>
    </ul>
  </div>
</nav>
<main><p id="content">本文</p></main>"##;

#[test]
fn test_ios_dropdown_opens_one_at_a_time() {
    let mut page = main_page(DROPDOWNS, Environment::iphone());
    let reports_toggle = find(&page, "#reports .dropdown-toggle");
    let settings_toggle = find(&page, "#settings .dropdown-toggle");
    let reports = find(&page, "#reports");
    let settings = find(&page, "#settings");
    let reports_menu = find(&page, "#reports .dropdown-menu");
    assert_eq!(page.document().attribute(reports_toggle, "data-bs-toggle"), None);

    page.touch_start(reports_toggle, 40);
    let doc = page.document();
    assert!(doc.has_class(find(&page, ".navbar-collapse"), "show"));
    assert!(doc.has_class(reports, "show"));
    assert!(doc.has_class(reports_menu, "show"));
    assert_eq!(doc.attribute(reports_toggle, "aria-expanded"), Some("true"));
    assert_eq!(doc.style(reports_menu, "display"), Some("block"));
    assert_eq!(doc.style(reports_menu, "background-color"), Some("rgba(0, 0, 0, 0.8)"));
    assert_eq!(doc.style(reports_menu, "margin-top"), Some("0.5rem"));

    page.touch_start(settings_toggle, 40);
    let doc = page.document();
    assert!(!doc.has_class(reports, "show"));
    assert!(!doc.has_class(reports_menu, "show"));
    assert_eq!(doc.attribute(reports_toggle, "aria-expanded"), Some("false"));
    assert!(doc.has_class(settings, "show"));

    // Second touch on the same toggle closes it
    page.touch_start(settings_toggle, 40);
    assert!(!page.document().has_class(settings, "show"));
}

#[test]
fn test_ios_outside_touch_closes_menus() {
    let mut page = main_page(DROPDOWNS, Environment::iphone());
    let reports = find(&page, "#reports");

    page.touch_start(find(&page, "#reports .dropdown-toggle"), 10);
    assert!(page.document().has_class(reports, "show"));

    page.touch_start(find(&page, "#content"), 10);
    assert!(!page.document().has_class(reports, "show"));
}

#[test]
fn test_ios_dropdown_item_navigates_once() {
    let mut page = main_page(DROPDOWNS, Environment::iphone());
    let reports = find(&page, "#reports");
    page.touch_start(find(&page, "#reports .dropdown-toggle"), 10);

    page.touch_start(find(&page, r##"a[href="#"].dropdown-item"##), 10);
    assert_eq!(page.location(), None);

    page.touch_start(find(&page, r#"a[href="/reports/new"]"#), 10);
    assert_eq!(page.history(), &["/reports/new".to_string()]);
    assert!(page.document().has_class(reports, "show"));

    page.touch_start(find(&page, "#settings .dropdown-toggle"), 10);
    page.click(find(&page, r#"a[href="/settings/company"]"#));
    assert_eq!(
        page.history(),
        &["/reports/new".to_string(), "/settings/company".to_string()]
    );
}

#[test]
fn test_dropdowns_untouched_off_ios() {
    let mut page = main_page(DROPDOWNS, Environment::android());
    let toggle = find(&page, "#reports .dropdown-toggle");
    assert_eq!(page.document().attribute(toggle, "data-bs-toggle"), Some("dropdown"));

    page.touch_start(toggle, 10);
    assert!(!page.document().has_class(find(&page, "#reports"), "show"));
}

#[test]
fn test_map_for_address() {
    let mut page = main_page("<main/>", Environment::desktop());
    page.show_map_for_address("〒150-0001 東京都渋谷区神宮前");
    page.show_map_for_address("〒150-0001");

    let dialogs = page.dialogs();
    assert_eq!(dialogs.alerts, vec!["有効な住所が設定されていません。".to_string()]);
    assert_eq!(dialogs.windows.len(), 1);
    assert!(dialogs.windows[0]
        .url
        .starts_with("https://www.google.com/maps/search/?api=1&query=%E6%9D%B1"));
    assert_eq!(dialogs.windows[0].target, "_blank");
    assert_eq!(dialogs.windows[0].features, "noopener,noreferrer");
}

#[test]
fn test_photo_compare_runs_inside_page() {
    let mut page = Page::builder(
        parse_markup(
            r#"<div class="photo-compare-container">
                 <div class="before-photo"><img src="/b.jpg"/></div>
                 <div class="after-photo"><img src="/a.jpg"/></div>
                 <button class="zoom-in">+</button>
               </div>"#,
        )
        .unwrap(),
    )
    .with_main_scripts()
    .with_photo_compare()
    .build();
    assert!(page.photo_compare().is_none());
    page.ready();
    assert_eq!(page.photo_compare().map(|c| c.len()), Some(1));

    let zoom_in = find(&page, ".zoom-in");
    page.click(zoom_in);
    let events: Vec<&CompareEvent> = page.compare_events().iter().map(|e| &e.event).collect();
    assert_eq!(events, vec![&CompareEvent::ZoomChanged(110)]);
}

fn compare_page() -> Page {
    let mut page = Page::builder(
        parse_markup(
            r#"<div class="photo-compare-container">
                 <div class="photo-compare-loader">読み込み中...</div>
                 <div class="before-photo"><img src="/b.jpg"/></div>
                 <div class="after-photo"><img src="/a.jpg"/></div>
               </div>"#,
        )
        .unwrap(),
    )
    .with_main_scripts()
    .with_photo_compare()
    .build();
    page.ready();
    page
}

#[test]
fn test_photo_compare_waits_for_both_images() {
    let mut page = compare_page();
    let loader = find(&page, ".photo-compare-loader");
    let is_loaded = |page: &Page| page.photo_compare().and_then(|c| c.instance(0)).map(|i| i.is_loaded());

    page.finish_image_load(find(&page, ".before-photo img"));
    assert_eq!(is_loaded(&page), Some(false));
    assert_eq!(page.document().style(loader, "display"), None);

    page.finish_image_load(find(&page, ".after-photo img"));
    assert_eq!(is_loaded(&page), Some(true));
    assert_eq!(page.document().style(loader, "display"), Some("none"));
    assert_eq!(page.document().pending_events(), 0);
}

#[test]
fn test_photo_compare_mirrors_pane_scroll() {
    let mut page = compare_page();
    let before = find(&page, ".before-photo");
    let after = find(&page, ".after-photo");

    page.scroll(before, ScrollOffset::new(40, 10));
    assert_eq!(page.document().scroll(after), ScrollOffset::new(40, 10));

    page.scroll(after, ScrollOffset::new(5, 0));
    assert_eq!(page.document().scroll(before), ScrollOffset::new(5, 0));
    assert_eq!(page.document().pending_events(), 0);
}
