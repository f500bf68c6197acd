use scraper::{ElementRef, Html, Selector};

/// Find the form that posts to `action`.
#[track_caller]
pub(crate) fn must_get_form_with_action<'a>(html: &'a Html, action: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("form[action='{action}']")).unwrap();

    let form = html
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No form found with action \"{action}\""));

    assert_eq!(
        form.value().attr("method").unwrap_or_default(),
        "post",
        "want form with method=\"post\""
    );

    form
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}
