//! Element rendering specs

use crate::prelude::*;

#[test]
fn renders_id_class_and_content() {
    cli()
        .args(&[
            "element",
            "DIV",
            "--prop",
            "id=dock",
            "--prop",
            "className=panel bottom",
            "--content",
            "<b>x</b>",
        ])
        .passes()
        .stdout_eq("<div id=\"dock\" class=\"panel bottom\"><b>x</b></div>\n");
}

#[test]
fn text_content_is_escaped() {
    cli()
        .args(&["element", "p", "--prop", "textContent=a < b"])
        .passes()
        .stdout_eq("<p>a &lt; b</p>\n");
}

#[test]
fn prop_values_may_contain_equals() {
    cli()
        .args(&["element", "a", "--prop", "href=/q?x=1"])
        .passes()
        .stdout_eq("<a href=\"/q?x=1\"></a>\n");
}

#[test]
fn json_output_describes_the_element() {
    let run = cli()
        .args(&["-o", "json", "element", "img", "--prop", "src=a.png"])
        .passes();
    let json = run.json();
    assert_eq!(json["tag"], "img");
    assert_eq!(json["props"]["src"], "a.png");
}
