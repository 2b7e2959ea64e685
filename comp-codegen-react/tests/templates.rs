//! Snapshot tests for the rendered component files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use comp_codegen_react::{GenerationRequest, Generator, TemplateSet};

fn render(name: &str, element: &str) -> TemplateSet {
    let request = GenerationRequest::new(name, format!("./components/{name}"), "./components")
        .with_element(element);
    Generator::new(&request).templates()
}

#[test]
fn test_button_index() {
    let files = render("Button", "div");
    insta::assert_snapshot!("button_index", files.index);
}

#[test]
fn test_button_types() {
    let files = render("Button", "div");
    insta::assert_snapshot!("button_types", files.types);
}

#[test]
fn test_button_component() {
    let files = render("Button", "div");
    insta::assert_snapshot!("button_component", files.component);
}

#[test]
fn test_button_test_suite() {
    let files = render("Button", "div");
    insta::assert_snapshot!("button_test", files.test);
}

#[test]
fn test_element_only_changes_element_positions() {
    let div = render("Badge", "div");
    let span = render("Badge", "span");

    assert_eq!(span.types, div.types.replace("div", "span"));
    assert_eq!(span.component, div.component.replace("div", "span"));
    assert_eq!(span.index, div.index);
    assert_eq!(span.test, div.test);
    assert!(!span.types.contains("div"));
    assert!(!span.component.contains("div"));
}

#[test]
fn test_name_is_used_verbatim() {
    let files = render("myWidget", "div");

    assert!(files.index.starts_with("export * from './myWidget';\n"));
    assert!(files.types.contains("export type myWidgetProps"));
    assert!(files.types.contains("export type StyledmyWidgetProps = {}"));
    assert!(files.component.contains("export const myWidget: FC<myWidgetProps>"));
    assert!(files.test.contains("import { myWidget } from '.';"));
}
