use std::collections::HashSet;

use pagecraft::application::templates::demo_component;
use pagecraft::domain::ComponentType;

#[test]
fn given_same_type_when_generating_twice_then_output_is_identical() {
    assert_eq!(
        demo_component(ComponentType::Hero),
        demo_component(ComponentType::Hero)
    );
}

#[test]
fn given_each_type_when_generating_then_starts_with_typed_marker() {
    for component_type in ComponentType::ALL {
        let html = demo_component(component_type);
        let marker = format!("<!-- DEMO COMPONENT - Type: {component_type} -->");
        assert!(html.starts_with(&marker), "{component_type}: {html}");
    }
}

#[test]
fn given_all_types_when_generating_then_templates_are_distinct() {
    let bodies: HashSet<String> = ComponentType::ALL
        .iter()
        .map(|t| {
            demo_component(*t)
                .split_once('\n')
                .map(|(_, body)| body.to_string())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(bodies.len(), ComponentType::ALL.len());
}

#[test]
fn given_unknown_label_when_generating_then_uses_custom_template() {
    let html = demo_component(ComponentType::from_label_or_custom("carousel"));
    assert!(html.starts_with("<!-- DEMO COMPONENT - Type: custom -->"));
    assert_eq!(html, demo_component(ComponentType::Custom));
}
