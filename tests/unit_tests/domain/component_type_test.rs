use pagecraft::domain::ComponentType;

#[test]
fn given_known_label_when_parsing_then_returns_matching_type() {
    assert_eq!("hero".parse::<ComponentType>(), Ok(ComponentType::Hero));
    assert_eq!(" footer ".parse::<ComponentType>(), Ok(ComponentType::Footer));
}

#[test]
fn given_unknown_label_when_parsing_then_returns_invalid_type_error() {
    let result = "carousel".parse::<ComponentType>();
    assert_eq!(result, Err("Invalid component type: carousel".to_string()));
}

#[test]
fn given_unknown_label_when_parsing_leniently_then_falls_back_to_custom() {
    assert_eq!(
        ComponentType::from_label_or_custom("carousel"),
        ComponentType::Custom
    );
    assert_eq!(
        ComponentType::from_label_or_custom("contact"),
        ComponentType::Contact
    );
}

#[test]
fn given_every_type_when_displayed_then_round_trips_through_label() {
    for component_type in ComponentType::ALL {
        assert_eq!(
            component_type.to_string().parse::<ComponentType>(),
            Ok(component_type)
        );
    }
}

#[test]
fn given_type_when_serialized_then_uses_lowercase_label() {
    let json = serde_json::to_string(&ComponentType::Testimonials).unwrap();
    assert_eq!(json, "\"testimonials\"");
}
