use pagecraft::domain::{ComponentId, ComponentType, GenerationRequest, GenerationResult, Message};

#[test]
fn given_new_request_when_created_then_targets_no_component() {
    let request = GenerationRequest::new(vec![Message::user("hi")], ComponentType::Hero);
    assert_eq!(request.component_type, Some(ComponentType::Hero));
    assert!(request.replace_component.is_none());
}

#[test]
fn given_request_when_replacing_then_records_target_component() {
    let id = ComponentId::new();
    let request = GenerationRequest::new(vec![], ComponentType::Hero).replacing(id);
    assert_eq!(request.replace_component, Some(id));
}

#[test]
fn given_success_result_when_serialized_then_tags_status_and_provider() {
    let result = GenerationResult::Success {
        code: "<div></div>".to_string(),
        provider: Some("groq".to_string()),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["provider"], "groq");
    assert_eq!(json["code"], "<div></div>");
}

#[test]
fn given_degraded_result_when_inspected_then_reports_degraded_without_provider() {
    let result = GenerationResult::Degraded {
        code: "<div>demo</div>".to_string(),
        reason: "Network connection problem".to_string(),
    };
    assert!(result.is_degraded());
    assert!(result.provider().is_none());
    assert_eq!(result.code(), "<div>demo</div>");
    assert_eq!(serde_json::to_value(&result).unwrap()["status"], "degraded");
}
