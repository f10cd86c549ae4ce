use fortimac_application::ports::MacExtractor;
use fortimac_application::services::RegexMacExtractor;
use fortimac_application::use_cases::GenerateScriptUseCase;
use fortimac_domain::{DomainError, GenerationRequest};
use std::sync::Arc;

mod helpers;
use helpers::MockMacExtractor;

fn use_case() -> GenerateScriptUseCase {
    GenerateScriptUseCase::new(Arc::new(RegexMacExtractor::new()))
}

fn macs_of(result: &fortimac_domain::GenerationResult) -> Vec<&str> {
    result.extracted_macs.iter().map(|m| m.as_str()).collect()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_input_is_rejected() {
    let result = use_case().execute(&GenerationRequest::new("", "FW", 1));
    assert_eq!(result, Err(DomainError::EmptyInput));
}

#[test]
fn test_whitespace_input_is_rejected() {
    let result = use_case().execute(&GenerationRequest::new(" \t\r\n  ", "FW", 1));
    assert_eq!(result, Err(DomainError::EmptyInput));
}

#[test]
fn test_text_without_macs_is_rejected() {
    let result = use_case().execute(&GenerationRequest::new("no macs here", "FW", 1));
    assert_eq!(result, Err(DomainError::NoValidMacFound));
}

#[test]
fn test_empty_input_short_circuits_before_extraction() {
    let extractor = Arc::new(MockMacExtractor::returning(&["AA:BB:CC:DD:EE:FF"]));
    let use_case = GenerateScriptUseCase::new(extractor.clone());

    let result = use_case.execute(&GenerationRequest::new("   ", "FW", 1));

    assert_eq!(result, Err(DomainError::EmptyInput));
    assert_eq!(extractor.calls(), 0);
}

#[test]
fn test_extractor_with_no_matches_yields_no_valid_mac() {
    let extractor = Arc::new(MockMacExtractor::empty());
    let use_case = GenerateScriptUseCase::new(extractor.clone());

    let result = use_case.execute(&GenerationRequest::new("something", "FW", 1));

    assert_eq!(result, Err(DomainError::NoValidMacFound));
    assert_eq!(extractor.calls(), 1);
}

#[test]
fn test_error_messages_match_http_bodies() {
    assert_eq!(DomainError::EmptyInput.to_string(), "MacAddressList is empty.");
    assert_eq!(
        DomainError::NoValidMacFound.to_string(),
        "No valid MAC addresses found."
    );
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_scan_order_is_preserved() {
    let result = use_case()
        .execute(&GenerationRequest::new(
            "xx 11:22:33:44:55:66 yy AA-BB-CC-DD-EE-FF",
            "FW",
            1,
        ))
        .unwrap();

    assert_eq!(macs_of(&result), vec!["11:22:33:44:55:66", "AA:BB:CC:DD:EE:FF"]);
}

#[test]
fn test_duplicates_are_kept() {
    let result = use_case()
        .execute(&GenerationRequest::new(
            "aa:bb:cc:dd:ee:ff\nAA-BB-CC-DD-EE-FF\naa:bb:cc:dd:ee:ff",
            "FW",
            1,
        ))
        .unwrap();

    assert_eq!(result.count, 3);
    assert!(result.extracted_macs.iter().all(|m| m.as_str() == "AA:BB:CC:DD:EE:FF"));
}

#[test]
fn test_mixed_separators_are_accepted() {
    let result = use_case()
        .execute(&GenerationRequest::new("AA:BB-CC:DD-EE:FF", "FW", 1))
        .unwrap();

    assert_eq!(macs_of(&result), vec!["AA:BB:CC:DD:EE:FF"]);
}

#[test]
fn test_noise_around_addresses_is_ignored() {
    let input = "# exported from inventory.csv\n\
                 laptop-01, 3c:22:fb:0a:1b:2c, room 12\n\
                 tablet-02; 3C-22-FB-0A-1B-2D\n\
                 broken 3c:22:fb:0a:1b\n";
    let result = use_case()
        .execute(&GenerationRequest::new(input, "FW", 2))
        .unwrap();

    assert_eq!(result.count, result.extracted_macs.len());
    assert_eq!(macs_of(&result), vec!["3C:22:FB:0A:1B:2C", "3C:22:FB:0A:1B:2D"]);
}

#[test]
fn test_regex_extractor_matches_trait_contract() {
    let extractor: Arc<dyn MacExtractor> = Arc::new(RegexMacExtractor::new());
    let macs = extractor.extract("01-23-45-67-89-ab and 01:23:45:67:89:AB");
    assert_eq!(macs.len(), 2);
    assert_eq!(macs[0], macs[1]);
}

// ============================================================================
// Script rendering
// ============================================================================

#[test]
fn test_end_to_end_script() {
    let result = use_case()
        .execute(&GenerationRequest::new("aa:bb:cc:dd:ee:ff", "BuildingA", 1))
        .unwrap();

    let lines: Vec<&str> = result.script.lines().collect();
    assert!(lines.contains(&"    set macaddr \"AA:BB:CC:DD:EE:FF\""));
    assert!(lines
        .iter()
        .any(|l| l.trim() == "set macaddr \"AA:BB:CC:DD:EE:FF\""));
    assert!(result
        .script
        .contains("edit \"Staff - Device - MAC Addresses\""));
    assert!(result.script.contains("edit \"BuildingA\"-\"root\""));
    assert_eq!(result.count, 1);
}

#[test]
fn test_group_three_uses_intune_label() {
    let result = use_case()
        .execute(&GenerationRequest::new("aa:bb:cc:dd:ee:ff", "FW", 3))
        .unwrap();

    assert!(result.script.contains("edit \"Microsft Intune Devices\""));
}

#[test]
fn test_unknown_group_falls_back_to_staff() {
    let staff = use_case()
        .execute(&GenerationRequest::new("aa:bb:cc:dd:ee:ff", "FW", 1))
        .unwrap();
    let unknown = use_case()
        .execute(&GenerationRequest::new("aa:bb:cc:dd:ee:ff", "FW", 99))
        .unwrap();

    assert_eq!(staff.script, unknown.script);
}

#[test]
fn test_script_quotes_every_address_in_order() {
    let result = use_case()
        .execute(&GenerationRequest::new(
            "11-22-33-44-55-66 aa:bb:cc:dd:ee:ff",
            "FW",
            4,
        ))
        .unwrap();

    assert!(result
        .script
        .contains("set macaddr \"11:22:33:44:55:66\" \"AA:BB:CC:DD:EE:FF\""));
    assert!(result
        .script
        .contains("edit \"Securly Filtered - Device MAC Addresses\""));
}

#[test]
fn test_fortigate_name_is_inserted_verbatim() {
    let result = use_case()
        .execute(&GenerationRequest::new("aa:bb:cc:dd:ee:ff", "Site \"B\"", 1))
        .unwrap();

    assert!(result.script.contains("edit \"Site \"B\"\"-\"root\""));
}

#[test]
fn test_use_case_is_shareable_across_threads() {
    let use_case = Arc::new(use_case());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let use_case = Arc::clone(&use_case);
            std::thread::spawn(move || {
                let input = format!("00:00:00:00:00:0{i}");
                use_case
                    .execute(&GenerationRequest::new(input, "FW", 1))
                    .map(|r| r.extracted_macs[0].to_string())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let mac = handle.join().unwrap().unwrap();
        assert_eq!(mac, format!("00:00:00:00:00:0{i}"));
    }
}
